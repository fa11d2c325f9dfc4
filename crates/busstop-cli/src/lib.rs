//! busstop-cli
//! ===========
//!
//! Command-line interface for the `busstop-core` bus stop repository.
//!
//! This crate primarily provides a binary (`busstop`). The library target
//! only carries this overview.
//!
//! Basic usage:
//!
//! ```text
//! busstop --help
//! busstop stats
//! busstop get 01012
//! busstop search victoria --limit 5
//! busstop nearby 1.2968 103.8527 --radius 300
//! ```
//!
//! For programmatic access use the [`busstop-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
