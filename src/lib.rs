//! busstop-rs: umbrella crate re-exporting [`busstop_core`] for the demos.

pub use busstop_core::*;
