// crates/busstop-core/src/score.rs

//! Field-weighted relevance scoring.
//!
//! A token scores against each field it is a (case-insensitive) substring of:
//!
//! | Field         | Weight |
//! |---------------|--------|
//! | `description` | 2      |
//! | `code`        | 2      |
//! | `road_name`   | 1      |
//!
//! Weights add up across fields and across tokens. Description outranks road
//! name so that a stop named after a place surfaces before stops that merely
//! sit on a street of the same name.

use crate::model::BusStop;
use crate::text::TextFolding;

/// Which field of a stop a query token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Code,
    Description,
    RoadName,
}

impl MatchKind {
    pub const ALL: [MatchKind; 3] = [MatchKind::Code, MatchKind::Description, MatchKind::RoadName];

    #[inline]
    pub const fn weight(self) -> u32 {
        match self {
            MatchKind::Code => 2,
            MatchKind::Description => 2,
            MatchKind::RoadName => 1,
        }
    }
}

/// Folded copies of the searchable fields of one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeys {
    code: String,
    road_name: String,
    description: String,
}

impl SearchKeys {
    pub fn from_stop(stop: &BusStop) -> Self {
        Self::with_folding(stop, TextFolding::Lowercase)
    }

    pub fn with_folding(stop: &BusStop, folding: TextFolding) -> Self {
        SearchKeys {
            code: folding.fold(&stop.code),
            road_name: folding.fold(&stop.road_name),
            description: folding.fold(&stop.description),
        }
    }

    #[inline]
    fn field(&self, kind: MatchKind) -> &str {
        match kind {
            MatchKind::Code => &self.code,
            MatchKind::Description => &self.description,
            MatchKind::RoadName => &self.road_name,
        }
    }

    /// Fields `token` (already folded) is a substring of.
    pub fn matches<'a>(&'a self, token: &'a str) -> impl Iterator<Item = MatchKind> + 'a {
        MatchKind::ALL
            .into_iter()
            .filter(move |&kind| self.field(kind).contains(token))
    }

    /// Sum of match weights over all `tokens` (already folded).
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> u32 {
        tokens
            .iter()
            .flat_map(|t| self.matches(t.as_ref()))
            .map(MatchKind::weight)
            .sum()
    }
}

/// Scores one stop against a list of folded tokens.
///
/// ```
/// use busstop_core::{score::score, BusStop};
///
/// let stop = BusStop::new("01012", "Victoria St", "Hotel Grand Pacific", 1.2968, 103.8525);
/// assert_eq!(score(&stop, &["victoria"]), 1);
/// assert_eq!(score(&stop, &["hotel", "victoria"]), 3);
/// assert_eq!(score(&stop, &["orchard"]), 0);
/// ```
pub fn score<S: AsRef<str>>(stop: &BusStop, tokens: &[S]) -> u32 {
    SearchKeys::from_stop(stop).score(tokens)
}
