// crates/busstop-core/src/index.rs
use crate::error::{Result, StopDbError};
use crate::model::{BusStop, DbStats};
use crate::score::SearchKeys;
use crate::text::TextFolding;
use std::collections::{HashMap, HashSet};

/// The read-only collection of bus stops every query runs against.
///
/// Stops live in a single `Vec` in the order they were loaded (that order is
/// the tie-break for equal scores and equal distances). A side map from
/// code to position gives O(1) [`get`](Self::get). Folded search keys are
/// computed once here so queries never re-fold stop text.
///
/// The index is never mutated after construction; share it across threads
/// by reference or in an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct BusStopIndex {
    stops: Vec<BusStop>,
    keys: Vec<SearchKeys>,
    by_code: HashMap<String, usize>,
    folding: TextFolding,
}

impl BusStopIndex {
    /// Builds an index, keeping every record.
    ///
    /// If two records share a code, both stay visible to `search` and
    /// `nearby`, and `get` returns the later one. Use [`try_new`](Self::try_new)
    /// to reject such input instead.
    ///
    /// ```
    /// use busstop_core::{BusStop, BusStopIndex};
    ///
    /// let index = BusStopIndex::new(vec![
    ///     BusStop::new("00481", "Woodlands Rd", "BT PANJANG TEMP BUS PK", 1.383764, 103.7583),
    /// ]);
    /// assert_eq!(index.get("00481").map(|s| s.road_name()), Some("Woodlands Rd"));
    /// assert!(index.get("").is_none());
    /// ```
    pub fn new(stops: Vec<BusStop>) -> Self {
        let mut by_code = HashMap::with_capacity(stops.len());
        for (pos, stop) in stops.iter().enumerate() {
            if let Some(prev) = by_code.insert(stop.code.clone(), pos) {
                tracing::warn!(code = %stop.code, first = prev, last = pos, "duplicate bus stop code, keeping last");
            }
        }
        let keys = stops.iter().map(SearchKeys::from_stop).collect();
        tracing::debug!(stops = stops.len(), "built bus stop index");
        BusStopIndex {
            stops,
            keys,
            by_code,
            folding: TextFolding::default(),
        }
    }

    /// Rebuilds the search keys with another text folding.
    ///
    /// Queries are folded the same way, so with
    /// [`TextFolding::Transliterate`] `"bukit"` finds `"Bukìt"`.
    pub fn with_folding(mut self, folding: TextFolding) -> Self {
        if folding != self.folding {
            self.keys = self
                .stops
                .iter()
                .map(|stop| SearchKeys::with_folding(stop, folding))
                .collect();
            self.folding = folding;
        }
        self
    }

    pub fn folding(&self) -> TextFolding {
        self.folding
    }

    /// Builds an index, rejecting duplicate codes, blank codes and
    /// coordinates that are not finite or lie outside ±90° / ±180°.
    pub fn try_new(stops: Vec<BusStop>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            validate(stop)?;
            if !seen.insert(stop.code.as_str()) {
                return Err(StopDbError::DuplicateCode(stop.code.clone()));
            }
        }
        Ok(Self::new(stops))
    }

    /// Looks up a stop by its exact code. Unknown or empty codes yield `None`.
    #[inline]
    pub fn get(&self, code: &str) -> Option<&BusStop> {
        self.by_code.get(code).map(|&pos| &self.stops[pos])
    }

    /// All stops in load order.
    pub fn stops(&self) -> &[BusStop] {
        &self.stops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BusStop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stats(&self) -> DbStats {
        let services: HashSet<&str> = self
            .stops
            .iter()
            .flat_map(|s| s.services.iter().map(String::as_str))
            .collect();
        DbStats {
            stops: self.stops.len(),
            services: services.len(),
        }
    }

    /// Stops paired with their precomputed search keys, in load order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&BusStop, &SearchKeys)> {
        self.stops.iter().zip(self.keys.iter())
    }
}

impl FromIterator<BusStop> for BusStopIndex {
    fn from_iter<I: IntoIterator<Item = BusStop>>(iter: I) -> Self {
        BusStopIndex::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BusStopIndex {
    type Item = &'a BusStop;
    type IntoIter = std::slice::Iter<'a, BusStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

fn validate(stop: &BusStop) -> Result<()> {
    let invalid = |reason: &str| StopDbError::InvalidRecord {
        code: stop.code.clone(),
        reason: reason.to_string(),
    };
    if stop.code.trim().is_empty() {
        return Err(invalid("empty code"));
    }
    if !stop.latitude.is_finite() || !(-90.0..=90.0).contains(&stop.latitude) {
        return Err(invalid("latitude out of range"));
    }
    if !stop.longitude.is_finite() || !(-180.0..=180.0).contains(&stop.longitude) {
        return Err(invalid("longitude out of range"));
    }
    Ok(())
}
