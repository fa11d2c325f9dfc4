// crates/busstop-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One bus stop as it appears in the static dataset.
///
/// Field names follow the dataset JSON (`code`, `road_name`, `description`,
/// `latitude`, `longitude`, `services`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusStop {
    /// Unique stop code, e.g. `"01012"`.
    pub code: String,
    pub road_name: String,
    /// Rider-facing name, e.g. `"Hotel Grand Pacific"`.
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Service numbers calling at this stop.
    #[serde(default)]
    pub services: Vec<String>,
}

impl BusStop {
    pub fn new(
        code: impl Into<String>,
        road_name: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        BusStop {
            code: code.into(),
            road_name: road_name.into(),
            description: description.into(),
            latitude,
            longitude,
            services: Vec::new(),
        }
    }

    /// Builder-style setter for the list of services.
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn road_name(&self) -> &str {
        &self.road_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `(latitude, longitude)` in decimal degrees.
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }
}

/// Result item of [`BusStopIndex::search_scored`](crate::BusStopIndex::search_scored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    /// Relevance; `0` when the query was blank and nothing was scored.
    pub score: u32,
    pub stop: &'a BusStop,
}

/// Result item of [`BusStopIndex::nearby`](crate::BusStopIndex::nearby).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyStop<'a> {
    pub stop: &'a BusStop,
    /// Distance from the query point, in metres.
    pub distance_meters: f64,
}

/// Simple aggregate statistics for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub stops: usize,
    /// Distinct service numbers across all stops.
    pub services: usize,
}
