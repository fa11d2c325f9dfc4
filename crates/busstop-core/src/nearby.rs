// crates/busstop-core/src/nearby.rs
use crate::geo::DistanceMetric;
use crate::index::BusStopIndex;
use crate::model::NearbyStop;
use crate::search::effective_limit;

impl BusStopIndex {
    /// Stops within `radius_meters` of `(lat, lon)` by great-circle distance,
    /// nearest first.
    ///
    /// The radius is inclusive. Equal distances keep load order. `limit == 0`
    /// means no limit.
    ///
    /// Distances are haversine on a sphere of radius 6,378,100 m. Figures
    /// produced by the flat equatorial approximation (e.g. 923.98 m where
    /// haversine gives 923.70 m) come from
    /// [`nearby_with(DistanceMetric::EquatorialPlane, ..)`](Self::nearby_with).
    ///
    /// ```
    /// use busstop_core::{BusStop, BusStopIndex};
    ///
    /// let index = BusStopIndex::new(vec![
    ///     BusStop::new("00481", "Woodlands Rd", "BT PANJANG TEMP BUS PK", 1.383764, 103.7583),
    ///     BusStop::new("01012", "Victoria St", "Hotel Grand Pacific", 1.29684825487647, 103.85253591654006),
    /// ]);
    /// let nearby = index.nearby(1.3837, 103.75, 10_000.0, 0);
    /// assert_eq!(nearby.len(), 1);
    /// assert_eq!(nearby[0].stop.code(), "00481");
    /// assert!((nearby[0].distance_meters - 923.7).abs() < 0.1);
    /// ```
    pub fn nearby(&self, lat: f64, lon: f64, radius_meters: f64, limit: usize) -> Vec<NearbyStop<'_>> {
        self.nearby_with(DistanceMetric::Haversine, lat, lon, radius_meters, limit)
    }

    /// [`nearby`](Self::nearby) with an explicit distance metric.
    ///
    /// ```
    /// use busstop_core::{BusStop, BusStopIndex, DistanceMetric};
    ///
    /// let index = BusStopIndex::new(vec![
    ///     BusStop::new("00481", "Woodlands Rd", "BT PANJANG TEMP BUS PK", 1.383764, 103.7583),
    /// ]);
    /// let flat = index.nearby_with(DistanceMetric::EquatorialPlane, 1.3837, 103.75, 10_000.0, 0);
    /// assert!((flat[0].distance_meters - 923.983).abs() < 1e-3);
    /// let round = index.nearby(1.3837, 103.75, 10_000.0, 0);
    /// assert!((round[0].distance_meters - 923.704).abs() < 1e-3);
    /// ```
    pub fn nearby_with(
        &self,
        metric: DistanceMetric,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        limit: usize,
    ) -> Vec<NearbyStop<'_>> {
        // NaN distances fail the comparison and drop out here.
        let mut found: Vec<(usize, NearbyStop<'_>)> = self
            .iter()
            .enumerate()
            .filter_map(|(pos, stop)| {
                let distance_meters = metric.distance(lat, lon, stop.latitude, stop.longitude);
                (distance_meters <= radius_meters).then_some((
                    pos,
                    NearbyStop {
                        stop,
                        distance_meters,
                    },
                ))
            })
            .collect();

        found.sort_by(|(pa, a), (pb, b)| {
            a.distance_meters
                .total_cmp(&b.distance_meters)
                .then(pa.cmp(pb))
        });
        found.truncate(effective_limit(limit, found.len()));
        tracing::trace!(?metric, radius_meters, hits = found.len(), "nearby done");

        found.into_iter().map(|(_, hit)| hit).collect()
    }
}
