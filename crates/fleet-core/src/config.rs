//! Engine configuration.

/// Tunable policy knobs for the dispatch engine.
///
/// Typically loaded from a TOML/JSON file by the hosting application (enable
/// the `serde` feature) and passed to `DispatchEngine`.  The defaults encode
/// the organization's current policy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// One-way distance above which a ride is classified as a long trip.
    pub long_trip_km: f64,

    /// Mandatory rest after a long trip: a driver whose long trip ended at
    /// `T` may not start a new assignment in `(T, T + rest_minutes]`.
    pub rest_minutes: i64,

    /// Minute-of-day below which a request start counts as "early".
    /// Default: 690 (11:30).
    pub early_end_min: u32,

    /// Start of the afternoon band, inclusive.  Default: 810 (13:30).
    pub afternoon_start_min: u32,

    /// End of the afternoon band, exclusive.  Default: 1020 (17:00).
    pub afternoon_end_min: u32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            long_trip_km:        30.0,
            rest_minutes:        60,
            early_end_min:       690,
            afternoon_start_min: 810,
            afternoon_end_min:   1020,
        }
    }
}

impl DispatchConfig {
    /// Classify a ride by its recorded one-way distance.
    ///
    /// A request with no recorded distance is a short trip — long-trip
    /// handling is strictly opt-in by the intake data.
    #[inline]
    pub fn is_long_trip(&self, one_way_km: Option<f64>) -> bool {
        one_way_km.is_some_and(|km| km > self.long_trip_km)
    }
}
