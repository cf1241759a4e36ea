//! Ride request record.

use fleet_core::{RequestId, TimeWindow};

/// Lifecycle of a ride request from the engine's perspective.
///
/// Requests are created `Open` by the external intake process and flipped to
/// `Dispatched` in the same commit that creates their assignment.  Every
/// other request field is immutable once an assignment references it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestStatus {
    #[default]
    Open,
    Dispatched,
}

/// A ride request as handed over by the intake process.
///
/// Distances are whatever the intake recorded (route lookups are a
/// collaborator concern): `one_way_km` drives the long-trip classification,
/// and both fields feed the fairness ledger's per-trip contribution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideRequest {
    pub id:           RequestId,
    pub origin:       String,
    pub destination:  String,
    pub window:       TimeWindow,
    pub passengers:   u32,
    pub one_way_km:   Option<f64>,
    pub round_trip_km: Option<f64>,
    pub status:       RequestStatus,
}

impl RideRequest {
    /// Distance this request contributes to a vehicle's cumulative usage
    /// once completed.
    ///
    /// Long trips bill the round trip when recorded (the vehicle returns),
    /// falling back to the one-way figure; short trips the reverse.  A
    /// request with neither figure contributes nothing.
    pub fn billed_km(&self, long_trip: bool) -> f64 {
        let km = if long_trip {
            self.round_trip_km.or(self.one_way_km)
        } else {
            self.one_way_km.or(self.round_trip_km)
        };
        km.unwrap_or(0.0)
    }
}
