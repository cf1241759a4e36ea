//! Assignment (dispatch) record — the one entity the engine owns outright.

use fleet_core::{AssignmentId, DriverId, RequestId, TimePoint, TimeWindow, VehicleId};

/// Assignment lifecycle.
///
/// ```text
/// Unassigned → DriverAssigned → VehicleAssigned → InProgress → Completed
/// ```
///
/// `Unassigned` exists only transiently inside the assigner (a freshly
/// built record before the driver lands); committed rows always carry at
/// least a driver.  No transition ever skips backward.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignmentStatus {
    Unassigned,
    DriverAssigned,
    VehicleAssigned,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentStatus::Unassigned => "unassigned",
            AssignmentStatus::DriverAssigned => "driver_assigned",
            AssignmentStatus::VehicleAssigned => "vehicle_assigned",
            AssignmentStatus::InProgress => "in_progress",
            AssignmentStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dispatch: a ride request bound to a driver and (later) a vehicle,
/// with its scheduled window and the actual odometer-bracketed trip.
///
/// "No driver yet" and "no vehicle yet" are typed as `Option`, never as a
/// sentinel id threaded through business logic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub id:      AssignmentId,
    pub request: RequestId,
    pub driver:  Option<DriverId>,
    pub vehicle: Option<VehicleId>,
    pub status:  AssignmentStatus,

    /// Scheduled window, half-open.  Conflict checks quantify over this.
    pub window: TimeWindow,

    pub actual_start: Option<TimePoint>,
    pub actual_end:   Option<TimePoint>,

    pub start_odometer_km: Option<f64>,
    pub end_odometer_km:   Option<f64>,

    /// Cached long-trip classification of the underlying request; drives
    /// the rest-period rule and the fairness billing.
    pub long_trip: bool,
}

impl Assignment {
    /// A fresh, unassigned record for `request`.
    pub fn new(id: AssignmentId, request: RequestId, window: TimeWindow, long_trip: bool) -> Self {
        Self {
            id,
            request,
            driver: None,
            vehicle: None,
            status: AssignmentStatus::Unassigned,
            window,
            actual_start: None,
            actual_end: None,
            start_odometer_km: None,
            end_odometer_km: None,
            long_trip,
        }
    }

    /// When this assignment stopped (or will stop) occupying its driver:
    /// the recorded actual end when the trip has ended, else the scheduled
    /// end.  The rest-period rule quantifies over this.
    #[inline]
    pub fn effective_end(&self) -> TimePoint {
        self.actual_end.unwrap_or(self.window.end)
    }

    /// `true` once a start odometer reading has been accepted.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.actual_start.is_some()
    }

    /// `true` once an end odometer reading has been accepted.
    #[inline]
    pub fn has_ended(&self) -> bool {
        self.actual_end.is_some()
    }
}
