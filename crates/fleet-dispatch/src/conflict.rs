//! Read-side conflict and rest-period checks.
//!
//! All functions here are pure over a single [`FleetState`] view — they are
//! always evaluated against one snapshot, and the commit's version check
//! guarantees the answers still hold when the write lands.

use fleet_core::{AssignmentId, DriverId, TimePoint, TimeWindow, VehicleId};
use fleet_store::{Assignment, FleetState};

/// The first assignment (id order) holding `driver` whose scheduled window
/// overlaps `window`, if any.
///
/// Every status counts: a completed trip still occupies its historical
/// window, which is what the never-overlap invariant quantifies over.
pub fn driver_conflict<'a>(
    state: &'a FleetState,
    driver: DriverId,
    window: TimeWindow,
    exclude: Option<AssignmentId>,
) -> Option<&'a Assignment> {
    state
        .assignments_for_driver(driver)
        .filter(|a| Some(a.id) != exclude)
        .find(|a| a.window.overlaps(window))
}

/// The long-trip assignment (if any) that puts `driver` inside the
/// mandatory rest window at `start`.
///
/// A long trip ending at `T` blocks starts in `(T, T + rest_minutes]`,
/// i.e. the trip's end must satisfy `end > start − rest && end ≤ start`.
/// The recorded actual end is used when the trip has finished (a trip that
/// ran late keeps blocking for the full rest), else the scheduled end.
pub fn unmet_rest<'a>(
    state: &'a FleetState,
    driver: DriverId,
    start: TimePoint,
    rest_minutes: i64,
) -> Option<&'a Assignment> {
    state.assignments_for_driver(driver).find(|a| {
        if !a.long_trip {
            return false;
        }
        let end = a.effective_end();
        end > start - rest_minutes && end <= start
    })
}

/// The first assignment holding `vehicle` whose scheduled window overlaps
/// `window`, if any.
///
/// `exclude` skips the assignment currently being (re)processed, so an
/// assignment can never conflict with itself during vehicle allocation.
pub fn vehicle_conflict<'a>(
    state: &'a FleetState,
    vehicle: VehicleId,
    window: TimeWindow,
    exclude: Option<AssignmentId>,
) -> Option<&'a Assignment> {
    state
        .assignments_for_vehicle(vehicle)
        .filter(|a| Some(a.id) != exclude)
        .find(|a| a.window.overlaps(window))
}
