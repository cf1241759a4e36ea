//! Fairness-ranked vehicle selection.
//!
//! # Ranking
//!
//! Candidates (available, sufficient capacity) are ordered by:
//!
//! 1. cumulative billed distance over completed assignments, ascending;
//! 2. most recent use, least-recently-used first — a never-used vehicle
//!    outranks every used one;
//! 3. vehicle id, ascending, for determinism.
//!
//! Spreading work toward the least-worn, longest-idle vehicle keeps fleet
//! wear even instead of handing every trip to the same unit.  The walk then
//! takes the first ranked vehicle with no conflicting window.

use fleet_core::{AssignmentId, TimePoint, TimeWindow, VehicleId};
use fleet_store::{AssignmentStatus, FleetState};

use crate::conflict::vehicle_conflict;
use crate::outcome::PreferredIssue;

/// A vehicle's standing in the fairness ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleUsage {
    pub vehicle: VehicleId,

    /// Billed kilometres over completed assignments: round trip for long
    /// trips (one-way fallback), one-way for short trips (round-trip
    /// fallback).
    pub cumulative_km: f64,

    /// Latest end among this vehicle's assignments; `None` = never used,
    /// which sorts before any timestamp.
    pub last_used: Option<TimePoint>,

    /// Completed assignment count, carried for reporting.
    pub completed_trips: u32,
}

/// Compute one vehicle's usage from the assignment ledger.
pub fn vehicle_usage(state: &FleetState, vehicle: VehicleId) -> VehicleUsage {
    let mut cumulative_km = 0.0;
    let mut completed_trips = 0;
    let mut last_used: Option<TimePoint> = None;

    for assignment in state.assignments_for_vehicle(vehicle) {
        last_used = last_used.max(Some(assignment.effective_end()));
        if assignment.status == AssignmentStatus::Completed {
            completed_trips += 1;
            if let Some(request) = state.request(assignment.request) {
                cumulative_km += request.billed_km(assignment.long_trip);
            }
        }
    }

    VehicleUsage { vehicle, cumulative_km, last_used, completed_trips }
}

/// All available vehicles with `capacity ≥ passengers`, in fairness order.
pub fn ranked_vehicles(state: &FleetState, passengers: u32) -> Vec<VehicleUsage> {
    let mut ranked: Vec<VehicleUsage> = state
        .vehicles()
        .filter(|v| v.is_available() && v.capacity >= passengers)
        .map(|v| vehicle_usage(state, v.id))
        .collect();

    ranked.sort_by(|a, b| {
        a.cumulative_km
            .total_cmp(&b.cumulative_km)
            .then_with(|| a.last_used.cmp(&b.last_used))
            .then_with(|| a.vehicle.cmp(&b.vehicle))
    });
    ranked
}

/// The fairest vehicle free for `window`, or `None` when nothing fits.
///
/// `exclude` keeps the assignment being processed from conflicting with
/// itself.
pub fn select_vehicle(
    state: &FleetState,
    window: TimeWindow,
    passengers: u32,
    exclude: Option<AssignmentId>,
) -> Option<VehicleId> {
    ranked_vehicles(state, passengers)
        .into_iter()
        .map(|usage| usage.vehicle)
        .find(|&vehicle| vehicle_conflict(state, vehicle, window, exclude).is_none())
}

/// Validate a caller-specified preferred vehicle: present, available,
/// big enough, and free for the window.  No fallback on refusal.
pub fn check_preferred(
    state: &FleetState,
    vehicle: VehicleId,
    window: TimeWindow,
    passengers: u32,
    exclude: Option<AssignmentId>,
) -> Result<(), PreferredIssue> {
    let Some(record) = state.vehicle(vehicle) else {
        return Err(PreferredIssue::NotFound);
    };
    if !record.is_available() {
        return Err(PreferredIssue::Unavailable);
    }
    if record.capacity < passengers {
        return Err(PreferredIssue::CapacityTooSmall {
            capacity: record.capacity,
            passengers,
        });
    }
    if vehicle_conflict(state, vehicle, window, exclude).is_some() {
        return Err(PreferredIssue::TimeConflict);
    }
    Ok(())
}
