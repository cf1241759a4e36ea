//! Plain data row types written by report backends, and their collection
//! from a state view.

use fleet_dispatch::vehicle_usage;
use fleet_store::FleetState;

/// One vehicle's standing: registry fields plus the derived usage ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleUsageRow {
    pub vehicle_id:      u32,
    pub plate:           String,
    pub status:          &'static str,
    pub capacity:        u32,
    pub odometer_km:     f64,
    pub completed_trips: u32,
    pub cumulative_km:   f64,
    /// Minutes since epoch of the latest assignment end; `None` = never used.
    pub last_used_min:   Option<i64>,
}

/// One assignment ledger line.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub assignment_id: u32,
    pub request_id:    u32,
    pub driver_id:     Option<u32>,
    pub vehicle_id:    Option<u32>,
    pub status:        &'static str,
    pub long_trip:     bool,
    pub start_min:     i64,
    pub end_min:       i64,
    pub actual_start_min: Option<i64>,
    pub actual_end_min:   Option<i64>,
    pub start_odometer_km: Option<f64>,
    pub end_odometer_km:   Option<f64>,
}

/// Collect one usage row per registered vehicle, in id order.
pub fn usage_rows(state: &FleetState) -> Vec<VehicleUsageRow> {
    state
        .vehicles()
        .map(|v| {
            let usage = vehicle_usage(state, v.id);
            VehicleUsageRow {
                vehicle_id:      v.id.0,
                plate:           v.plate.clone(),
                status:          v.status.as_str(),
                capacity:        v.capacity,
                odometer_km:     v.odometer_km,
                completed_trips: usage.completed_trips,
                cumulative_km:   usage.cumulative_km,
                last_used_min:   usage.last_used.map(|t| t.0),
            }
        })
        .collect()
}

/// Collect one ledger row per assignment, in id order.
pub fn assignment_rows(state: &FleetState) -> Vec<AssignmentRow> {
    state
        .assignments()
        .map(|a| AssignmentRow {
            assignment_id: a.id.0,
            request_id:    a.request.0,
            driver_id:     a.driver.map(|d| d.0),
            vehicle_id:    a.vehicle.map(|v| v.0),
            status:        a.status.as_str(),
            long_trip:     a.long_trip,
            start_min:     a.window.start.0,
            end_min:       a.window.end.0,
            actual_start_min: a.actual_start.map(|t| t.0),
            actual_end_min:   a.actual_end.map(|t| t.0),
            start_odometer_km: a.start_odometer_km,
            end_odometer_km:   a.end_odometer_km,
        })
        .collect()
}
