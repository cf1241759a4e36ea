//! Trip transition validation.
//!
//! Pure decision functions: given the assignment and its vehicle as read
//! from one snapshot, either approve the transition or name the denial.
//! The engine applies the approved transition in the same optimistic
//! commit, so a reading validated here cannot be invalidated by a
//! concurrent trip ending first — the commit would lose the version race
//! instead.

use fleet_core::DriverId;
use fleet_store::{Assignment, Vehicle};

use crate::outcome::TripDenial;

/// Validate a start-trip request.
///
/// `vehicle` is the registry record for the assignment's allocated vehicle,
/// `None` when no vehicle has been allocated yet.  Denials are checked in
/// the order a driver would want them reported: ownership, double start,
/// missing vehicle, then the odometer reading.
pub fn check_start(
    assignment: &Assignment,
    vehicle: Option<&Vehicle>,
    caller: DriverId,
    odometer_km: f64,
) -> Result<(), TripDenial> {
    if assignment.driver != Some(caller) {
        return Err(TripDenial::NotOwner { driver: caller });
    }
    if assignment.has_started() {
        return Err(TripDenial::AlreadyStarted);
    }
    let Some(vehicle) = vehicle else {
        return Err(TripDenial::VehicleNotAllocated);
    };
    if odometer_km <= 0.0 {
        return Err(TripDenial::OdometerNotPositive { reading: odometer_km });
    }
    if odometer_km < vehicle.odometer_km {
        return Err(TripDenial::OdometerBehindVehicle {
            reading: odometer_km,
            vehicle_odometer: vehicle.odometer_km,
        });
    }
    Ok(())
}

/// Validate an end-trip request.
///
/// Returns the accepted start reading so the caller can compute the driven
/// distance without re-deriving the `Option`.
pub fn check_end(
    assignment: &Assignment,
    vehicle: Option<&Vehicle>,
    caller: DriverId,
    odometer_km: f64,
) -> Result<f64, TripDenial> {
    if assignment.driver != Some(caller) {
        return Err(TripDenial::NotOwner { driver: caller });
    }
    let Some(start) = assignment.start_odometer_km else {
        return Err(TripDenial::NotStarted);
    };
    if assignment.has_ended() {
        return Err(TripDenial::AlreadyEnded);
    }
    // A started trip always carries a vehicle; a missing one is handled as
    // not-allocated rather than panicking on corrupt data.
    let Some(vehicle) = vehicle else {
        return Err(TripDenial::VehicleNotAllocated);
    };
    if odometer_km < start {
        return Err(TripDenial::OdometerBeforeStart { reading: odometer_km, start });
    }
    if odometer_km < vehicle.odometer_km {
        return Err(TripDenial::OdometerBehindVehicle {
            reading: odometer_km,
            vehicle_odometer: vehicle.odometer_km,
        });
    }
    Ok(start)
}
