use fleet_core::{AssignmentId, DriverId, RequestId, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Another commit landed after the snapshot this write-set was decided
    /// against.  Nothing was applied; retry the whole operation from a
    /// fresh snapshot.
    #[error("store contended: snapshot version {snapshot} is stale (store at {current})")]
    Contended { snapshot: u64, current: u64 },

    #[error("driver {0} already registered")]
    DuplicateDriver(DriverId),

    #[error("vehicle {0} already registered")]
    DuplicateVehicle(VehicleId),

    #[error("ride request {0} already registered")]
    DuplicateRequest(RequestId),

    #[error("assignment {0} already registered")]
    DuplicateAssignment(AssignmentId),

    #[error("ride request {0} not found")]
    UnknownRequest(RequestId),

    #[error("vehicle {0} not found")]
    UnknownVehicle(VehicleId),

    #[error("assignment {0} references unknown request {1}")]
    DanglingRequest(AssignmentId, RequestId),

    /// A write tried to move a vehicle's odometer backward.  The engine
    /// validates readings before committing, so hitting this means a logic
    /// bug, not bad user input.
    #[error("odometer regression on vehicle {vehicle}: {current} km -> {proposed} km")]
    OdometerRegression {
        vehicle:  VehicleId,
        current:  f64,
        proposed: f64,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
