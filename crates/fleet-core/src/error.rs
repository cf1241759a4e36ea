//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `FleetError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AssignmentId, DriverId, RequestId, VehicleId};

/// The top-level error type for `fleet-core` and a common base for
/// sub-crates.
///
/// Every variant here is an *unexpected* failure (unknown entity, corrupt
/// reference data, I/O).  Expected operational refusals — no eligible
/// driver, odometer out of order, concurrent commit lost — are structured
/// outcomes in `fleet-dispatch`, never errors.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("ride request {0} not found")]
    RequestNotFound(RequestId),

    #[error("assignment {0} not found")]
    AssignmentNotFound(AssignmentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
