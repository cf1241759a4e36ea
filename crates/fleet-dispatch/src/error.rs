use fleet_core::FleetError;
use fleet_roster::RosterError;
use fleet_store::StoreError;
use thiserror::Error;

/// Unexpected failures only — unknown ids and corrupt reference data.
///
/// Expected operational refusals live in [`crate::outcome`] as values.
/// `StoreError::Contended` never reaches this enum: the engine converts it
/// to the per-operation `Contended` outcome before returning.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Unknown entity ids (request, assignment, rostered driver, allocated
    /// vehicle) surface as the core not-found variants.
    #[error(transparent)]
    Core(#[from] FleetError),

    #[error("roster data error: {0}")]
    Roster(#[from] RosterError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
