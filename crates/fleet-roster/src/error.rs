use fleet_core::{DriverId, DutyDay};
use thiserror::Error;

use crate::ShiftCode;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("roster slot {day}/{shift} already staffed by {existing}")]
    DuplicateSlot {
        day:      DutyDay,
        shift:    ShiftCode,
        existing: DriverId,
    },

    #[error("conflicting active delegations for principal {principal} on {day}")]
    ConflictingDelegations { principal: DriverId, day: DutyDay },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
