//! Driver selection: walk the resolved shift chain, keep the first eligible
//! driver, and explain every exclusion.

use fleet_core::{DispatchConfig, FleetError, TimeWindow};
use fleet_roster::{DayPart, ShiftCode, resolve_chain, shift_chain};
use fleet_store::FleetState;

use crate::conflict::{driver_conflict, unmet_rest};
use crate::error::DispatchError;
use crate::outcome::{AssignedDriver, RejectReason, Rejection};

/// Outcome of one chain walk.
#[derive(Clone, Debug)]
pub enum DriverChoice {
    /// First candidate that passed both checks.  `rejections` holds the
    /// candidates tried *before* it, in chain order — the walk stops at the
    /// first fit.
    Selected {
        driver:     AssignedDriver,
        rejections: Vec<Rejection>,
    },
    /// Every resolved candidate was excluded.
    Exhausted { rejections: Vec<Rejection> },
}

/// Build the chain for `window`/`long_trip`, resolve it against the day's
/// roster, and walk it.
///
/// Returns the chain alongside the choice so a failure report can show what
/// was tried even when the roster resolved no candidates at all.
///
/// # Errors
///
/// Data-integrity failures only: conflicting delegations, or a rostered
/// driver missing from the registry.
pub fn select_driver(
    state: &FleetState,
    config: &DispatchConfig,
    window: TimeWindow,
    long_trip: bool,
) -> Result<(Vec<ShiftCode>, DriverChoice), DispatchError> {
    let part = DayPart::classify(window.start, config);
    let chain = shift_chain(part, long_trip);

    let candidates = resolve_chain(state.roster(), state.delegations(), window.day(), &chain)?;

    let mut rejections = Vec::new();
    for candidate in candidates {
        let record = state
            .driver(candidate.driver)
            .ok_or(FleetError::DriverNotFound(candidate.driver))?;
        let name = record.tagged_name(candidate.substituted);

        if let Some(existing) = driver_conflict(state, candidate.driver, window, None) {
            rejections.push(Rejection {
                shift:  candidate.shift,
                driver: candidate.driver,
                name,
                reason: RejectReason::Overlap { with: existing.id, window: existing.window },
            });
            continue;
        }
        if let Some(long) = unmet_rest(state, candidate.driver, window.start, config.rest_minutes) {
            rejections.push(Rejection {
                shift:  candidate.shift,
                driver: candidate.driver,
                name,
                reason: RejectReason::RestNotMet { long_trip_end: long.effective_end() },
            });
            continue;
        }

        let driver = AssignedDriver {
            driver: candidate.driver,
            name,
            shift: candidate.shift,
            substituted: candidate.substituted,
        };
        return Ok((chain, DriverChoice::Selected { driver, rejections }));
    }

    Ok((chain, DriverChoice::Exhausted { rejections }))
}
