//! Resolving a shift chain to concrete candidate drivers for one day.

use rustc_hash::{FxHashMap, FxHashSet};

use fleet_core::{DriverId, DutyDay};

use crate::{DelegationBook, DutyRoster, RosterError, ShiftCode};

/// The driver a single shift resolves to, with the substitution marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDriver {
    pub driver:      DriverId,
    /// `true` when a delegate stands in for the scheduled (absent) driver.
    pub substituted: bool,
}

/// One entry of a resolved candidate list: the shift tried and the driver it
/// produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub shift:       ShiftCode,
    pub driver:      DriverId,
    pub substituted: bool,
}

/// Resolve one roster slot, applying the day's substitution map.
///
/// Returns `None` for an unstaffed slot.  A staffed slot whose driver
/// appears in `substitutions` resolves to the delegate instead.
pub fn resolve_shift(
    roster: &DutyRoster,
    substitutions: &FxHashMap<DriverId, DriverId>,
    day: DutyDay,
    shift: ShiftCode,
) -> Option<ResolvedDriver> {
    let scheduled = roster.on_duty(day, shift)?;
    match substitutions.get(&scheduled) {
        Some(&agent) => Some(ResolvedDriver { driver: agent, substituted: true }),
        None => Some(ResolvedDriver { driver: scheduled, substituted: false }),
    }
}

/// Resolve a full shift chain to the day's ordered candidate list.
///
/// Unstaffed shifts are skipped.  After substitution, a driver covering two
/// slots (an agent standing in for several principals, or a driver rostered
/// twice) is kept only at its first position in chain order.
///
/// # Errors
///
/// Propagates [`RosterError::ConflictingDelegations`] from the substitution
/// map build.
pub fn resolve_chain(
    roster: &DutyRoster,
    delegations: &DelegationBook,
    day: DutyDay,
    chain: &[ShiftCode],
) -> Result<Vec<Candidate>, RosterError> {
    let substitutions = delegations.substitutions_for(day)?;

    let mut seen: FxHashSet<DriverId> = FxHashSet::default();
    let mut candidates = Vec::with_capacity(chain.len());

    for &shift in chain {
        let Some(resolved) = resolve_shift(roster, &substitutions, day, shift) else {
            continue;
        };
        if seen.insert(resolved.driver) {
            candidates.push(Candidate {
                shift,
                driver: resolved.driver,
                substituted: resolved.substituted,
            });
        }
    }
    Ok(candidates)
}
