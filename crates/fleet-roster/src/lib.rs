//! `fleet-roster` — duty shifts, rosters, and delegate substitution.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`shift`]      | `ShiftCode`, `DayPart`, `shift_chain`                     |
//! | [`roster`]     | `DutyRoster` (`(DutyDay, ShiftCode) → DriverId`)          |
//! | [`delegation`] | `Delegation`, `DelegationBook`                            |
//! | [`resolver`]   | `resolve_shift`, `resolve_chain`, `Candidate`             |
//! | [`loader`]     | `load_roster_csv`, `load_delegations_csv` (+ `_reader`)   |
//! | [`error`]      | `RosterError`, `RosterResult<T>`                          |
//!
//! # Chain model (summary)
//!
//! A request start time classifies into a [`DayPart`] (early / afternoon /
//! other).  [`shift_chain`] turns the day part and the long-trip flag into an
//! ordered, de-duplicated priority list of shift codes that always ends with
//! the full fallback `[AM, PM, G1, G2, G3]` — if anybody is on duty that
//! day, some candidate is produced.  [`resolve_chain`] then maps the chain
//! onto the day's roster, swapping in delegate drivers for absent principals
//! and keeping only each driver's first appearance.

pub mod delegation;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod roster;
pub mod shift;

#[cfg(test)]
mod tests;

pub use delegation::{Delegation, DelegationBook};
pub use error::{RosterError, RosterResult};
pub use loader::{
    load_delegations_csv, load_delegations_reader, load_roster_csv, load_roster_reader,
};
pub use resolver::{Candidate, ResolvedDriver, resolve_chain, resolve_shift};
pub use roster::DutyRoster;
pub use shift::{DayPart, ShiftCode, shift_chain};
