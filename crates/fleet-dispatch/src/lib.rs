//! `fleet-dispatch` — the driver & vehicle auto-assignment engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`conflict`] | Pure overlap and rest-period checks over a snapshot             |
//! | [`assign`]   | Shift-chain walk: first eligible driver, reasons for the rest   |
//! | [`fairness`] | Cumulative-distance / least-recently-used vehicle ranking       |
//! | [`trip`]     | Odometer-validated trip transitions                             |
//! | [`outcome`]  | Structured operation results (`AssignOutcome`, …)               |
//! | [`engine`]   | `DispatchEngine` — the four public entry points                 |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Operation model
//!
//! Every entry point is one snapshot → pure decision → optimistic commit
//! round against the [`FleetStore`][fleet_store::FleetStore].  Expected
//! refusals (no eligible driver, odometer out of order, lost commit race)
//! come back as outcome values with user-facing `Display` messages; only
//! unknown ids and corrupt reference data surface as [`DispatchError`].
//! The engine never auto-retries a contended commit — retry policy belongs
//! to the caller.

pub mod assign;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod fairness;
pub mod outcome;
pub mod trip;


pub use engine::DispatchEngine;
pub use error::{DispatchError, DispatchResult};
pub use fairness::{VehicleUsage, ranked_vehicles, vehicle_usage};
pub use outcome::{
    AllocOutcome, AllocatedVehicle, AssignOutcome, AssignedDriver, PreferredIssue, RejectReason,
    Rejection, TripDenial, TripOutcome,
};
