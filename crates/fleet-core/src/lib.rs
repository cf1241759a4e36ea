//! `fleet-core` — foundational types for the fleet dispatch engine.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `DriverId`, `VehicleId`, `RequestId`, `AssignmentId`     |
//! | [`time`]   | `TimePoint`, `DutyDay`, `TimeWindow`                     |
//! | [`config`] | `DispatchConfig`                                         |
//! | [`error`]  | `FleetError`, `FleetResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{FleetError, FleetResult};
pub use ids::{AssignmentId, DriverId, RequestId, VehicleId};
pub use time::{DutyDay, MINUTES_PER_DAY, TimePoint, TimeWindow};
