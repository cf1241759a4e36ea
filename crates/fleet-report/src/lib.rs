//! `fleet-report` — export vehicle-usage and assignment ledgers.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`row`]     | Plain row types + collection from a `FleetState` view    |
//! | [`writer`]  | The `ReportWriter` trait                                 |
//! | [`csv`]     | CSV backend (always available)                           |
//! | [`sqlite`]  | SQLite backend (feature `sqlite`)                        |
//! | [`error`]   | `ReportError`, `ReportResult<T>`                         |
//!
//! Usage rows reuse the allocator's fairness computation
//! ([`fleet_dispatch::vehicle_usage`]), so a usage report always agrees
//! with what the next allocation would rank.

pub mod csv;
pub mod error;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


pub use crate::csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use row::{AssignmentRow, VehicleUsageRow, assignment_rows, usage_rows};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;
pub use writer::ReportWriter;
