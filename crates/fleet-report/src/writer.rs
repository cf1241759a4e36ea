//! The `ReportWriter` trait implemented by all backend writers.

use crate::{AssignmentRow, ReportResult, VehicleUsageRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait ReportWriter {
    /// Write a batch of vehicle usage rows.
    fn write_usage(&mut self, rows: &[VehicleUsageRow]) -> ReportResult<()>;

    /// Write a batch of assignment ledger rows.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
