//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_usage.csv`
//! - `assignment_ledger.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{AssignmentRow, ReportResult, VehicleUsageRow};

/// Writes reports to two CSV files.  Optional fields serialize as empty
/// cells.
pub struct CsvReportWriter {
    usage:       Writer<File>,
    assignments: Writer<File>,
    finished:    bool,
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut usage = Writer::from_path(dir.join("vehicle_usage.csv"))?;
        usage.write_record([
            "vehicle_id",
            "plate",
            "status",
            "capacity",
            "odometer_km",
            "completed_trips",
            "cumulative_km",
            "last_used_min",
        ])?;

        let mut assignments = Writer::from_path(dir.join("assignment_ledger.csv"))?;
        assignments.write_record([
            "assignment_id",
            "request_id",
            "driver_id",
            "vehicle_id",
            "status",
            "long_trip",
            "start_min",
            "end_min",
            "actual_start_min",
            "actual_end_min",
            "start_odometer_km",
            "end_odometer_km",
        ])?;

        Ok(Self { usage, assignments, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_usage(&mut self, rows: &[VehicleUsageRow]) -> ReportResult<()> {
        for row in rows {
            self.usage.write_record(&[
                row.vehicle_id.to_string(),
                row.plate.clone(),
                row.status.to_string(),
                row.capacity.to_string(),
                row.odometer_km.to_string(),
                row.completed_trips.to_string(),
                row.cumulative_km.to_string(),
                opt_cell(row.last_used_min),
            ])?;
        }
        Ok(())
    }

    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> ReportResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.assignment_id.to_string(),
                row.request_id.to_string(),
                opt_cell(row.driver_id),
                opt_cell(row.vehicle_id),
                row.status.to_string(),
                (row.long_trip as u8).to_string(),
                row.start_min.to_string(),
                row.end_min.to_string(),
                opt_cell(row.actual_start_min),
                opt_cell(row.actual_end_min),
                opt_cell(row.start_odometer_km),
                opt_cell(row.end_odometer_km),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.usage.flush()?;
        self.assignments.flush()?;
        Ok(())
    }
}
