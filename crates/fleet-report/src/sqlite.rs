//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory
//! with two tables: `vehicle_usage` and `assignment_ledger`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{AssignmentRow, ReportResult, VehicleUsageRow};

/// Writes reports to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS vehicle_usage (
                 vehicle_id      INTEGER PRIMARY KEY,
                 plate           TEXT    NOT NULL,
                 status          TEXT    NOT NULL,
                 capacity        INTEGER NOT NULL,
                 odometer_km     REAL    NOT NULL,
                 completed_trips INTEGER NOT NULL,
                 cumulative_km   REAL    NOT NULL,
                 last_used_min   INTEGER
             );
             CREATE TABLE IF NOT EXISTS assignment_ledger (
                 assignment_id     INTEGER PRIMARY KEY,
                 request_id        INTEGER NOT NULL,
                 driver_id         INTEGER,
                 vehicle_id        INTEGER,
                 status            TEXT    NOT NULL,
                 long_trip         INTEGER NOT NULL,
                 start_min         INTEGER NOT NULL,
                 end_min           INTEGER NOT NULL,
                 actual_start_min  INTEGER,
                 actual_end_min    INTEGER,
                 start_odometer_km REAL,
                 end_odometer_km   REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_usage(&mut self, rows: &[VehicleUsageRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO vehicle_usage \
                 (vehicle_id, plate, status, capacity, odometer_km, \
                  completed_trips, cumulative_km, last_used_min) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.vehicle_id,
                    row.plate,
                    row.status,
                    row.capacity,
                    row.odometer_km,
                    row.completed_trips,
                    row.cumulative_km,
                    row.last_used_min,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO assignment_ledger \
                 (assignment_id, request_id, driver_id, vehicle_id, status, long_trip, \
                  start_min, end_min, actual_start_min, actual_end_min, \
                  start_odometer_km, end_odometer_km) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.assignment_id,
                    row.request_id,
                    row.driver_id,
                    row.vehicle_id,
                    row.status,
                    row.long_trip as i64,
                    row.start_min,
                    row.end_min,
                    row.actual_start_min,
                    row.actual_end_min,
                    row.start_odometer_km,
                    row.end_odometer_km,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
