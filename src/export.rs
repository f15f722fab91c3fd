//! CSV export for consolidated schedules.

use std::io::Write;

use anyhow::{Context, Result};

use crate::consolidate::ScheduleGroup;

/// Write a consolidated schedule as CSV: one row per group, day labels
/// joined with ", ". An empty schedule still gets the header row.
pub fn write_schedule_csv<W: Write>(groups: &[ScheduleGroup], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["days", "time"])
        .context("Failed to write CSV header")?;

    for group in groups {
        csv_writer
            .write_record([group.days.join(", "), group.time.clone()])
            .context("Failed to write CSV row")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
