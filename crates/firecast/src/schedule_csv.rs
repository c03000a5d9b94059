//! Cashflow schedule loading.
//!
//! The CSV carries `account, monthly_amount, start_date, end_date` columns.
//! This loader only shuttles raw records; all validation (and every
//! [`firecast_core::ScheduleError`]) happens in the core schedule parser.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use firecast_core::{CashflowSchedule, RawCashflowRecord};

pub fn load(path: &Path) -> Result<CashflowSchedule> {
    let mut reader = csv::Reader::from_path(path)
        .wrap_err_with(|| format!("failed to open schedule {}", path.display()))?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record: RawCashflowRecord = record?;
        records.push(record);
    }
    tracing::debug!(records = records.len(), "schedule loaded");

    let schedule = CashflowSchedule::parse(&records)
        .wrap_err_with(|| format!("invalid schedule {}", path.display()))?;
    Ok(schedule)
}
