//! Projection CSV export for downstream plotting.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use firecast_core::Projection;

/// Write the projection as CSV: `date`, one column per account
/// (lexicographic), then `net_worth, withdrawal, age, net_worth_real,
/// withdrawal_real`. Amounts keep full precision; consumers round.
pub fn write_csv(path: &Path, projection: &Projection) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)
        .wrap_err_with(|| format!("failed to create output {}", path.display()))?;

    let mut header = vec!["date".to_string()];
    header.extend(projection.accounts.names().map(str::to_string));
    header.extend(
        [
            "net_worth",
            "withdrawal",
            "age",
            "net_worth_real",
            "withdrawal_real",
        ]
        .map(str::to_string),
    );
    writer.write_record(&header)?;

    for snapshot in &projection.snapshots {
        let mut record = vec![snapshot.date.to_string()];
        record.extend(snapshot.balances.iter().map(f64::to_string));
        record.push(snapshot.net_worth.to_string());
        record.push(snapshot.withdrawal.to_string());
        record.push(snapshot.age.to_string());
        record.push(snapshot.net_worth_real.to_string());
        record.push(snapshot.withdrawal_real.to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    tracing::info!(
        months = projection.len(),
        path = %path.display(),
        "projection written"
    );
    Ok(())
}
