//! The balance ledger: actual month-end balances, one CSV row per month.
//!
//! Layout: a `date` column followed by one column per account. The latest
//! row supplies the projection's starting balances; the whole series backs
//! the `net-worth` command. Blank cells read as zero.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use jiff::civil::Date;

use firecast_core::date_math::{month_start, parse_date};
use firecast_core::model::StartingBalances;

/// One ledger row: a date and amounts parallel to [`Ledger::accounts`].
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub date: Date,
    pub amounts: Vec<f64>,
}

impl LedgerRow {
    pub fn net_worth(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// A loaded balance ledger, rows sorted by date ascending.
#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: Vec<String>,
    rows: Vec<LedgerRow>,
}

impl Ledger {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .wrap_err_with(|| format!("failed to open ledger {}", path.display()))?;

        let headers = reader.headers()?.clone();
        let mut columns = headers.iter().map(str::trim);
        match columns.next() {
            Some(first) if first.eq_ignore_ascii_case("date") => {}
            _ => bail!("ledger {} must start with a `date` column", path.display()),
        }
        let accounts: Vec<String> = columns.map(str::to_string).collect();
        if accounts.is_empty() {
            bail!("ledger {} has no account columns", path.display());
        }

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row_no = i + 2; // 1-based, after the header

            let date_text = record.get(0).unwrap_or("");
            let date = parse_date(date_text).ok_or_else(|| {
                eyre!("ledger row {row_no}: `date` is not a date: {date_text:?}")
            })?;

            let mut amounts = Vec::with_capacity(accounts.len());
            for (col, name) in accounts.iter().enumerate() {
                let cell = record.get(col + 1).unwrap_or("").trim();
                let amount = if cell.is_empty() {
                    0.0
                } else {
                    cell.parse::<f64>().wrap_err_with(|| {
                        format!("ledger row {row_no}: `{name}` is not a number: {cell:?}")
                    })?
                };
                amounts.push(amount);
            }
            rows.push(LedgerRow { date, amounts });
        }

        rows.sort_by_key(|r| r.date);
        tracing::debug!(rows = rows.len(), accounts = accounts.len(), "ledger loaded");

        Ok(Self { accounts, rows })
    }

    /// An empty ledger for a file that does not exist yet; `append_row`
    /// writes the header on first use.
    pub fn with_accounts(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            rows: Vec::new(),
        }
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn latest(&self) -> Option<&LedgerRow> {
        self.rows.last()
    }

    /// Whether any row falls in the same calendar month.
    pub fn has_month(&self, date: Date) -> bool {
        let month = month_start(date);
        self.rows.iter().any(|r| month_start(r.date) == month)
    }

    /// The latest row as the projection's starting balances.
    pub fn starting_balances(&self) -> Result<StartingBalances> {
        let latest = self
            .latest()
            .ok_or_else(|| eyre!("ledger has no balance rows"))?;
        Ok(StartingBalances::new(
            latest.date,
            self.accounts
                .iter()
                .cloned()
                .zip(latest.amounts.iter().copied()),
        ))
    }

    /// The actual net-worth series, oldest first.
    pub fn net_worth_series(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.rows.iter().map(|r| (r.date, r.net_worth()))
    }
}

/// Append one row, creating the file (with a header) when absent.
///
/// `amounts` must be ordered like the header this file carries (or, for a
/// new file, like the header this call will write).
pub fn append_row(path: &Path, accounts: &[String], date: Date, amounts: &[f64]) -> Result<()> {
    if amounts.len() != accounts.len() {
        bail!(
            "amount count {} does not match account count {}",
            amounts.len(),
            accounts.len()
        );
    }

    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)
            .wrap_err_with(|| format!("failed to create ledger {}", path.display()))?;
        writeln!(file, "date,{}", accounts.join(","))?;
    }

    ensure_trailing_newline(path)?;

    let mut file = OpenOptions::new().append(true).open(path)?;
    let cells: Vec<String> = amounts.iter().map(|a| format!("{a:.2}")).collect();
    writeln!(file, "{date},{}", cells.join(","))?;

    Ok(())
}

/// Make sure the file ends with a newline before appending, so the new row
/// doesn't continue the last line.
fn ensure_trailing_newline(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    let len = file.seek(SeekFrom::End(0))?;
    if len == 0 {
        return Ok(());
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' && last[0] != b'\r' {
        file.write_all(b"\n")?;
    }
    Ok(())
}
