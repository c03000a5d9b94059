//! Interactive entry of a new ledger row.
//!
//! Prompting is a thin loop around the pure `parse_amount` validator; the
//! flow reads prompts from any `BufRead`/`Write` pair so tests can drive it
//! with canned input.

use std::io::{self, BufRead, Write};
use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use jiff::civil::Date;

use firecast_core::date_math::{month_start, parse_date};

use crate::ledger::{self, Ledger};
use crate::util::format::format_currency;
use crate::util::parse::parse_amount;

pub fn run(path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    add_balances(path, &mut input, &mut output)
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(eyre!("input closed"));
    }
    Ok(line.trim().to_string())
}

fn add_balances(path: &Path, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let ledger = if path.exists() {
        Ledger::load(path)?
    } else {
        writeln!(output, "No ledger at {} yet; it will be created.", path.display())?;
        write!(output, "Account names (comma-separated): ")?;
        output.flush()?;
        let accounts: Vec<String> = read_line(input)?
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if accounts.is_empty() {
            return Err(eyre!("at least one account name is required"));
        }
        Ledger::with_accounts(accounts)
    };

    let default = month_start(jiff::Zoned::now().date());
    write!(output, "Date for this entry (month start) [default {default}]: ")?;
    output.flush()?;
    let raw = read_line(input)?;
    let date: Date = if raw.is_empty() {
        default
    } else {
        month_start(parse_date(&raw).ok_or_else(|| {
            eyre!("date must be YYYY-MM, YYYY-MM-DD or M/D/YYYY, got {raw:?}")
        })?)
    };

    if ledger.has_month(date) {
        writeln!(output, "An entry for {date} already exists in {}.", path.display())?;
        write!(output, "Append anyway? (type YES to force): ")?;
        output.flush()?;
        if read_line(input)? != "YES" {
            writeln!(output, "Aborted (no changes made).")?;
            return Ok(());
        }
    }

    writeln!(output, "Enter balances (formats like 1234.56 or $1,234.56):")?;
    let mut amounts = Vec::with_capacity(ledger.accounts().len());
    for account in ledger.accounts() {
        loop {
            write!(output, "{account} balance: ")?;
            output.flush()?;
            match parse_amount(&read_line(input)?) {
                Ok(amount) => {
                    amounts.push(amount);
                    break;
                }
                Err(e) => writeln!(output, "  {e}. Try again.")?,
            }
        }
    }

    writeln!(output, "About to append this row:")?;
    writeln!(output, "  date: {date}")?;
    for (account, amount) in ledger.accounts().iter().zip(&amounts) {
        writeln!(output, "  {account}: {}", format_currency(*amount))?;
    }
    write!(output, "Append to {}? (y/N): ", path.display())?;
    output.flush()?;
    if !read_line(input)?.eq_ignore_ascii_case("y") {
        writeln!(output, "Aborted (no changes made).")?;
        return Ok(());
    }

    ledger::append_row(path, ledger.accounts(), date, &amounts)?;
    tracing::info!(%date, path = %path.display(), "balance row appended");
    writeln!(output, "Appended to {}.", path.display())?;
    Ok(())
}
