//! Time-bounded recurring cashflows.
//!
//! A schedule is a set of entries like "deposit $2,000/month into Brokerage
//! from 2026-01 through 2030-12". Validation happens once, when the schedule
//! is built from raw records; the engine then queries it month by month and
//! can rely on every entry being well-formed.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::date_math::parse_month;
use crate::error::ScheduleError;

/// One record as handed over by a schedule loader, before validation.
/// Field values are untyped; blank cells arrive as `None` or empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCashflowRecord {
    pub account: Option<String>,
    pub monthly_amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A validated recurring cashflow.
///
/// `amount` is signed: positive for inflows, negative for expenses. Dates
/// are month starts; `end` of `None` means open-ended.
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowEntry {
    pub account: String,
    pub amount: f64,
    pub start: Date,
    pub end: Option<Date>,
}

impl CashflowEntry {
    /// Whether this entry contributes in `month` (a month start):
    /// `start <= month` and, when bounded, `month <= end`.
    #[inline]
    pub fn is_active(&self, month: Date) -> bool {
        self.start <= month && self.end.is_none_or(|end| end >= month)
    }
}

/// An immutable, validated set of cashflow entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashflowSchedule {
    entries: Vec<CashflowEntry>,
}

impl CashflowSchedule {
    /// Validate raw loader records into a schedule.
    ///
    /// Fatal: missing `account` or `start_date`, unparsable dates,
    /// non-numeric `monthly_amount`. Recoverable: a blank `monthly_amount`
    /// is zero, a blank `end_date` is open-ended. Row numbers in errors are
    /// 1-based record positions. Account names are whitespace-trimmed.
    pub fn parse(records: &[RawCashflowRecord]) -> Result<Self, ScheduleError> {
        let mut entries = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            let row = i + 1;

            let account = match record.account.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => {
                    return Err(ScheduleError::MissingField {
                        row,
                        field: "account",
                    });
                }
            };

            let start = match record.start_date.as_deref() {
                Some(text) if !text.trim().is_empty() => {
                    parse_month(text).ok_or_else(|| ScheduleError::InvalidDate {
                        row,
                        field: "start_date",
                        value: text.to_string(),
                    })?
                }
                _ => {
                    return Err(ScheduleError::MissingField {
                        row,
                        field: "start_date",
                    });
                }
            };

            let end = match record.end_date.as_deref() {
                Some(text) if !text.trim().is_empty() => {
                    Some(parse_month(text).ok_or_else(|| ScheduleError::InvalidDate {
                        row,
                        field: "end_date",
                        value: text.to_string(),
                    })?)
                }
                _ => None,
            };

            let amount = match record.monthly_amount.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => {
                    text.parse::<f64>()
                        .map_err(|_| ScheduleError::InvalidAmount {
                            row,
                            value: text.to_string(),
                        })?
                }
                _ => 0.0,
            };

            entries.push(CashflowEntry {
                account,
                amount,
                start,
                end,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CashflowEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net flow per account for one month, summing entries active in it.
    /// Accounts with no active entry are absent from the map.
    pub fn active_flows(&self, month: Date) -> FxHashMap<&str, f64> {
        let mut flows: FxHashMap<&str, f64> = FxHashMap::default();
        for entry in self.entries.iter().filter(|e| e.is_active(month)) {
            *flows.entry(entry.account.as_str()).or_insert(0.0) += entry.amount;
        }
        flows
    }

    /// Every account name the schedule references.
    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.account.as_str())
    }

    /// Whether any entry runs indefinitely.
    pub fn has_open_ended(&self) -> bool {
        self.entries.iter().any(|e| e.end.is_none())
    }

    /// The latest bounded end month, if any entry is bounded.
    pub fn last_end(&self) -> Option<Date> {
        self.entries.iter().filter_map(|e| e.end).max()
    }
}
