//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `basic` - Closed-form growth, net-worth identity, determinism
//! - `schedule` - Schedule validation and the activity window
//! - `projection` - Engine orchestration, end-month policy, withdrawals
//!
//! Component-level tests live next to their modules (`growth`, `withdrawal`,
//! `real_value`, `date_math`).

mod basic;

use jiff::civil::{Date, date};

use crate::model::{Assumptions, StartingBalances};

/// Starting balances dated 2025-01, so the first projected month is 2025-02.
pub(crate) fn starting(balances: &[(&str, f64)]) -> StartingBalances {
    StartingBalances::new(
        date(2025, 1, 1),
        balances
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount)),
    )
}

/// Growth-only assumptions: no inflation, no withdrawals, explicit end month.
pub(crate) fn growth_only(annual_return: f64, end: Date) -> Assumptions {
    Assumptions {
        annual_return,
        inflation: 0.0,
        withdrawal_start: date(2100, 1, 1),
        withdrawal_rate: 0.0,
        basis: date(2025, 1, 1),
        birthday: date(1985, 6, 15),
        horizon_years: 30,
        end: Some(end),
    }
}
