//! Projection results
//!
//! Output types from running a projection: one immutable snapshot per
//! simulated month, ordered ascending, plus the account set that gives the
//! balance vectors their meaning.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{AccountId, AccountSet};

/// State of the world at the end of one projected month.
///
/// `balances` is indexed by [`AccountId`] and parallel to the run's
/// [`AccountSet`]. Amounts are full-precision nominal dollars; rounding to
/// currency precision is left to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSnapshot {
    /// The projected month (month start).
    pub date: Date,
    /// Per-account nominal balances.
    pub balances: Vec<f64>,
    /// Sum of `balances`.
    pub net_worth: f64,
    /// Nominal amount withdrawn this month (zero during accumulation).
    pub withdrawal: f64,
    /// Fractional age in years at `date`.
    pub age: f64,
    /// Net worth in basis-month purchasing power.
    pub net_worth_real: f64,
    /// Withdrawal in basis-month purchasing power.
    pub withdrawal_real: f64,
}

impl ProjectionSnapshot {
    pub fn balance(&self, id: AccountId) -> f64 {
        self.balances.get(id.index()).copied().unwrap_or(0.0)
    }
}

/// Complete result of a projection run.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Union of accounts from starting balances and the schedule,
    /// lexicographically ordered.
    pub accounts: AccountSet,
    /// One snapshot per projected month, ascending.
    pub snapshots: Vec<ProjectionSnapshot>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&ProjectionSnapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&ProjectionSnapshot> {
        self.snapshots.last()
    }

    /// Net worth at the final projected month.
    pub fn final_net_worth(&self) -> Option<f64> {
        self.last().map(|s| s.net_worth)
    }

    /// The balance series for one account across all months.
    pub fn account_series(&self, name: &str) -> Option<Vec<f64>> {
        let id = self.accounts.id(name)?;
        Some(self.snapshots.iter().map(|s| s.balance(id)).collect())
    }
}
