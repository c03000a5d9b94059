//! Account naming and starting balances.
//!
//! Accounts have no independent lifecycle — an account exists because a
//! balance ledger column or a schedule entry names it. The engine interns
//! the union of those names into an [`AccountSet`] once per run and works
//! with dense [`AccountId`]-indexed vectors from then on.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::date_math::month_start;
use crate::model::AccountId;

/// The set of account names known to a projection, in stable lexicographic
/// order. Provides name ↔ id lookup; ids index balance vectors.
#[derive(Debug, Clone)]
pub struct AccountSet {
    names: Vec<String>,
    index: FxHashMap<String, AccountId>,
}

impl AccountSet {
    /// Build from any collection of names. Duplicates collapse; the result
    /// is sorted lexicographically so downstream column order is stable.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();

        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), AccountId(i as u16)))
            .collect();

        Self { names, index }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<AccountId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: AccountId) -> &str {
        &self.names[id.index()]
    }

    /// Account names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// The most recent actual balances, as loaded from the ledger.
///
/// `month` is normalized to its month start; the first projected month is
/// the month after it. Negative balances are permitted (overdrafts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartingBalances {
    month: Date,
    balances: FxHashMap<String, f64>,
}

impl StartingBalances {
    /// Later duplicates of an account name win.
    pub fn new(month: Date, balances: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            month: month_start(month),
            balances: balances.into_iter().collect(),
        }
    }

    /// The month of the latest actual row (month start).
    pub fn month(&self) -> Date {
        self.month
    }

    pub fn amount(&self, name: &str) -> Option<f64> {
        self.balances.get(name).copied()
    }

    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.balances.keys().map(String::as_str)
    }
}
