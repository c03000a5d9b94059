//! Typed identifiers for projection entities.

use serde::{Deserialize, Serialize};

/// Index of an account within an [`crate::model::AccountSet`].
///
/// Balances in snapshots are stored as a `Vec<f64>` indexed by `AccountId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u16);

impl AccountId {
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}
