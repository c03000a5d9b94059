//! Net-worth projection library
//!
//! This crate projects a set of named account balances forward in monthly
//! steps, applying uniform investment growth, scheduled recurring cashflows
//! and a retirement withdrawal policy, producing nominal and
//! inflation-adjusted net-worth and withdrawal series.
//!
//! The library is pure: all inputs are validated up front, the monthly loop
//! performs no I/O, and identical inputs produce identical snapshot
//! sequences. Loading ledgers, schedules and assumptions from files is the
//! CLI crate's job.
//!
//! ```ignore
//! use firecast_core::{project, Assumptions, CashflowSchedule, StartingBalances};
//!
//! let projection = project(&start, &schedule, &assumptions)?;
//! for snapshot in &projection.snapshots {
//!     println!("{}: {:.2}", snapshot.date, snapshot.net_worth);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod growth;
pub mod projection;
pub mod real_value;
pub mod schedule;
pub mod withdrawal;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ConfigError, ProjectionError, RangeError, ScheduleError};
pub use growth::GrowthModel;
pub use model::{
    AccountId, AccountSet, Assumptions, MAX_HORIZON_YEARS, Projection, ProjectionSnapshot,
    StartingBalances,
};
pub use projection::{project, resolve_end_month};
pub use real_value::RealValueConverter;
pub use schedule::{CashflowEntry, CashflowSchedule, RawCashflowRecord};
pub use withdrawal::{WithdrawalPhase, WithdrawalPolicy};
