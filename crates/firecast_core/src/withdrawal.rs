//! Retirement withdrawal state machine.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Which side of the retirement date a run is on.
///
/// The transition to `Withdrawal` happens the first month at or after the
/// configured start and is irreversible for the remainder of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WithdrawalPhase {
    #[default]
    Accumulation,
    Withdrawal,
}

/// Outcome of assessing one month: the amount drawn and the phase to carry
/// into the next month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalOutcome {
    pub amount: f64,
    pub next_phase: WithdrawalPhase,
}

/// Decides whether and how much to withdraw from the total balance in a
/// given month.
///
/// During withdrawal the monthly draw is `total * rate / 12`, and every
/// balance is then scaled by `1 - rate/12` so exactly the withdrawn fraction
/// leaves each account and the cross-account composition is preserved.
#[derive(Debug, Clone, Copy)]
pub struct WithdrawalPolicy {
    start: Date,
    annual_rate: f64,
}

impl WithdrawalPolicy {
    pub fn new(start: Date, annual_rate: f64) -> Self {
        Self { start, annual_rate }
    }

    /// Assess one month. Pure: reads the grown balances, mutates them only
    /// by the proportional reduction, and reports the amount withdrawn.
    pub fn assess(
        &self,
        phase: WithdrawalPhase,
        month: Date,
        balances: &mut [f64],
    ) -> WithdrawalOutcome {
        let in_withdrawal = phase == WithdrawalPhase::Withdrawal || month >= self.start;
        if !in_withdrawal {
            return WithdrawalOutcome {
                amount: 0.0,
                next_phase: WithdrawalPhase::Accumulation,
            };
        }

        let monthly_fraction = self.annual_rate / 12.0;
        let total: f64 = balances.iter().sum();
        let amount = total * monthly_fraction;

        for balance in balances {
            *balance *= 1.0 - monthly_fraction;
        }

        WithdrawalOutcome {
            amount,
            next_phase: WithdrawalPhase::Withdrawal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn start() -> Date {
        date(2035, 11, 1)
    }

    #[test]
    fn test_accumulation_is_a_no_op() {
        let policy = WithdrawalPolicy::new(start(), 0.04);
        let mut balances = vec![100_000.0, 50_000.0];

        let outcome = policy.assess(WithdrawalPhase::Accumulation, date(2035, 10, 1), &mut balances);

        assert_eq!(outcome.amount, 0.0);
        assert_eq!(outcome.next_phase, WithdrawalPhase::Accumulation);
        assert_eq!(balances, vec![100_000.0, 50_000.0]);
    }

    #[test]
    fn test_transition_on_start_month() {
        let policy = WithdrawalPolicy::new(start(), 0.04);
        let mut balances = vec![300_000.0];

        let outcome = policy.assess(WithdrawalPhase::Accumulation, start(), &mut balances);

        assert_eq!(outcome.next_phase, WithdrawalPhase::Withdrawal);
        assert!((outcome.amount - 300_000.0 * 0.04 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_matches_withdrawal_amount() {
        let policy = WithdrawalPolicy::new(start(), 0.04);
        let mut balances = vec![200_000.0, 100_000.0];
        let before: f64 = balances.iter().sum();

        let outcome = policy.assess(WithdrawalPhase::Withdrawal, date(2036, 1, 1), &mut balances);

        let after: f64 = balances.iter().sum();
        assert!((before - after - outcome.amount).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_preserves_composition() {
        let policy = WithdrawalPolicy::new(start(), 0.04);
        let mut balances = vec![200_000.0, 100_000.0];

        policy.assess(WithdrawalPhase::Withdrawal, date(2036, 1, 1), &mut balances);

        assert!((balances[0] / balances[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_is_sticky() {
        // Once in withdrawal, an earlier month never flips the phase back.
        let policy = WithdrawalPolicy::new(start(), 0.04);
        let mut balances = vec![100_000.0];

        let outcome = policy.assess(WithdrawalPhase::Withdrawal, date(2035, 1, 1), &mut balances);

        assert_eq!(outcome.next_phase, WithdrawalPhase::Withdrawal);
        assert!(outcome.amount > 0.0);
    }

    #[test]
    fn test_zero_rate_withdraws_nothing() {
        let policy = WithdrawalPolicy::new(start(), 0.0);
        let mut balances = vec![100_000.0];

        let outcome = policy.assess(WithdrawalPhase::Accumulation, date(2040, 1, 1), &mut balances);

        assert_eq!(outcome.amount, 0.0);
        assert_eq!(outcome.next_phase, WithdrawalPhase::Withdrawal);
        assert_eq!(balances[0], 100_000.0);
    }
}
