//! The monthly projection engine.
//!
//! Orchestrates the growth model, withdrawal policy, cashflow schedule and
//! real-value converter into an ordered month-by-month simulation. Each
//! month depends only on the previous month's balance vector; the loop is
//! strictly sequential and deterministic, with no I/O.

use jiff::civil::Date;

use crate::date_math::{add_months, checked_add_months, month_start, months_between, years_between};
use crate::error::{ConfigError, ProjectionError, RangeError};
use crate::growth::GrowthModel;
use crate::model::{
    AccountSet, Assumptions, MAX_HORIZON_YEARS, Projection, ProjectionSnapshot, StartingBalances,
};
use crate::real_value::RealValueConverter;
use crate::schedule::CashflowSchedule;
use crate::withdrawal::{WithdrawalPhase, WithdrawalPolicy};

/// Resolve the final projected month.
///
/// Policy, in priority order:
/// 1. an explicit `end` assumption wins;
/// 2. an empty schedule or any open-ended entry projects for
///    `horizon_years` past the first month;
/// 3. otherwise the latest bounded `end_date` across the schedule.
///
/// Fails with [`ConfigError::InvalidHorizon`] when the horizon end month is
/// not representable, and [`RangeError`] when the resolved end precedes
/// `first_month`.
pub fn resolve_end_month(
    first_month: Date,
    schedule: &CashflowSchedule,
    assumptions: &Assumptions,
) -> Result<Date, ProjectionError> {
    let end_month = if let Some(explicit) = assumptions.end {
        month_start(explicit)
    } else {
        match schedule.last_end() {
            Some(last) if !schedule.has_open_ended() => last,
            _ => {
                let years = assumptions.horizon_years;
                if years > MAX_HORIZON_YEARS {
                    return Err(ConfigError::InvalidHorizon { years }.into());
                }
                checked_add_months(first_month, 12 * years as i32)
                    .ok_or(ConfigError::InvalidHorizon { years })?
            }
        }
    };

    if end_month < first_month {
        Err(RangeError {
            first_month,
            end_month,
        }
        .into())
    } else {
        Ok(end_month)
    }
}

/// Run the projection from the month after `start.month()` through the
/// resolved end month, inclusive.
///
/// Per month, in order: grow every balance, assess the withdrawal policy,
/// apply the month's net cashflows, then derive net worth, real values and
/// age into an immutable snapshot. Accounts referenced only by the schedule
/// enter the balance vector at zero.
pub fn project(
    start: &StartingBalances,
    schedule: &CashflowSchedule,
    assumptions: &Assumptions,
) -> Result<Projection, ProjectionError> {
    assumptions.validate()?;

    let first_month = add_months(start.month(), 1);
    let end_month = resolve_end_month(first_month, schedule, assumptions)?;

    let accounts =
        AccountSet::from_names(start.account_names().chain(schedule.account_names()));

    let mut balances: Vec<f64> = accounts
        .names()
        .map(|name| start.amount(name).unwrap_or(0.0))
        .collect();

    let growth = GrowthModel::new(assumptions.annual_return);
    let policy = WithdrawalPolicy::new(
        month_start(assumptions.withdrawal_start),
        assumptions.withdrawal_rate,
    );
    let converter = RealValueConverter::new(assumptions.basis, assumptions.inflation);

    let n_months = months_between(first_month, end_month) + 1;
    let mut snapshots = Vec::with_capacity(n_months as usize);
    let mut phase = WithdrawalPhase::Accumulation;

    for i in 0..n_months {
        let month = add_months(first_month, i);

        growth.apply(&mut balances);

        let outcome = policy.assess(phase, month, &mut balances);
        phase = outcome.next_phase;

        for (name, amount) in schedule.active_flows(month) {
            if let Some(id) = accounts.id(name) {
                balances[id.index()] += amount;
            }
        }

        let net_worth: f64 = balances.iter().sum();

        snapshots.push(ProjectionSnapshot {
            date: month,
            balances: balances.clone(),
            net_worth,
            withdrawal: outcome.amount,
            age: years_between(assumptions.birthday, month),
            net_worth_real: converter.real_value(net_worth, month),
            withdrawal_real: converter.real_value(outcome.amount, month),
        });
    }

    Ok(Projection {
        accounts,
        snapshots,
    })
}
