//! Closed-form growth, net-worth identity and determinism.

use jiff::civil::date;

use crate::projection::project;
use crate::schedule::CashflowSchedule;

use super::{growth_only, starting};

/// With an empty schedule and no withdrawals, every month follows the
/// closed form `balance(m) = start * (1+r)^m`.
#[test]
fn test_pure_growth_closed_form() {
    let start = starting(&[("Brokerage", 100_000.0)]);
    let schedule = CashflowSchedule::default();
    let assumptions = growth_only(0.10, date(2027, 1, 1)); // 24 months

    let projection = project(&start, &schedule, &assumptions).unwrap();
    assert_eq!(projection.len(), 24);

    let factor = 1.10f64.powf(1.0 / 12.0);
    for (i, snapshot) in projection.snapshots.iter().enumerate() {
        let expected = 100_000.0 * factor.powi(i as i32 + 1);
        assert!(
            (snapshot.net_worth - expected).abs() < 1e-6,
            "month {i}: expected {expected}, got {}",
            snapshot.net_worth
        );
        assert_eq!(snapshot.withdrawal, 0.0);
    }
}

/// $100,000 at 12% annual for one month grows to ≈ $100,948.86.
#[test]
fn test_single_month_growth_example() {
    let start = starting(&[("Brokerage", 100_000.0)]);
    let schedule = CashflowSchedule::default();
    let assumptions = growth_only(0.12, date(2025, 2, 1));

    let projection = project(&start, &schedule, &assumptions).unwrap();
    assert_eq!(projection.len(), 1);

    let snapshot = &projection.snapshots[0];
    assert_eq!(snapshot.date, date(2025, 2, 1));
    assert!(
        (snapshot.net_worth - 100_948.86).abs() < 0.05,
        "net worth was {}",
        snapshot.net_worth
    );
    let id = projection.accounts.id("Brokerage").unwrap();
    assert_eq!(snapshot.balance(id), snapshot.net_worth);
    assert_eq!(snapshot.withdrawal, 0.0);
}

/// Every snapshot's net worth equals the sum of its per-account balances.
#[test]
fn test_net_worth_identity() {
    let start = starting(&[("Brokerage", 100_000.0), ("TSP", 50_000.0)]);
    let schedule = CashflowSchedule::parse(&[crate::schedule::RawCashflowRecord {
        account: Some("Checking".into()),
        monthly_amount: Some("1500".into()),
        start_date: Some("2025-02-01".into()),
        end_date: None,
    }])
    .unwrap();
    let mut assumptions = growth_only(0.07, date(2030, 1, 1));
    assumptions.withdrawal_start = date(2027, 1, 1);
    assumptions.withdrawal_rate = 0.04;
    assumptions.inflation = 0.03;

    let projection = project(&start, &schedule, &assumptions).unwrap();
    for snapshot in &projection.snapshots {
        let total: f64 = snapshot.balances.iter().sum();
        assert!(
            (snapshot.net_worth - total).abs() < 1e-9,
            "identity broke at {}",
            snapshot.date
        );
    }
}

/// Two runs with identical inputs produce identical snapshot sequences.
#[test]
fn test_determinism() {
    let start = starting(&[("Brokerage", 100_000.0), ("TSP", 50_000.0)]);
    let schedule = CashflowSchedule::parse(&[crate::schedule::RawCashflowRecord {
        account: Some("Brokerage".into()),
        monthly_amount: Some("-800.25".into()),
        start_date: Some("2025-06-01".into()),
        end_date: Some("2035-06-01".into()),
    }])
    .unwrap();
    let mut assumptions = growth_only(0.065, date(2040, 1, 1));
    assumptions.withdrawal_start = date(2036, 1, 1);
    assumptions.withdrawal_rate = 0.035;
    assumptions.inflation = 0.025;

    let a = project(&start, &schedule, &assumptions).unwrap();
    let b = project(&start, &schedule, &assumptions).unwrap();

    assert_eq!(a.snapshots, b.snapshots);
}

/// Negative balances are carried, not clamped.
#[test]
fn test_overdraft_is_permitted() {
    let start = starting(&[("Checking", 1_000.0)]);
    let schedule = CashflowSchedule::parse(&[crate::schedule::RawCashflowRecord {
        account: Some("Checking".into()),
        monthly_amount: Some("-2000".into()),
        start_date: Some("2025-02-01".into()),
        end_date: Some("2025-03-01".into()),
    }])
    .unwrap();
    let assumptions = growth_only(0.0, date(2025, 3, 1));

    let projection = project(&start, &schedule, &assumptions).unwrap();
    assert_eq!(projection.snapshots[0].net_worth, -1_000.0);
    assert_eq!(projection.final_net_worth(), Some(-3_000.0));
}
