//! Inflation discounting against a fixed basis month.

use jiff::civil::Date;

use crate::date_math::months_between;

/// Re-expresses nominal amounts in the purchasing power of a fixed basis
/// month.
///
/// Sign convention: `delta_months = basis - month`, so a month after the
/// basis gets a factor below one (future dollars are deflated back to basis
/// purchasing power) and a month before the basis is inflated.
#[derive(Debug, Clone, Copy)]
pub struct RealValueConverter {
    basis: Date,
    inflation: f64,
}

impl RealValueConverter {
    pub fn new(basis: Date, inflation: f64) -> Self {
        Self {
            basis: basis.first_of_month(),
            inflation,
        }
    }

    /// The discount factor for `month`: `(1+inflation)^((basis - month)/12)`.
    pub fn factor(&self, month: Date) -> f64 {
        let delta_months = months_between(month, self.basis);
        (1.0 + self.inflation).powf(f64::from(delta_months) / 12.0)
    }

    /// Convert a nominal amount in `month` to basis-month purchasing power.
    pub fn real_value(&self, nominal: f64, month: Date) -> f64 {
        nominal * self.factor(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_basis_month_is_identity() {
        let converter = RealValueConverter::new(date(2025, 1, 1), 0.03);
        assert_eq!(converter.real_value(1000.0, date(2025, 1, 1)), 1000.0);
        // Day within the basis month is irrelevant
        assert_eq!(converter.real_value(1000.0, date(2025, 1, 17)), 1000.0);
    }

    #[test]
    fn test_future_months_are_deflated() {
        let converter = RealValueConverter::new(date(2025, 1, 1), 0.03);
        // One year out: 1000 / 1.03
        let real = converter.real_value(1000.0, date(2026, 1, 1));
        assert!((real - 1000.0 / 1.03).abs() < 1e-9);
    }

    #[test]
    fn test_past_months_are_inflated() {
        let converter = RealValueConverter::new(date(2025, 1, 1), 0.03);
        let real = converter.real_value(1000.0, date(2024, 1, 1));
        assert!((real - 1030.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_inflation_is_identity() {
        let converter = RealValueConverter::new(date(2025, 1, 1), 0.0);
        assert_eq!(converter.real_value(42.0, date(2055, 1, 1)), 42.0);
    }

    #[test]
    fn test_partial_year_exponent() {
        let converter = RealValueConverter::new(date(2025, 1, 1), 0.03);
        let real = converter.real_value(1000.0, date(2025, 7, 1));
        let expected = 1000.0 * 1.03f64.powf(-0.5);
        assert!((real - expected).abs() < 1e-9);
    }
}
