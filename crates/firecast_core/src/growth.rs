//! Uniform investment growth.

/// Converts an annual return into a monthly compounding factor and applies
/// it uniformly to a balance vector. A single global rate; per-account rates
/// are out of scope.
#[derive(Debug, Clone, Copy)]
pub struct GrowthModel {
    monthly_factor: f64,
}

impl GrowthModel {
    pub fn new(annual_return: f64) -> Self {
        Self {
            monthly_factor: (1.0 + annual_return).powf(1.0 / 12.0),
        }
    }

    /// The equivalent monthly rate `(1+a)^(1/12) - 1`.
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_factor - 1.0
    }

    /// Compound every balance by one month. Applied before withdrawals and
    /// cashflows; full precision is carried forward between months.
    pub fn apply(&self, balances: &mut [f64]) {
        for balance in balances {
            *balance *= self.monthly_factor;
        }
    }
}
