//! Scenario assumptions shared read-only across a projection run.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_horizon_years() -> u32 {
    30
}

/// Longest supported `horizon_years`. Keeps the derived end month well
/// inside jiff's civil date range for any plausible start month.
pub const MAX_HORIZON_YEARS: u32 = 1_000;

/// Everything a projection needs beyond balances and the cashflow schedule.
///
/// Constructed once by a configuration loader, then borrowed immutably for
/// the whole run. Date fields other than `birthday` are treated as month
/// starts; loaders normalize them before constructing this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    /// Nominal annual return applied uniformly to every account.
    pub annual_return: f64,
    /// Annual inflation used for real-value discounting.
    pub inflation: f64,
    /// First month of the withdrawal phase.
    pub withdrawal_start: Date,
    /// Annual withdrawal rate as a fraction (e.g. 0.04).
    pub withdrawal_rate: f64,
    /// The "today" month real values are expressed against.
    pub basis: Date,
    /// Birthday, kept at day precision for fractional-age math.
    pub birthday: Date,
    /// Projection length when the schedule leaves the horizon open.
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
    /// Explicit final month, overriding the derived end-month policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Date>,
}

impl Assumptions {
    /// Reject non-finite rates and an unprojectable horizon before a run
    /// starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("annual_return", self.annual_return),
            ("inflation", self.inflation),
            ("withdrawal_rate", self.withdrawal_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidRate {
                    key,
                    value: value.to_string(),
                });
            }
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(ConfigError::InvalidHorizon {
                years: self.horizon_years,
            });
        }
        Ok(())
    }
}
