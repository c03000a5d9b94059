//! Assumptions file loading.
//!
//! Assumptions live in a small JSON object. Every field deserializes as
//! optional, and rates as raw JSON values, so that a missing, malformed or
//! wrong-typed key surfaces as a [`ConfigError`] naming the key, rather
//! than a serde position error.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use firecast_core::date_math::{parse_date, parse_month};
use firecast_core::{Assumptions, ConfigError};

/// The raw shape of `assumptions.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssumptionsFile {
    pub birthday: Option<String>,
    pub annual_return: Option<serde_json::Value>,
    pub inflation: Option<serde_json::Value>,
    pub basis: Option<String>,
    pub withdrawal_start_date: Option<String>,
    pub withdrawal_rate: Option<serde_json::Value>,
    pub horizon_years: Option<u32>,
    pub end_date: Option<String>,
}

impl AssumptionsFile {
    /// Validate and convert into the core input type.
    pub fn into_assumptions(self) -> Result<Assumptions, ConfigError> {
        let birthday = parse_required_date(self.birthday.as_deref(), "birthday", parse_date)?;
        let basis = parse_required_date(self.basis.as_deref(), "basis", parse_month)?;
        let withdrawal_start = parse_required_date(
            self.withdrawal_start_date.as_deref(),
            "withdrawal_start_date",
            parse_month,
        )?;

        let end = match self.end_date.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                Some(parse_month(text).ok_or(ConfigError::InvalidDate {
                    key: "end_date",
                    value: text.to_string(),
                })?)
            }
            _ => None,
        };

        let assumptions = Assumptions {
            annual_return: required_rate(self.annual_return.as_ref(), "annual_return")?,
            inflation: required_rate(self.inflation.as_ref(), "inflation")?,
            withdrawal_start,
            withdrawal_rate: required_rate(self.withdrawal_rate.as_ref(), "withdrawal_rate")?,
            basis,
            birthday,
            horizon_years: self.horizon_years.unwrap_or(30),
            end,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }
}

fn required_rate(
    value: Option<&serde_json::Value>,
    key: &'static str,
) -> Result<f64, ConfigError> {
    match value {
        Some(v) => v.as_f64().ok_or_else(|| ConfigError::InvalidRate {
            key,
            value: v.to_string(),
        }),
        None => Err(ConfigError::MissingKey(key)),
    }
}

fn parse_required_date(
    text: Option<&str>,
    key: &'static str,
    parse: fn(&str) -> Option<jiff::civil::Date>,
) -> Result<jiff::civil::Date, ConfigError> {
    match text {
        Some(text) if !text.trim().is_empty() => {
            parse(text).ok_or(ConfigError::InvalidDate {
                key,
                value: text.to_string(),
            })
        }
        _ => Err(ConfigError::MissingKey(key)),
    }
}

/// Load and validate the assumptions file.
pub fn load(path: &Path) -> Result<Assumptions> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read assumptions {}", path.display()))?;
    let file: AssumptionsFile = serde_json::from_str(&text)
        .wrap_err_with(|| format!("assumptions {} is not valid JSON", path.display()))?;
    let assumptions = file
        .into_assumptions()
        .wrap_err_with(|| format!("invalid assumptions in {}", path.display()))?;

    tracing::debug!(
        annual_return = assumptions.annual_return,
        inflation = assumptions.inflation,
        withdrawal_rate = assumptions.withdrawal_rate,
        "assumptions loaded"
    );
    Ok(assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use serde_json::json;

    fn full_file() -> AssumptionsFile {
        AssumptionsFile {
            birthday: Some("1985-06-15".into()),
            annual_return: Some(json!(0.10)),
            inflation: Some(json!(0.03)),
            basis: Some("2025-01".into()),
            withdrawal_start_date: Some("2035-11-01".into()),
            withdrawal_rate: Some(json!(0.04)),
            horizon_years: None,
            end_date: None,
        }
    }

    #[test]
    fn test_full_file_converts() {
        let assumptions = full_file().into_assumptions().unwrap();
        assert_eq!(assumptions.birthday, date(1985, 6, 15));
        assert_eq!(assumptions.basis, date(2025, 1, 1));
        assert_eq!(assumptions.withdrawal_start, date(2035, 11, 1));
        assert_eq!(assumptions.horizon_years, 30);
        assert_eq!(assumptions.end, None);
    }

    #[test]
    fn test_missing_key_named() {
        let mut file = full_file();
        file.withdrawal_rate = None;
        assert_eq!(
            file.into_assumptions().unwrap_err(),
            ConfigError::MissingKey("withdrawal_rate")
        );
    }

    #[test]
    fn test_wrong_typed_rate_named() {
        let mut file = full_file();
        file.annual_return = Some(json!("lots"));
        assert_eq!(
            file.into_assumptions().unwrap_err(),
            ConfigError::InvalidRate {
                key: "annual_return",
                value: "\"lots\"".into()
            }
        );
    }

    #[test]
    fn test_bad_date_named() {
        let mut file = full_file();
        file.basis = Some("soonish".into());
        assert_eq!(
            file.into_assumptions().unwrap_err(),
            ConfigError::InvalidDate {
                key: "basis",
                value: "soonish".into()
            }
        );
    }

    #[test]
    fn test_optional_end_date_parsed() {
        let mut file = full_file();
        file.end_date = Some("2055-06-17".into());
        let assumptions = file.into_assumptions().unwrap();
        assert_eq!(assumptions.end, Some(date(2055, 6, 1)));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "birthday": "1985-06-15",
            "annual_return": 0.10,
            "inflation": 0.03,
            "basis": "2025-01",
            "withdrawal_start_date": "2035-11-01",
            "withdrawal_rate": 0.04,
            "horizon_years": 25
        }"#;
        let file: AssumptionsFile = serde_json::from_str(json).unwrap();
        let assumptions = file.into_assumptions().unwrap();
        assert_eq!(assumptions.horizon_years, 25);
    }
}
