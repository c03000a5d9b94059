//! Explicit file locations for every input and output.
//!
//! All path resolution happens here, once, from CLI flags and the data
//! directory default. Loaders receive a `DataPaths` value; nothing else in
//! the program consults the environment or hard-codes a location.

use std::path::{Path, PathBuf};

/// Resolved locations of the ledger, schedule, assumptions and output files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    data_dir: PathBuf,
    balances: PathBuf,
    schedule: PathBuf,
    assumptions: PathBuf,
    output: PathBuf,
}

/// The default data directory (~/.firecast/).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".firecast")
}

impl DataPaths {
    /// Build paths from an optional data-dir override and optional per-file
    /// overrides. Files default to well-known names inside the data dir.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        balances: Option<PathBuf>,
        schedule: Option<PathBuf>,
        assumptions: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        Self {
            balances: balances.unwrap_or_else(|| data_dir.join("balances.csv")),
            schedule: schedule.unwrap_or_else(|| data_dir.join("cashflow_schedule.csv")),
            assumptions: assumptions.unwrap_or_else(|| data_dir.join("assumptions.json")),
            output: output.unwrap_or_else(|| data_dir.join("projection.csv")),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn balances(&self) -> &Path {
        &self.balances
    }

    pub fn schedule(&self) -> &Path {
        &self.schedule
    }

    pub fn assumptions(&self) -> &Path {
        &self.assumptions
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_live_in_data_dir() {
        let paths = DataPaths::resolve(Some(PathBuf::from("/tmp/fc")), None, None, None, None);
        assert_eq!(paths.data_dir(), Path::new("/tmp/fc"));
        assert_eq!(paths.balances(), Path::new("/tmp/fc/balances.csv"));
        assert_eq!(paths.schedule(), Path::new("/tmp/fc/cashflow_schedule.csv"));
        assert_eq!(paths.assumptions(), Path::new("/tmp/fc/assumptions.json"));
        assert_eq!(paths.output(), Path::new("/tmp/fc/projection.csv"));
    }

    #[test]
    fn test_overrides_win() {
        let paths = DataPaths::resolve(
            Some(PathBuf::from("/tmp/fc")),
            Some(PathBuf::from("/elsewhere/bal.csv")),
            None,
            None,
            Some(PathBuf::from("out.csv")),
        );
        assert_eq!(paths.balances(), Path::new("/elsewhere/bal.csv"));
        assert_eq!(paths.schedule(), Path::new("/tmp/fc/cashflow_schedule.csv"));
        assert_eq!(paths.output(), Path::new("out.csv"));
    }
}
