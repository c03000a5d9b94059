use std::fmt;

/// Errors raised while building a [`crate::CashflowSchedule`] from raw
/// records. Validation happens once, at construction; the engine never runs
/// against an invalid schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A required column was absent or blank on a record.
    MissingField { row: usize, field: &'static str },
    /// A date column held text that does not parse as a date.
    InvalidDate {
        row: usize,
        field: &'static str,
        value: String,
    },
    /// `monthly_amount` held non-numeric text.
    InvalidAmount { row: usize, value: String },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::MissingField { row, field } => {
                write!(f, "schedule row {row}: missing required field `{field}`")
            }
            ScheduleError::InvalidDate { row, field, value } => {
                write!(f, "schedule row {row}: `{field}` is not a date: {value:?}")
            }
            ScheduleError::InvalidAmount { row, value } => {
                write!(
                    f,
                    "schedule row {row}: `monthly_amount` is not a number: {value:?}"
                )
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Errors raised while assembling [`crate::Assumptions`] from loaded
/// configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required assumption key was absent.
    MissingKey(&'static str),
    /// A date-valued key held unparsable text.
    InvalidDate { key: &'static str, value: String },
    /// A rate was not a finite number.
    InvalidRate { key: &'static str, value: String },
    /// `horizon_years` pushes the end month past the supported calendar.
    InvalidHorizon { years: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingKey(key) => {
                write!(f, "missing required assumption `{key}`")
            }
            ConfigError::InvalidDate { key, value } => {
                write!(f, "assumption `{key}` is not a date: {value:?}")
            }
            ConfigError::InvalidRate { key, value } => {
                write!(f, "assumption `{key}` is not a finite number: {value}")
            }
            ConfigError::InvalidHorizon { years } => {
                write!(f, "assumption `horizon_years` is too long to project: {years}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The resolved projection window was empty: the end month precedes the
/// first month to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub first_month: jiff::civil::Date,
    pub end_month: jiff::civil::Date,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projection window is empty: end month {} precedes first month {}",
            self.end_month, self.first_month
        )
    }
}

impl std::error::Error for RangeError {}

/// Any failure the projection engine can surface to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    Schedule(ScheduleError),
    Config(ConfigError),
    Range(RangeError),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::Schedule(e) => write!(f, "{e}"),
            ProjectionError::Config(e) => write!(f, "{e}"),
            ProjectionError::Range(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectionError::Schedule(e) => Some(e),
            ProjectionError::Config(e) => Some(e),
            ProjectionError::Range(e) => Some(e),
        }
    }
}

impl From<ScheduleError> for ProjectionError {
    fn from(e: ScheduleError) -> Self {
        ProjectionError::Schedule(e)
    }
}

impl From<ConfigError> for ProjectionError {
    fn from(e: ConfigError) -> Self {
        ProjectionError::Config(e)
    }
}

impl From<RangeError> for ProjectionError {
    fn from(e: RangeError) -> Self {
        ProjectionError::Range(e)
    }
}
