use std::fmt;

use crate::config::ConfigError;

/// Failure while loading or reading one sheet. Recovered into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetError {
    pub message: String,
}

impl SheetError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SheetError {}

/// Failure outside the per-sheet loop. Aborts the run.
#[derive(Debug)]
pub enum ReportError {
    Open {
        path: String,
        source: calamine::Error,
    },
    Write {
        path: String,
        source: std::io::Error,
    },
    Config(ConfigError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => write!(f, "failed to open workbook '{path}': {source}"),
            Self::Write { path, source } => write!(f, "failed to write report '{path}': {source}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ReportError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
