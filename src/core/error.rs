use std::fmt;
use std::path::PathBuf;

/// Error types for perfsummary operations
///
/// A missing results file is not represented here: the analyzer turns it
/// into "no data" for that category.
#[derive(Debug)]
pub enum PerfSummaryError {
    /// A results file exists but is not a valid results document
    MalformedSource { path: PathBuf, reason: String },

    /// A results file exists but could not be read
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generated artifact could not be written
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error, including an unreadable or invalid config file
    Config(String),
}

impl PerfSummaryError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        PerfSummaryError::MalformedSource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for PerfSummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfSummaryError::MalformedSource { path, reason } => {
                write!(f, "Malformed results file '{}': {reason}", path.display())
            }
            PerfSummaryError::SourceRead { path, source } => {
                write!(f, "Could not read results file '{}': {source}", path.display())
            }
            PerfSummaryError::WriteFailure { path, source } => {
                write!(f, "Could not write report '{}': {source}", path.display())
            }
            PerfSummaryError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PerfSummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfSummaryError::SourceRead { source, .. } => Some(source),
            PerfSummaryError::WriteFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Type alias for Results using PerfSummaryError
pub type Result<T> = std::result::Result<T, PerfSummaryError>;
