use crate::core::error::PerfSummaryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Reading, parsing or writing failed; no reports were produced.
    RunError = 1,

    /// Invalid CLI/config (bad flags, unreadable or invalid config file).
    InvalidInput = 2,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_error(err: &PerfSummaryError) -> Self {
        match err {
            PerfSummaryError::Config(_) => Self::InvalidInput,
            _ => Self::RunError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_codes() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RunError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidInput.as_i32(), 2);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ExitCode::from_error(&PerfSummaryError::Config("x".to_string())),
            ExitCode::InvalidInput
        );
        assert_eq!(
            ExitCode::from_error(&PerfSummaryError::malformed("a.json", "bad")),
            ExitCode::RunError
        );
        assert_eq!(
            ExitCode::from_error(&PerfSummaryError::WriteFailure {
                path: PathBuf::from("index.html"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
            ExitCode::RunError
        );
    }

    #[test]
    fn test_invalid_config_file_is_invalid_input() {
        use crate::config::Config;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"reports_dir = [").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, PerfSummaryError::Config(_)));
        assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);
    }
}
