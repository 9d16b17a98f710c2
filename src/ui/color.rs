//! Color utilities for terminal output

use crate::reporting::Status;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";

    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Color matching a metric status
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Good => Colors::BRIGHT_GREEN,
        Status::Warning => Colors::BRIGHT_YELLOW,
        Status::Bad => Colors::BRIGHT_RED,
        Status::Info => Colors::BRIGHT_CYAN,
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if cfg!(test) {
        return false;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb") | Ok(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_plain_in_tests() {
        if std::env::var("FORCE_COLOR").is_err() {
            assert_eq!(colorize("text", Colors::BRIGHT_RED), "text");
        }
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(Status::Good), Colors::BRIGHT_GREEN);
        assert_eq!(status_color(Status::Warning), Colors::BRIGHT_YELLOW);
        assert_eq!(status_color(Status::Bad), Colors::BRIGHT_RED);
        assert_eq!(status_color(Status::Info), Colors::BRIGHT_CYAN);
    }
}
