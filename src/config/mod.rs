//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, links};
use crate::core::error::{PerfSummaryError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the results files and receiving the reports
    pub reports_dir: Option<String>,

    /// File name of the performance results, relative to `reports_dir`
    pub performance_results: Option<String>,

    /// File name of the load-test results, relative to `reports_dir`
    pub load_test_results: Option<String>,

    /// File name of the HTML dashboard
    pub dashboard_file: Option<String>,

    /// File name of the Markdown summary
    pub summary_file: Option<String>,

    /// Link target for "View detailed reports" in the summary
    pub details_url: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reports_dir: Some(files::DEFAULT_REPORTS_DIR.to_string()),
            performance_results: Some(files::PERFORMANCE_RESULTS.to_string()),
            load_test_results: Some(files::LOAD_TEST_RESULTS.to_string()),
            dashboard_file: Some(files::DASHBOARD.to_string()),
            summary_file: Some(files::SUMMARY.to_string()),
            details_url: Some(links::DEFAULT_DETAILS_URL.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file; unset keys take their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PerfSummaryError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let loaded: Config = toml::from_str(&content).map_err(|e| {
            PerfSummaryError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::default();
        config.overlay(loaded);
        config.validate()?;
        Ok(config)
    }

    /// Find a config file in the current directory or up to three parents.
    ///
    /// Returns defaults when none exists. A file that exists but is invalid
    /// is an error rather than being skipped.
    pub fn load_from_standard_locations() -> Result<Self> {
        for depth in 0..=files::CONFIG_SEARCH_DEPTH {
            let path = PathBuf::from(format!("{}{}", "../".repeat(depth), files::CONFIG_FILE));
            if path.is_file() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    // Fields set in `other` replace the ones in `self`
    fn overlay(&mut self, other: Config) {
        if other.reports_dir.is_some() {
            self.reports_dir = other.reports_dir;
        }
        if other.performance_results.is_some() {
            self.performance_results = other.performance_results;
        }
        if other.load_test_results.is_some() {
            self.load_test_results = other.load_test_results;
        }
        if other.dashboard_file.is_some() {
            self.dashboard_file = other.dashboard_file;
        }
        if other.summary_file.is_some() {
            self.summary_file = other.summary_file;
        }
        if other.details_url.is_some() {
            self.details_url = other.details_url;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref dir) = cli_config.reports_dir {
            self.reports_dir = Some(dir.clone());
        }
        if let Some(ref url) = cli_config.details_url {
            self.details_url = Some(url.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn reports_dir(&self) -> PathBuf {
        PathBuf::from(
            self.reports_dir
                .as_deref()
                .unwrap_or(files::DEFAULT_REPORTS_DIR),
        )
    }

    pub fn performance_results_path(&self) -> PathBuf {
        self.in_reports_dir(&self.performance_results, files::PERFORMANCE_RESULTS)
    }

    pub fn load_test_results_path(&self) -> PathBuf {
        self.in_reports_dir(&self.load_test_results, files::LOAD_TEST_RESULTS)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.in_reports_dir(&self.dashboard_file, files::DASHBOARD)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.in_reports_dir(&self.summary_file, files::SUMMARY)
    }

    pub fn details_url(&self) -> &str {
        self.details_url
            .as_deref()
            .unwrap_or(links::DEFAULT_DETAILS_URL)
    }

    fn in_reports_dir(&self, name: &Option<String>, default: &str) -> PathBuf {
        self.reports_dir().join(name.as_deref().unwrap_or(default))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref dir) = self.reports_dir
            && dir.trim().is_empty()
        {
            return Err(PerfSummaryError::Config(
                "Reports directory cannot be empty.".to_string(),
            ));
        }

        let names = [
            ("performance_results", &self.performance_results),
            ("load_test_results", &self.load_test_results),
            ("dashboard_file", &self.dashboard_file),
            ("summary_file", &self.summary_file),
        ];
        for (key, name) in names {
            if let Some(name) = name {
                if name.trim().is_empty() {
                    return Err(PerfSummaryError::Config(format!(
                        "'{key}' cannot be empty. Expected a file name."
                    )));
                }
                if name.contains('/') || name.contains('\\') {
                    return Err(PerfSummaryError::Config(format!(
                        "'{key}' must be a plain file name inside the reports directory, got '{name}'."
                    )));
                }
            }
        }

        if self.dashboard_path() == self.summary_path() {
            return Err(PerfSummaryError::Config(
                "Dashboard and summary cannot be written to the same file.".to_string(),
            ));
        }

        let outputs = [self.dashboard_path(), self.summary_path()];
        let inputs = [self.performance_results_path(), self.load_test_results_path()];
        if outputs.iter().any(|o| inputs.contains(o)) {
            return Err(PerfSummaryError::Config(
                "Reports cannot overwrite a results file.".to_string(),
            ));
        }

        if let Some(ref url) = self.details_url
            && url.trim().is_empty()
        {
            return Err(PerfSummaryError::Config(
                "Details URL cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub reports_dir: Option<String>,
    pub details_url: Option<String>,
    pub config_file: Option<String>,
    pub no_config: bool,
    pub verbose: bool,
    pub quiet: bool,
}
