//! Configuration module for `gpa-planner`

use crate::core::calendar::{AcademicCalendar, DEFAULT_CALENDAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path values
const DIR_VARIABLE: &str = "$GPA_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Academic calendar configuration
///
/// A month value of `0` means "not set" and falls back to the built-in
/// calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First month (1-12) of the Summer term
    #[serde(default)]
    pub summer_start_month: u32,
    /// First month (1-12) of the Fall term
    #[serde(default)]
    pub fall_start_month: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Term boundaries
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPA_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpaplanner`
    /// - macOS: `~/Library/Application Support/gpaplanner`
    /// - Windows: `%APPDATA%\gpaplanner`
    #[must_use]
    pub fn get_gpaplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpaplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that settings added in newer versions are filled
    /// in. Only empty (or zero) fields take the default value.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.calendar.summer_start_month == 0 && defaults.calendar.summer_start_month != 0 {
            self.calendar.summer_start_month = defaults.calendar.summer_start_month;
            changed = true;
        }
        if self.calendar.fall_start_month == 0 && defaults.calendar.fall_start_month != 0 {
            self.calendar.fall_start_month = defaults.calendar.fall_start_month;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Academic calendar described by this config.
    ///
    /// Unset or invalid boundaries fall back to [`DEFAULT_CALENDAR`].
    #[must_use]
    pub fn academic_calendar(&self) -> AcademicCalendar {
        let summer = match self.calendar.summer_start_month {
            0 => DEFAULT_CALENDAR.summer_start_month,
            month => month,
        };
        let fall = match self.calendar.fall_start_month {
            0 => DEFAULT_CALENDAR.fall_start_month,
            month => month,
        };

        AcademicCalendar::new(summer, fall).unwrap_or(DEFAULT_CALENDAR)
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, in
    /// the directory returned by [`get_gpaplanner_dir`].
    ///
    /// [`get_gpaplanner_dir`]: Self::get_gpaplanner_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpaplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$GPA_PLANNER` with the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpaplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, `false`, `0`).
    /// `$GPA_PLANNER` in path values is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults, and save it back when something was added
    /// - On first run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`,
    /// `summer_start_month`, `fall_start_month` (dashes accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "summer_start_month" | "summer-start-month" => {
                Some(self.calendar.summer_start_month.to_string())
            }
            "fall_start_month" | "fall-start-month" => {
                Some(self.calendar.fall_start_month.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized, the value cannot be
    /// parsed, or the calendar boundaries would become invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "summer_start_month" | "summer-start-month" => {
                let month = parse_month(key, value)?;
                AcademicCalendar::new(month, self.academic_calendar().fall_start_month)?;
                self.calendar.summer_start_month = month;
            }
            "fall_start_month" | "fall-start-month" => {
                let month = parse_month(key, value)?;
                AcademicCalendar::new(self.academic_calendar().summer_start_month, month)?;
                self.calendar.fall_start_month = month;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "summer_start_month" | "summer-start-month" => {
                self.calendar.summer_start_month = defaults.calendar.summer_start_month;
            }
            "fall_start_month" | "fall-start-month" => {
                self.calendar.fall_start_month = defaults.calendar.fall_start_month;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_month(key: &str, value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .map_err(|_| format!("Invalid month for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[calendar]")?;
        writeln!(
            f,
            "  summer_start_month = {}",
            self.calendar.summer_start_month
        )?;
        writeln!(f, "  fall_start_month = {}", self.calendar.fall_start_month)?;

        Ok(())
    }
}
