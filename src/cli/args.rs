//! CLI argument definitions for `gpaplanner`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_planner::config::ConfigOverrides;
use gpa_planner::core::models::Semester;
use gpa_planner::core::projection::HypotheticalCourse;
use gpa_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// A student record file and the semester to evaluate it against
#[derive(Debug, Clone, Args)]
pub struct RecordInput {
    /// Path to a student record (.toml or .json)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat this semester as the current one (e.g. "Fall 2024").
    /// Defaults to today's date mapped through the configured calendar.
    #[arg(long, value_name = "SEMESTER")]
    pub as_of: Option<Semester>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show averages, credits, degree progress and projections.
    Summary {
        #[command(flatten)]
        input: RecordInput,
    },
    /// List courses semester by semester with per-semester averages.
    Semesters {
        #[command(flatten)]
        input: RecordInput,
    },
    /// Show the remaining workload until graduation.
    Plan {
        #[command(flatten)]
        input: RecordInput,
    },
    /// Preview the weighted average with hypothetical courses added.
    WhatIf {
        #[command(flatten)]
        input: RecordInput,

        /// Hypothetical course as NAME:GRADE:CREDITS (repeatable)
        #[arg(
            short,
            long = "course",
            value_name = "NAME:GRADE:CREDITS",
            value_parser = parse_hypothetical,
            required = true
        )]
        courses: Vec<HypotheticalCourse>,
    },
    /// Generate a progress report file.
    Report {
        #[command(flatten)]
        input: RecordInput,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpaplanner",
    about = "Track course grades, weighted averages and degree progress",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that field.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

/// Parse `NAME:GRADE:CREDITS`
///
/// The name may itself contain colons; grade and credits are taken from the
/// right. Grades must lie in `[0, 100]` and credits must be positive.
pub fn parse_hypothetical(value: &str) -> Result<HypotheticalCourse, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(credits), Some(grade), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:GRADE:CREDITS, got '{value}'"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing course name in '{value}'"));
    }

    let grade: f64 = grade
        .trim()
        .parse()
        .map_err(|_| format!("invalid grade '{grade}'"))?;
    if !(0.0..=100.0).contains(&grade) {
        return Err(format!("grade {grade} must be between 0 and 100"));
    }

    let credits: f64 = credits
        .trim()
        .parse()
        .map_err(|_| format!("invalid credits '{credits}'"))?;
    if !(credits.is_finite() && credits > 0.0) {
        return Err(format!("credits {credits} must be positive"));
    }

    Ok(HypotheticalCourse::new(name, grade, credits))
}
