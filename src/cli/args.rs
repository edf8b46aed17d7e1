//! CLI argument definitions for `NuPrereqs`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nu_prereqs::config::ConfigOverrides;
use nu_prereqs::core::report::ReportFormat;
use nu_prereqs::logger::Level;

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
        write!(f, "{}", Level::from(*self))
    }
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Markdown with a Mermaid diagram
    #[value(alias = "markdown")]
    Md,
    /// Standalone HTML page
    #[value(alias = "htm")]
    Html,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Md => Self::Markdown,
            FormatArg::Html => Self::Html,
        }
    }
}

/// Completed courses shared by transcript-based commands
#[derive(Debug, Clone, Args)]
pub struct TranscriptArgs {
    /// Completed course ids, e.g. `--completed "CMPT 120" MACM-101` (commas also separate)
    #[arg(short, long, value_name = "COURSE", num_args = 0.., value_delimiter = ',')]
    pub completed: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `limit`)
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

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Parse prerequisite text and print its requirement tree.
    ///
    /// Does not need a catalog.
    Parse {
        /// Requirement text, e.g. "CMPT 125 or CMPT 135, and MACM 101"
        #[arg(value_name = "TEXT")]
        text: String,

        /// Print the tagged JSON tree instead of the infix form
        #[arg(long)]
        json: bool,
    },
    /// Check whether completed courses satisfy a course's prerequisites.
    Check {
        /// Target course id
        #[arg(value_name = "COURSE")]
        target: String,

        #[command(flatten)]
        transcript: TranscriptArgs,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every transitive prerequisite of a course.
    Chain {
        /// Course id
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// List every course a course transitively unlocks.
    Unlocks {
        /// Course id
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Suggest courses to take next.
    Suggest {
        #[command(flatten)]
        transcript: TranscriptArgs,

        /// Maximum number of suggestions (defaults to config `limit`)
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a transcript report.
    ///
    /// Lists completed courses and suggestions, and with --target shows the
    /// target's validation and prerequisite chain diagram.
    Report {
        #[command(flatten)]
        transcript: TranscriptArgs,

        /// Target course to analyze
        #[arg(short, long, value_name = "COURSE")]
        target: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "md")]
        format: FormatArg,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Export the parsed catalog as JSON.
    Export {
        /// Output file path (optional; defaults to config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// List course ids that prerequisites reference but the catalog lacks.
    Dangling,
}

#[derive(Parser, Debug)]
#[command(
    name = "nuprereqs",
    about = "Course prerequisite parsing, checking and graph queries",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Catalog file to load (CSV or exported JSON). Falls back to config `catalog`.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

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

    /// Override config suggestion limit
    #[arg(long = "config-limit", value_name = "N")]
    pub config_limit: Option<usize>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that value.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            limit: self.config_limit,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["nuprereqs", "chain", "CMPT-225"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog.is_none());
        assert!(overrides.limit.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "nuprereqs",
            "--config-level",
            "debug",
            "--config-verbose",
            "yes",
            "--catalog",
            "/tmp/catalog.csv",
            "--config-limit",
            "3",
            "--reports-dir",
            "/out/reports",
            "dangling",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog, Some("/tmp/catalog.csv".to_string()));
        assert_eq!(overrides.limit, Some(3));
        assert_eq!(overrides.reports_dir, Some("/out/reports".to_string()));
    }

    #[test]
    fn test_completed_accepts_commas_and_repeats() {
        let cli = Cli::parse_from([
            "nuprereqs",
            "check",
            "CMPT 225",
            "--completed",
            "CMPT 120,CMPT 125",
            "MACM-101",
        ]);
        let Command::Check { target, transcript, .. } = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(target, "CMPT 225");
        assert_eq!(transcript.completed, vec!["CMPT 120", "CMPT 125", "MACM-101"]);
    }

    #[test]
    fn test_report_format_default() {
        let cli = Cli::parse_from(["nuprereqs", "report", "--target", "CMPT-225"]);
        let Command::Report { format, target, .. } = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(ReportFormat::from(format), ReportFormat::Markdown);
        assert_eq!(target.as_deref(), Some("CMPT-225"));
    }
}
