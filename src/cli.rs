// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `colocate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "colocate",
    version,
    about = "Filter candidate nodes down to those hosting a container's dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the scenario file (TOML).
    ///
    /// Default: `Colocate.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Colocate.toml")]
    pub config: String,

    /// Print the declared dependencies as run flags and exit without
    /// filtering.
    #[arg(long)]
    pub describe: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COLOCATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level name as an `EnvFilter` directive.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
