//! CLI module for the rdata code generator
//!
//! ## Modes
//!
//! - (no flag) - full code header: dispatch templates, hash lookup, accessors
//! - `-t` - type enumeration header
//! - `-c` - class enumeration header
//! - `-i` - concatenated struct headers
//! - `-d -F <target>` - make dependency lines
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};

use crate::config::{GeneratorConfig, OutputMode};
use crate::version::RDATAGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate rdata dispatch code and enumerations from the rdata module tree
#[derive(Parser, Debug)]
#[command(name = "rdatagen")]
#[command(version = RDATAGEN_VERSION)]
#[command(about = "Generate rdata dispatch code and enumerations", long_about = None)]
#[command(group(ArgGroup::new("mode").multiple(false).args(["class_enum", "type_enum", "structs", "depend"])))]
pub struct Cli {
    /// Emit the class enumeration header
    #[arg(short = 'c', long = "class-enum")]
    pub class_enum: bool,

    /// Emit the type enumeration header
    #[arg(short = 't', long = "type-enum")]
    pub type_enum: bool,

    /// Emit the concatenated struct headers
    #[arg(short = 'i', long = "structs")]
    pub structs: bool,

    /// Emit make dependency lines for the struct headers
    #[arg(short = 'd', long = "depend", requires = "target")]
    pub depend: bool,

    /// Directory containing `rdata/` (default: current directory)
    #[arg(short = 's', long = "source-root", value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Make target named on each dependency line
    #[arg(short = 'F', long = "target", value_name = "NAME")]
    pub target: Option<String>,

    /// File copied ahead of the struct headers
    #[arg(short = 'P', long = "prefix", value_name = "FILE")]
    pub prefix: Option<PathBuf>,

    /// File copied after the struct headers
    #[arg(short = 'S', long = "suffix", value_name = "FILE")]
    pub suffix: Option<PathBuf>,

    /// Seconds since the Unix epoch used for the banner year
    #[arg(long = "source-date-epoch", env = "SOURCE_DATE_EPOCH", value_name = "SECONDS")]
    pub source_date_epoch: Option<String>,

    /// Paste module sources into the code header instead of including them
    #[arg(long = "inline-modules")]
    pub inline_modules: bool,

    /// Write the artifact to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Selected artifact; no mode flag means the full code header.
    pub fn mode(&self) -> OutputMode {
        if self.class_enum {
            OutputMode::ClassEnum
        } else if self.type_enum {
            OutputMode::TypeEnum
        } else if self.structs {
            OutputMode::Structs
        } else if self.depend {
            OutputMode::Depend
        } else {
            OutputMode::Code
        }
    }

    /// Generation settings carried by the flags.
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            mode: self.mode(),
            source_root: self.source_root.clone(),
            depend_target: self.target.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            source_date_epoch: self.source_date_epoch.clone(),
            inline_modules: self.inline_modules,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.to_config();
    commands::generate_artifact(&config, cli.output.as_deref())
}

// ============================================================================
// Tests
// ============================================================================
