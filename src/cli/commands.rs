//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::feed::DirectoryFeed;
use crate::generate::generate;

use super::{CliError, CliResult, ExitCode};

/// Generate the configured artifact and write it to `output` (stdout when `None`).
///
/// Nothing is written unless generation succeeded.
pub fn generate_artifact(config: &GeneratorConfig, output: Option<&Path>) -> CliResult<ExitCode> {
    let text = render(config).map_err(report)?;
    write_output(&text, output).map_err(|e| report(GenerateError::Io(e)))?;
    Ok(ExitCode::SUCCESS)
}

/// Discover modules under the configured source root and render the artifact.
pub fn render(config: &GeneratorConfig) -> Result<String, GenerateError> {
    let feed = DirectoryFeed::new(config.source_root.as_deref(), config.mode.module_kind())?;
    generate(config, &feed)
}

/// Render a generation error as a miette report.
fn report(err: GenerateError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

/// Write the whole artifact and flush, so a short write fails the run.
fn write_output(text: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, text),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())?;
            lock.flush()
        }
    }
}
