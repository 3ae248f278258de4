//! Top-level error type for a generation run.

use miette::Diagnostic;
use thiserror::Error;

use crate::emit::banner::EpochError;
use crate::feed::FeedError;
use rdatagen_core::RegistryError;

/// Any reason a generation run stops without producing output.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Epoch(#[from] EpochError),

    #[error("dependency output needs a make target")]
    #[diagnostic(code(rdatagen::config::missing_target), help("pass the target name with --target"))]
    MissingDependTarget,

    #[error("cannot read module source {path}")]
    #[diagnostic(code(rdatagen::io::module_source))]
    ModuleSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    #[diagnostic(code(rdatagen::io))]
    Io(#[from] std::io::Error),
}
