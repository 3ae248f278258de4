//! Generation configuration
//!
//! Everything a generation run needs besides the module feed. The CLI builds one of these from its flags and the
//! environment; tests build them directly.

use std::path::{Path, PathBuf};

/// Which artifact a run produces. Exactly one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Header guard, module sources, dispatch templates, hash lookup and accessors.
    #[default]
    Code,
    /// Type number enumeration with aliases.
    TypeEnum,
    /// Class number enumeration with aliases.
    ClassEnum,
    /// Concatenated per-module struct headers.
    Structs,
    /// One dependency line per module.
    Depend,
}

impl OutputMode {
    /// Extension of the module files this mode discovers.
    pub fn module_kind(self) -> char {
        match self {
            OutputMode::Code | OutputMode::TypeEnum | OutputMode::ClassEnum => 'c',
            OutputMode::Structs | OutputMode::Depend => 'h',
        }
    }
}

/// Generation configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Artifact to produce
    pub mode: OutputMode,
    /// Directory containing `rdata/`; `None` means the working directory
    pub source_root: Option<PathBuf>,
    /// Make target named on every dependency line
    pub depend_target: Option<String>,
    /// File copied ahead of the struct headers
    pub prefix: Option<PathBuf>,
    /// File copied after the struct headers
    pub suffix: Option<PathBuf>,
    /// Raw `SOURCE_DATE_EPOCH` value, validated when the banner is rendered
    pub source_date_epoch: Option<String>,
    /// Paste module sources into the code artifact instead of `#include`-ing them
    pub inline_modules: bool,
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_source_root(mut self, root: impl AsRef<Path>) -> Self {
        self.source_root = Some(root.as_ref().to_path_buf());
        self
    }

    pub fn with_depend_target(mut self, target: impl Into<String>) -> Self {
        self.depend_target = Some(target.into());
        self
    }

    pub fn with_prefix(mut self, path: impl AsRef<Path>) -> Self {
        self.prefix = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_suffix(mut self, path: impl AsRef<Path>) -> Self {
        self.suffix = Some(path.as_ref().to_path_buf());
        self
    }

    /// Pin the banner year to a reproducible-build timestamp
    pub fn with_source_date_epoch(mut self, epoch: impl Into<String>) -> Self {
        self.source_date_epoch = Some(epoch.into());
        self
    }

    pub fn with_inline_modules(mut self, inline: bool) -> Self {
        self.inline_modules = inline;
        self
    }
}
