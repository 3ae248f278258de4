//! Module feed: where registry input comes from.
//!
//! A feed yields one [`DiscoveredModule`] per implementation module. The registry does not care how they were
//! found; [`DirectoryFeed`] implements the on-disk naming convention, and tests feed slices directly.

pub mod directory;

use miette::Diagnostic;
use thiserror::Error;

pub use directory::DirectoryFeed;

/// Errors raised while discovering modules.
#[derive(Debug, Error, Diagnostic)]
pub enum FeedError {
    #[error("source root \"{root}\" is too long ({len} bytes, max {max})")]
    #[diagnostic(code(rdatagen::feed::source_root_too_long))]
    SourceRootTooLong { root: String, len: usize, max: usize },

    #[error("cannot read module directory {path}")]
    #[diagnostic(
        code(rdatagen::feed::read_dir),
        help("pass the directory containing `rdata/` with --source-root")
    )]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One implementation module found by a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredModule {
    /// `0` for a generic module
    pub class_number: u16,
    /// Empty for a generic module
    pub class_mnemonic: String,
    pub type_number: u16,
    pub type_mnemonic: String,
    /// Directory holding the module file
    pub location: String,
}

impl DiscoveredModule {
    /// A module that applies regardless of class.
    pub fn generic(type_number: u16, type_mnemonic: &str, location: &str) -> Self {
        Self {
            class_number: 0,
            class_mnemonic: String::new(),
            type_number,
            type_mnemonic: type_mnemonic.to_string(),
            location: location.to_string(),
        }
    }

    /// A module implementing a type for one class only.
    pub fn for_class(
        class_number: u16,
        class_mnemonic: &str,
        type_number: u16,
        type_mnemonic: &str,
        location: &str,
    ) -> Self {
        Self {
            class_number,
            class_mnemonic: class_mnemonic.to_string(),
            type_number,
            type_mnemonic: type_mnemonic.to_string(),
            location: location.to_string(),
        }
    }
}

/// Source of discovered modules, in discovery order.
pub trait ModuleFeed {
    fn modules(&self) -> Result<Vec<DiscoveredModule>, FeedError>;
}

impl ModuleFeed for [DiscoveredModule] {
    fn modules(&self) -> Result<Vec<DiscoveredModule>, FeedError> {
        Ok(self.to_vec())
    }
}

impl ModuleFeed for Vec<DiscoveredModule> {
    fn modules(&self) -> Result<Vec<DiscoveredModule>, FeedError> {
        Ok(self.clone())
    }
}
