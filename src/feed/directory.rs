//! Filesystem module feed
//!
//! Layout under the source root:
//!
//! ```text
//! rdata/
//!   generic/            class-independent modules
//!     ns_2.c
//!   in_1/               modules for class 1 ("in")
//!     a_1.c
//!     a_1.h
//! ```
//!
//! Directory and file stems must read `<mnemonic>_<number>` exactly: mnemonic `[-0-9a-z]{1,20}`, number a
//! canonical decimal in `0..=65535`. Anything else is ignored.

use std::fs;
use std::path::Path;

use rdatagen_core::limits::{MNEMONIC_MAX_LEN, SOURCE_ROOT_MAX_LEN};

use super::{DiscoveredModule, FeedError, ModuleFeed};

/// Feed that walks `<source root>/rdata`.
#[derive(Debug, Clone)]
pub struct DirectoryFeed {
    /// Source root rendered with a trailing `/`, or empty for the working directory
    prefix: String,
    /// Module file extension to look for
    kind: char,
}

impl DirectoryFeed {
    /// Create a feed for `source_root` looking for `<stem>.<kind>` files.
    ///
    /// ## Errors
    /// - [`FeedError::SourceRootTooLong`] if the root leaves no room for composed module paths.
    pub fn new(source_root: Option<&Path>, kind: char) -> Result<Self, FeedError> {
        let prefix = match source_root {
            Some(root) => {
                let root = root.to_string_lossy();
                let len = root.len();
                if len > SOURCE_ROOT_MAX_LEN {
                    return Err(FeedError::SourceRootTooLong {
                        root: root.into_owned(),
                        len,
                        max: SOURCE_ROOT_MAX_LEN,
                    });
                }
                format!("{root}/")
            }
            None => String::new(),
        };
        Ok(Self { prefix, kind })
    }

    fn rdata_dir(&self) -> String {
        format!("{}rdata", self.prefix)
    }

    /// Collect the modules of one directory, skipping it quietly when it cannot be listed.
    fn scan_directory(&self, dir: &str, class_number: u16, class_mnemonic: &str, out: &mut Vec<DiscoveredModule>) {
        let names = match sorted_entries(Path::new(dir)) {
            Ok(names) => names,
            Err(e) => {
                tracing::debug!(dir, error = %e, "skipping unreadable module directory");
                return;
            }
        };

        let suffix = format!(".{}", self.kind);
        for name in names {
            let Some((type_mnemonic, type_number)) = name.strip_suffix(&suffix).and_then(parse_stem) else {
                tracing::debug!(dir, name, "ignoring non-module file");
                continue;
            };
            out.push(DiscoveredModule {
                class_number,
                class_mnemonic: class_mnemonic.to_string(),
                type_number,
                type_mnemonic: type_mnemonic.to_string(),
                location: dir.to_string(),
            });
        }
    }
}

impl ModuleFeed for DirectoryFeed {
    /// Class directories in name order, then `rdata/generic`.
    fn modules(&self) -> Result<Vec<DiscoveredModule>, FeedError> {
        let rdata = self.rdata_dir();
        let names = sorted_entries(Path::new(&rdata)).map_err(|source| FeedError::ReadDir {
            path: rdata.clone(),
            source,
        })?;

        let mut modules = Vec::new();
        for name in names {
            let Some((class_mnemonic, class_number)) = parse_stem(&name) else {
                continue;
            };
            let dir = format!("{rdata}/{name}");
            if !Path::new(&dir).is_dir() {
                continue;
            }
            self.scan_directory(&dir, class_number, class_mnemonic, &mut modules);
        }
        self.scan_directory(&format!("{rdata}/generic"), 0, "", &mut modules);

        tracing::info!(count = modules.len(), kind = %self.kind, "discovered modules");
        Ok(modules)
    }
}

/// Entry names of `dir`, sorted; names that are not UTF-8 cannot match the grammar and are dropped.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        if let Ok(name) = entry?.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Split `<mnemonic>_<number>`; `None` unless the stem re-renders identically.
pub fn parse_stem(stem: &str) -> Option<(&str, u16)> {
    let (mnemonic, digits) = stem.split_once('_')?;
    let valid_mnemonic = !mnemonic.is_empty()
        && mnemonic.len() <= MNEMONIC_MAX_LEN
        && mnemonic
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid_mnemonic {
        return None;
    }
    let number: u16 = digits.parse().ok()?;
    (number.to_string() == digits).then_some((mnemonic, number))
}
