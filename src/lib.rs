#![forbid(unsafe_code)]
//! rdata code generator
//!
//! Reads the per-type (and per-class) rdata implementation modules of a DNS library from their directory tree and
//! generates the C glue around them: dispatch templates routing each rdata operation to its implementation, a
//! hashed mnemonic lookup, type and class enumerations, and per-type attribute and mnemonic accessors.
//!
//! The registry itself lives in [`rdatagen_core`]; this crate adds module discovery, rendering and the CLI.
//!
//! ## Example
//!
//! ```rust
//! use rdatagen::config::{GeneratorConfig, OutputMode};
//! use rdatagen::feed::DiscoveredModule;
//! use rdatagen::generate::generate;
//!
//! let feed = vec![
//!     DiscoveredModule::for_class(1, "in", 1, "a", "rdata/in_1"),
//!     DiscoveredModule::generic(2, "ns", "rdata/generic"),
//! ];
//! let config = GeneratorConfig::new().with_mode(OutputMode::Depend).with_depend_target("code.h");
//! let text = generate(&config, &feed).unwrap();
//! assert_eq!(text, "code.h:\trdata/in_1/a_1.h\ncode.h:\trdata/generic/ns_2.h\n");
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod emit;
pub mod errors;
pub mod feed;
pub mod generate;
pub mod version;

pub use config::{GeneratorConfig, OutputMode};
pub use emit::{LookupOutcome, MnemonicHashTable, ModuleInclusion};
pub use errors::GenerateError;
pub use feed::{DirectoryFeed, DiscoveredModule, ModuleFeed};
pub use generate::{build_registry, generate};
