//! Provide the pure registry model behind the rdata dispatch generator.
//!
//! The generator discovers one implementation module per resource-record type (and optionally per class),
//! records the `(type, class, mnemonic)` facts here, and then hands the finished [`Registry`] to the emitters.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state. Module discovery and text emission live in the
//!   `rdatagen` crate.
//! - Every invariant violation is reported as a [`RegistryError`]; there is no partial-success path.
//!
//! ## Examples
//! ```rust
//! use rdatagen_core::Registry;
//!
//! let mut registry = Registry::new();
//! registry.register(0, "", 2, "ns", "rdata/generic").unwrap();
//! registry.register(1, "in", 1, "a", "rdata/in_1").unwrap();
//!
//! assert_eq!(registry.max_type(), Some(2));
//! assert_eq!(registry.catalog().lookup(1).unwrap().attributes(), "RRTYPE_A_ATTRIBUTES");
//! ```

pub mod catalog;
pub mod errors;
pub mod limits;
pub mod mnemonic;
pub mod registry;

pub use catalog::{CatalogEntry, HashBucket, PseudoType, TypeCatalog, PSEUDO_TYPES};
pub use errors::RegistryError;
pub use mnemonic::{funname, mnemonic_hash, upper};
pub use registry::{ClassRecord, Registry, TypeRecord};
