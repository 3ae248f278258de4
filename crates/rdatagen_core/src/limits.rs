//! Fixed bounds shared by the registry and the module feed.
//!
//! These mirror the sizes of the artifacts the consuming build expects; exceeding any of them is a fatal
//! generation error rather than something to truncate.

/// Longest accepted type or class mnemonic.
pub const MNEMONIC_MAX_LEN: usize = 20;

/// Longest accepted module location (directory path).
pub const LOCATION_MAX_LEN: usize = 993;

/// Longest accepted attribute expression.
pub const ATTRIBUTE_MAX_LEN: usize = 255;

/// Number of distinct type numbers the catalog can hold, pseudo-types included.
pub const CATALOG_CAPACITY: usize = 256;

/// Longest accepted source root. Leaves room for `/rdata/<class>_<n>/<type>_<n>.<kind>`.
pub const SOURCE_ROOT_MAX_LEN: usize = 1024 - 2 * MNEMONIC_MAX_LEN - 20;

/// KEYDATA: internal use only, never advertised by mnemonic.
pub const INTERNAL_ONLY_TYPE: u16 = 65533;

/// Marker inside an attribute expression that flags a type as reserved.
pub const RESERVED_ATTRIBUTE: &str = "DNS_RDATATYPEATTR_RESERVED";
