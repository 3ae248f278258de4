//! Define the errors raised while building the registry.
//!
//! Every variant is fatal for a generation run. Messages name the conflicting values so the offending module
//! can be found without re-running under a debugger.

use miette::Diagnostic;
use thiserror::Error;

/// Error raised by [`crate::Registry`] and [`crate::TypeCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("type {type_number} has two names: {existing}, {conflicting}")]
    #[diagnostic(
        code(rdatagen::registry::type_name_conflict),
        help("every module implementing a type number must use the same mnemonic, whatever its class")
    )]
    TypeNameConflict {
        type_number: u16,
        existing: String,
        conflicting: String,
    },

    #[error("type {type_number} has different attributes: {existing}, {conflicting}")]
    #[diagnostic(code(rdatagen::registry::attribute_conflict))]
    AttributeConflict {
        type_number: u16,
        existing: String,
        conflicting: String,
    },

    #[error("type {type_number} ({mnemonic}) is registered twice for class {class_number}")]
    #[diagnostic(
        code(rdatagen::registry::duplicate_type),
        help("remove one of the two modules; a type may have one module per class")
    )]
    DuplicateType {
        type_number: u16,
        class_number: u16,
        mnemonic: String,
    },

    #[error("type name catalog is full ({capacity} entries), cannot add type {type_number}")]
    #[diagnostic(code(rdatagen::registry::catalog_full))]
    CatalogFull { capacity: usize, type_number: u16 },

    #[error("mnemonic \"{mnemonic}\" is too long ({len} bytes, max {max})")]
    #[diagnostic(code(rdatagen::registry::mnemonic_too_long))]
    MnemonicTooLong { mnemonic: String, len: usize, max: usize },

    #[error("module location \"{location}\" is too long ({len} bytes, max {max})")]
    #[diagnostic(code(rdatagen::registry::location_too_long))]
    LocationTooLong { location: String, len: usize, max: usize },

    #[error("attributes ({attributes}) [name {mnemonic}] are too long (max {max} bytes)")]
    #[diagnostic(code(rdatagen::registry::attribute_too_long))]
    AttributeTooLong {
        attributes: String,
        mnemonic: String,
        max: usize,
    },

    #[error("cannot hash an empty mnemonic")]
    #[diagnostic(code(rdatagen::registry::empty_mnemonic))]
    EmptyMnemonic,
}
