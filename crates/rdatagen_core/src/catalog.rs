//! The type name catalog: one identity record per type number.
//!
//! Several modules may implement the same type for different classes; the catalog is where their mnemonic and
//! attribute expression are forced to agree. Every emitter that talks about *types* (rather than modules) reads
//! from here.
//!
//! ## Notes
//! - Entries are keyed by type number in a `BTreeMap`, so iteration is always ascending.
//! - Capacity is bounded ([`CATALOG_CAPACITY`] by default); running out is a fatal error.
//! - [`PSEUDO_TYPES`] are seeded before emission so hashing and accessors cover them like real types.

use std::collections::BTreeMap;

use crate::errors::RegistryError;
use crate::limits::{ATTRIBUTE_MAX_LEN, CATALOG_CAPACITY, MNEMONIC_MAX_LEN, RESERVED_ATTRIBUTE};
use crate::mnemonic::{default_attributes, mnemonic_hash};

/// Attribute expression for meta types that may only appear in questions.
pub const META_QUESTION_ONLY: &str = "DNS_RDATATYPEATTR_META | DNS_RDATATYPEATTR_QUESTIONONLY";

/// Attribute expression for legacy types that keep their name but carry no behaviour.
pub const RESERVED_NAME: &str = "0";

/// A synthetic type with no backing module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoType {
    pub type_number: u16,
    pub mnemonic: &'static str,
    pub attributes: &'static str,
}

/// Reserved and meta types seeded into the catalog before emission.
pub const PSEUDO_TYPES: &[PseudoType] = &[
    PseudoType { type_number: 0, mnemonic: "reserved0", attributes: RESERVED_ATTRIBUTE },
    PseudoType { type_number: 100, mnemonic: "uinfo", attributes: RESERVED_NAME },
    PseudoType { type_number: 101, mnemonic: "uid", attributes: RESERVED_NAME },
    PseudoType { type_number: 102, mnemonic: "gid", attributes: RESERVED_NAME },
    PseudoType { type_number: 251, mnemonic: "ixfr", attributes: META_QUESTION_ONLY },
    PseudoType { type_number: 252, mnemonic: "axfr", attributes: META_QUESTION_ONLY },
    PseudoType { type_number: 253, mnemonic: "mailb", attributes: META_QUESTION_ONLY },
    PseudoType { type_number: 254, mnemonic: "maila", attributes: META_QUESTION_ONLY },
    PseudoType { type_number: 255, mnemonic: "any", attributes: META_QUESTION_ONLY },
];

/// Identity of one type number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    type_number: u16,
    mnemonic: String,
    attributes: String,
}

impl CatalogEntry {
    pub fn type_number(&self) -> u16 {
        self.type_number
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    /// Whether a text lookup that lands on this type must report "not implemented".
    pub fn is_reserved(&self) -> bool {
        self.attributes.contains(RESERVED_ATTRIBUTE)
    }
}

/// Catalog entries sharing one [`mnemonic_hash`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashBucket<'a> {
    pub hash: u8,
    /// Ascending by type number; the first entry is the one the bucket is attributed to.
    pub entries: Vec<&'a CatalogEntry>,
}

/// The type name catalog.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    entries: BTreeMap<u16, CatalogEntry>,
    capacity: usize,
    max_type: Option<u16>,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::with_capacity(CATALOG_CAPACITY)
    }
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding at most `capacity` distinct type numbers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity,
            max_type: None,
        }
    }

    /// Record the identity of `type_number`.
    ///
    /// ## Parameters
    /// - `attributes`: explicit attribute expression; `None` derives `RRTYPE_<MNEMONIC>_ATTRIBUTES`.
    ///
    /// ## Errors
    /// - [`RegistryError::TypeNameConflict`] / [`RegistryError::AttributeConflict`] when the type is already
    ///   known under a different mnemonic or attribute expression.
    /// - [`RegistryError::CatalogFull`] when a new type number does not fit.
    /// - Length errors for the mnemonic or attribute expression.
    ///
    /// Re-registering identical values is a no-op apart from `max_type`.
    pub fn register_type(
        &mut self,
        type_number: u16,
        mnemonic: &str,
        attributes: Option<&str>,
    ) -> Result<(), RegistryError> {
        if mnemonic.len() > MNEMONIC_MAX_LEN {
            return Err(RegistryError::MnemonicTooLong {
                mnemonic: mnemonic.to_string(),
                len: mnemonic.len(),
                max: MNEMONIC_MAX_LEN,
            });
        }

        let attributes = match attributes {
            Some(attr) => attr.to_string(),
            None => default_attributes(mnemonic),
        };

        if let Some(existing) = self.entries.get(&type_number) {
            if existing.mnemonic != mnemonic {
                return Err(RegistryError::TypeNameConflict {
                    type_number,
                    existing: existing.mnemonic.clone(),
                    conflicting: mnemonic.to_string(),
                });
            }
            if existing.attributes != attributes {
                return Err(RegistryError::AttributeConflict {
                    type_number,
                    existing: existing.attributes.clone(),
                    conflicting: attributes,
                });
            }
        } else {
            if self.entries.len() >= self.capacity {
                return Err(RegistryError::CatalogFull {
                    capacity: self.capacity,
                    type_number,
                });
            }
            if attributes.len() > ATTRIBUTE_MAX_LEN {
                return Err(RegistryError::AttributeTooLong {
                    attributes,
                    mnemonic: mnemonic.to_string(),
                    max: ATTRIBUTE_MAX_LEN,
                });
            }
            self.entries.insert(
                type_number,
                CatalogEntry {
                    type_number,
                    mnemonic: mnemonic.to_string(),
                    attributes,
                },
            );
        }

        self.max_type = self.max_type.max(Some(type_number));
        Ok(())
    }

    /// Seed every entry of [`PSEUDO_TYPES`].
    pub fn seed_pseudo_types(&mut self) -> Result<(), RegistryError> {
        for pseudo in PSEUDO_TYPES {
            self.register_type(pseudo.type_number, pseudo.mnemonic, Some(pseudo.attributes))?;
        }
        tracing::debug!(count = PSEUDO_TYPES.len(), "seeded pseudo types");
        Ok(())
    }

    pub fn lookup(&self, type_number: u16) -> Option<&CatalogEntry> {
        self.entries.get(&type_number)
    }

    /// Entries in ascending type number order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Highest type number ever registered, `None` before the first registration.
    pub fn max_type(&self) -> Option<u16> {
        self.max_type
    }

    /// Group entries by mnemonic hash.
    ///
    /// Buckets come out in the order their lowest-numbered member is met while walking the catalog in ascending
    /// type order, and each bucket lists its members in ascending type order. The generated lookup depends on
    /// this order staying fixed.
    ///
    /// ## Errors
    /// - [`RegistryError::EmptyMnemonic`] if any entry has an empty mnemonic.
    pub fn hash_buckets(&self) -> Result<Vec<HashBucket<'_>>, RegistryError> {
        let mut buckets: Vec<HashBucket<'_>> = Vec::new();
        let mut index_of: BTreeMap<u8, usize> = BTreeMap::new();

        for entry in self.entries.values() {
            let hash = mnemonic_hash(&entry.mnemonic)?;
            match index_of.get(&hash) {
                Some(&idx) => buckets[idx].entries.push(entry),
                None => {
                    index_of.insert(hash, buckets.len());
                    buckets.push(HashBucket {
                        hash,
                        entries: vec![entry],
                    });
                }
            }
        }

        Ok(buckets)
    }
}
