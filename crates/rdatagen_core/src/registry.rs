//! The registry builder: Type Table, Class Table and catalog.
//!
//! A [`Registry`] is filled once per generation run from the module feed and is read-only afterwards. Each
//! [`Registry::register`] call either leaves every invariant intact or fails without touching the tables:
//!
//! 1. no `(type, class)` pair appears twice;
//! 2. all records of one type share one mnemonic and one attribute expression (via [`TypeCatalog`]);
//! 3. at most one class record per class number (first registration wins);
//! 4. `max_type` is the highest type number registered.

use std::collections::BTreeMap;

use crate::catalog::TypeCatalog;
use crate::errors::RegistryError;
use crate::limits::{LOCATION_MAX_LEN, MNEMONIC_MAX_LEN};

/// A protocol class that owns at least one class-specific module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub class_number: u16,
    pub mnemonic: String,
}

/// One discovered implementation module.
///
/// `class_number == 0` marks a generic module that applies regardless of class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub type_number: u16,
    pub class_number: u16,
    pub class_mnemonic: String,
    pub type_mnemonic: String,
    /// Directory holding the module, without a leading `./`.
    pub location: String,
}

impl TypeRecord {
    pub fn is_generic(&self) -> bool {
        self.class_number == 0
    }

    /// Path of the module file with the given extension (`c` or `h`).
    pub fn module_path(&self, kind: char) -> String {
        format!("{}/{}_{}.{}", self.location, self.type_mnemonic, self.type_number, kind)
    }
}

/// Registry of every discovered module, ordered by `(type, class)`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: BTreeMap<(u16, u16), TypeRecord>,
    classes: BTreeMap<u16, ClassRecord>,
    catalog: TypeCatalog,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose catalog holds at most `capacity` type numbers.
    pub fn with_catalog_capacity(capacity: usize) -> Self {
        Self {
            catalog: TypeCatalog::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Register one module.
    ///
    /// ## Parameters
    /// - `class_number` / `class_mnemonic`: `0` / `""` for a generic module.
    /// - `location`: directory of the module; a leading `./` is dropped.
    ///
    /// ## Errors
    /// - [`RegistryError::MnemonicTooLong`] / [`RegistryError::LocationTooLong`] for oversized inputs.
    /// - [`RegistryError::TypeNameConflict`] when the type is already known under another mnemonic.
    /// - [`RegistryError::DuplicateType`] when `(type_number, class_number)` is already registered.
    /// - [`RegistryError::CatalogFull`] when a new type number does not fit in the catalog.
    pub fn register(
        &mut self,
        class_number: u16,
        class_mnemonic: &str,
        type_number: u16,
        type_mnemonic: &str,
        location: &str,
    ) -> Result<(), RegistryError> {
        for mnemonic in [type_mnemonic, class_mnemonic] {
            if mnemonic.len() > MNEMONIC_MAX_LEN {
                return Err(RegistryError::MnemonicTooLong {
                    mnemonic: mnemonic.to_string(),
                    len: mnemonic.len(),
                    max: MNEMONIC_MAX_LEN,
                });
            }
        }
        let location = location.strip_prefix("./").unwrap_or(location);
        if location.len() > LOCATION_MAX_LEN {
            return Err(RegistryError::LocationTooLong {
                location: location.to_string(),
                len: location.len(),
                max: LOCATION_MAX_LEN,
            });
        }

        // A name conflict is reported ahead of a duplicate; the catalog leaves itself untouched on failure.
        if self.types.contains_key(&(type_number, class_number)) {
            self.catalog.register_type(type_number, type_mnemonic, None)?;
            return Err(RegistryError::DuplicateType {
                type_number,
                class_number,
                mnemonic: type_mnemonic.to_string(),
            });
        }
        self.catalog.register_type(type_number, type_mnemonic, None)?;

        tracing::debug!(
            type_number,
            class_number,
            mnemonic = type_mnemonic,
            location,
            "registered module"
        );
        self.types.insert(
            (type_number, class_number),
            TypeRecord {
                type_number,
                class_number,
                class_mnemonic: class_mnemonic.to_string(),
                type_mnemonic: type_mnemonic.to_string(),
                location: location.to_string(),
            },
        );

        if class_number != 0 {
            self.classes.entry(class_number).or_insert_with(|| ClassRecord {
                class_number,
                mnemonic: class_mnemonic.to_string(),
            });
        }

        Ok(())
    }

    /// Seed the catalog with the reserved and meta pseudo-types.
    pub fn seed_pseudo_types(&mut self) -> Result<(), RegistryError> {
        self.catalog.seed_pseudo_types()
    }

    /// Type Table in ascending `(type, class)` order; the generic record of a type comes first.
    pub fn types(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.values()
    }

    /// Type Table split into runs sharing one type number, in ascending type order.
    pub fn type_groups(&self) -> Vec<Vec<&TypeRecord>> {
        let mut groups: Vec<Vec<&TypeRecord>> = Vec::new();
        for record in self.types.values() {
            if let Some(group) = groups.last_mut().filter(|g| g[0].type_number == record.type_number) {
                group.push(record);
                continue;
            }
            groups.push(vec![record]);
        }
        groups
    }

    /// Class Table in ascending class order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn max_type(&self) -> Option<u16> {
        self.catalog.max_type()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}
