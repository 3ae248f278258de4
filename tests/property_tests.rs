//! Property-based tests for the generator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated module sets, catching edge cases that hand-written tests might miss.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rdatagen::emit::banner::{FALLBACK_YEAR, banner_year};
use rdatagen::emit::dispatch::{DISPATCH_OPS, emit_dispatch};
use rdatagen::emit::{CodeWriter, LookupOutcome, MnemonicHashTable};
use rdatagen_core::{Registry, TypeCatalog};

const CLASSES: &[(u16, &str)] = &[(0, ""), (1, "in"), (3, "ch"), (4, "hs")];

/// A set of distinct `(type, class index)` registrations.
fn registrations() -> impl Strategy<Value = BTreeSet<(u16, usize)>> {
    prop::collection::btree_set((1u16..80, 0..CLASSES.len()), 0..40)
}

fn registry_from(set: &BTreeSet<(u16, usize)>) -> Registry {
    let mut registry = Registry::new();
    for (type_number, class_index) in set {
        let (class_number, class_mnemonic) = CLASSES[*class_index];
        let location = if class_number == 0 {
            "rdata/generic".to_string()
        } else {
            format!("rdata/{class_mnemonic}_{class_number}")
        };
        registry
            .register(class_number, class_mnemonic, *type_number, &format!("t{type_number}"), &location)
            .unwrap();
    }
    registry
}

proptest! {
    /// Property: every template has exactly one outer arm per type and one default arm
    #[test]
    fn dispatch_has_one_outer_arm_per_type(set in registrations()) {
        let registry = registry_from(&set);
        let types: BTreeSet<u16> = set.iter().map(|(t, _)| *t).collect();

        for op in DISPATCH_OPS {
            let mut out = CodeWriter::new();
            emit_dispatch(&mut out, op, &registry);
            let text = out.finish();
            if types.is_empty() {
                prop_assert!(!text.contains("switch"));
                continue;
            }
            let outer: Vec<u16> = text
                .lines()
                .filter_map(|line| line.strip_prefix("\tcase "))
                .map(|rest| rest.split(':').next().unwrap().parse().unwrap())
                .collect();
            prop_assert_eq!(outer, types.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(text.lines().filter(|line| line.starts_with("\tdefault:")).count(), 1);
        }
    }

    /// Property: the generated lookup finds every catalog name, whatever its case
    #[test]
    fn hash_table_resolves_every_name(names in prop::collection::btree_map(1u16..2000, "[a-z][-0-9a-z]{0,19}", 1..60)) {
        let mut catalog = TypeCatalog::new();
        let mut seen = BTreeSet::new();
        for (type_number, name) in &names {
            if seen.insert(name.clone()) {
                catalog.register_type(*type_number, name, None).unwrap();
            }
        }
        let table = MnemonicHashTable::build(&catalog).unwrap();

        for entry in catalog.entries() {
            prop_assert_eq!(
                table.resolve(&entry.mnemonic().to_ascii_uppercase()),
                Some(LookupOutcome::Resolved(entry.type_number()))
            );
        }
        let hashes: BTreeSet<u8> = table.buckets().iter().map(|b| b.hash).collect();
        prop_assert_eq!(hashes.len(), table.buckets().len(), "one bucket per hash value");
    }

    /// Property: any digit string within range yields a trusted year or the fallback
    #[test]
    fn banner_year_is_trusted_or_fallback(seconds in 0i64..=i64::MAX) {
        let year = banner_year(Some(&seconds.to_string())).unwrap();
        prop_assert!(year == FALLBACK_YEAR || year > 2004);
    }
}
