//! Numeric enumerations for types and classes, each constant paired with a typed alias macro.

use rdatagen_core::{Registry, funname};

use super::writer::CodeWriter;

/// Fixed type constants around the discovered ones: `none` leads, the meta types close the list.
const LEADING_TYPES: &[(&str, u16)] = &[("none", 0)];
const TRAILING_TYPES: &[(&str, u16)] = &[
    ("ixfr", 251),
    ("axfr", 252),
    ("mailb", 253),
    ("maila", 254),
    ("any", 255),
];

/// Class numbers that also get a second, differently named constant: `(class, alias, alias value)`.
const CLASS_ALIASES: &[(u16, &str, u16)] = &[(3, "chaos", 3), (255, "none", 254)];

fn is_fixed_type(type_number: u16) -> bool {
    LEADING_TYPES
        .iter()
        .chain(TRAILING_TYPES)
        .any(|(_, n)| *n == type_number)
}

/// `(identifier, number)` for every type constant, in declaration order.
pub fn type_constants(registry: &Registry) -> Vec<(String, u16)> {
    let mut constants: Vec<(String, u16)> = LEADING_TYPES.iter().map(|(name, n)| (name.to_string(), *n)).collect();
    for group in registry.type_groups() {
        let record = group[0];
        if is_fixed_type(record.type_number) {
            tracing::warn!(
                type_number = record.type_number,
                mnemonic = %record.type_mnemonic,
                "type number is reserved for a fixed constant; module name not enumerated"
            );
            continue;
        }
        constants.push((funname(&record.type_mnemonic), record.type_number));
    }
    constants.extend(TRAILING_TYPES.iter().map(|(name, n)| (name.to_string(), *n)));
    constants
}

/// `(identifier, number)` for every class constant after `reserved0`, in declaration order.
pub fn class_constants(registry: &Registry) -> Vec<(String, u16)> {
    let mut constants = Vec::new();
    for class in registry.classes() {
        let own_name = funname(&class.mnemonic);
        let alias = CLASS_ALIASES.iter().find(|(number, _, _)| *number == class.class_number);
        if let Some((_, alias_name, alias_value)) = alias {
            constants.push((alias_name.to_string(), *alias_value));
            if own_name == *alias_name && *alias_value == class.class_number {
                continue;
            }
        }
        constants.push((own_name, class.class_number));
    }
    constants
}

/// Emit the type enumeration header.
pub fn emit_type_enum(out: &mut CodeWriter, registry: &Registry) {
    let constants = type_constants(registry);

    out.line("#ifndef DNS_ENUMTYPE_H");
    out.line("#define DNS_ENUMTYPE_H 1");
    out.blank_line();
    out.line("enum {");
    out.indent();
    let last = constants.len().saturating_sub(1);
    for (i, (name, number)) in constants.iter().enumerate() {
        let comma = if i == last { "" } else { "," };
        out.line(&format!("dns_rdatatype_{name} = {number}{comma}"));
    }
    out.dedent();
    out.line("};");
    out.blank_line();

    for (name, _) in &constants {
        let pad = if name.len() < 2 { "\t" } else { "" };
        out.line(&format!(
            "#define dns_rdatatype_{name}\t{pad}((dns_rdatatype_t)dns_rdatatype_{name})"
        ));
    }

    out.blank_line();
    out.line("#endif /* DNS_ENUMTYPE_H */");
}

/// Emit the class enumeration header.
pub fn emit_class_enum(out: &mut CodeWriter, registry: &Registry) {
    out.line("#ifndef DNS_ENUMCLASS_H");
    out.line("#define DNS_ENUMCLASS_H 1");
    out.blank_line();
    out.line("enum {");

    out.line("\tdns_rdataclass_reserved0 = 0,");
    out.line("#define dns_rdataclass_reserved0 \\");
    out.line("\t\t\t\t((dns_rdataclass_t)dns_rdataclass_reserved0)");

    for (name, number) in class_constants(registry) {
        let comma = if number == 255 { "" } else { "," };
        out.line(&format!("\tdns_rdataclass_{name} = {number}{comma}"));
        out.line(&format!(
            "#define dns_rdataclass_{name}\t((dns_rdataclass_t)dns_rdataclass_{name})"
        ));
    }

    out.line("};");
    out.blank_line();
    out.line("#endif /* DNS_ENUMCLASS_H */");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_variants_collapse_to_one_type_constant() {
        let mut registry = Registry::new();
        registry.register(1, "in", 1, "a", "rdata/in_1").unwrap();
        registry.register(4, "hs", 1, "a", "rdata/hs_4").unwrap();
        registry.register(0, "", 2, "ns", "rdata/generic").unwrap();

        let constants = type_constants(&registry);
        let numbers: Vec<u16> = constants.iter().map(|(_, n)| *n).collect();
        assert_eq!(numbers, vec![0, 1, 2, 251, 252, 253, 254, 255]);
    }

    #[test]
    fn registered_meta_numbers_are_not_repeated() {
        let mut registry = Registry::new();
        registry.register(0, "", 255, "any", "rdata/generic").unwrap();
        let constants = type_constants(&registry);
        assert_eq!(constants.iter().filter(|(_, n)| *n == 255).count(), 1);
    }

    #[test]
    fn chaos_and_none_aliases() {
        let mut registry = Registry::new();
        registry.register(3, "ch", 16, "txt", "rdata/ch_3").unwrap();
        registry.register(255, "any", 250, "tsig", "rdata/any_255").unwrap();
        registry.register(1, "in", 1, "a", "rdata/in_1").unwrap();

        let constants = class_constants(&registry);
        let expected: Vec<(String, u16)> = [("in", 1), ("chaos", 3), ("ch", 3), ("none", 254), ("any", 255)]
            .iter()
            .map(|(name, n)| (name.to_string(), *n))
            .collect();
        assert_eq!(constants, expected);
    }

    #[test]
    fn class_named_chaos_is_declared_once() {
        let mut registry = Registry::new();
        registry.register(3, "chaos", 16, "txt", "rdata/chaos_3").unwrap();
        assert_eq!(class_constants(&registry), vec![("chaos".to_string(), 3)]);
    }

    #[test]
    fn single_letter_alias_gets_an_extra_tab() {
        let mut registry = Registry::new();
        registry.register(1, "in", 1, "a", "rdata/in_1").unwrap();
        let mut out = CodeWriter::new();
        emit_type_enum(&mut out, &registry);
        assert!(out.as_str().contains("#define dns_rdatatype_a\t\t((dns_rdatatype_t)dns_rdatatype_a)\n"));
        assert!(out.as_str().contains("\tdns_rdatatype_any = 255\n};\n"));
    }
}
