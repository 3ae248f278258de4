//! Per-type accessors generated from the catalog: attribute flags and the printable mnemonic.

use rdatagen_core::limits::INTERNAL_ONLY_TYPE;
use rdatagen_core::{TypeCatalog, upper};

use super::writer::CodeWriter;

/// Emit `RDATATYPE_ATTRIBUTE_SW`: one `case` per catalog entry returning its attribute expression.
pub fn emit_attribute_accessor(out: &mut CodeWriter, catalog: &TypeCatalog) {
    out.begin_macro("RDATATYPE_ATTRIBUTE_SW");
    out.indent();
    out.line("switch (type) {");
    for entry in catalog.entries() {
        out.line(&format!(
            "case {}: return ({});",
            entry.type_number(),
            upper(entry.attributes())
        ));
    }
    out.end_macro("}");
}

/// Emit `RDATATYPE_TOTEXT_SW`: one `case` per catalog entry returning its upper-case mnemonic.
///
/// The internal-only type is left out so tools print it as `TYPE65533` rather than under the name of the type
/// whose storage it borrows.
pub fn emit_mnemonic_accessor(out: &mut CodeWriter, catalog: &TypeCatalog) {
    out.begin_macro("RDATATYPE_TOTEXT_SW");
    out.indent();
    out.line("switch (type) {");
    for entry in catalog.entries().filter(|e| e.type_number() != INTERNAL_ONLY_TYPE) {
        out.line(&format!(
            "case {}: return (str_totext(\"{}\", target));",
            entry.type_number(),
            upper(entry.mnemonic())
        ));
    }
    out.end_macro("}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        catalog.register_type(1, "a", None).unwrap();
        catalog.register_type(65533, "keydata", None).unwrap();
        catalog.seed_pseudo_types().unwrap();
        catalog
    }

    #[test]
    fn attribute_accessor_covers_every_entry() {
        let mut out = CodeWriter::new();
        emit_attribute_accessor(&mut out, &catalog());
        let text = out.finish();
        assert!(text.starts_with("#define RDATATYPE_ATTRIBUTE_SW \\\n\tswitch (type) { \\\n"));
        assert!(text.contains("\tcase 0: return (DNS_RDATATYPEATTR_RESERVED); \\\n"));
        assert!(text.contains("\tcase 1: return (RRTYPE_A_ATTRIBUTES); \\\n"));
        assert!(text.contains("\tcase 101: return (0); \\\n"));
        assert!(text.contains("\tcase 65533: return (RRTYPE_KEYDATA_ATTRIBUTES); \\\n"));
        assert!(text.ends_with("\t}\n"));
    }

    #[test]
    fn mnemonic_accessor_hides_internal_type() {
        let mut out = CodeWriter::new();
        emit_mnemonic_accessor(&mut out, &catalog());
        let text = out.finish();
        assert!(text.contains("\tcase 1: return (str_totext(\"A\", target)); \\\n"));
        assert!(text.contains("\tcase 255: return (str_totext(\"ANY\", target)); \\\n"));
        assert!(!text.contains("65533"));
        assert!(!text.contains("KEYDATA"));
    }
}
