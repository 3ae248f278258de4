//! Text-to-type lookup: a `switch` on the mnemonic hash, then length + case-insensitive comparisons.
//!
//! The table is first built as a value ([`MnemonicHashTable`]) and then rendered. Building it from the catalog
//! fixes the bucket order once: buckets follow their lowest-numbered member, members follow type order.
//! [`MnemonicHashTable::resolve`] answers a lookup exactly like the generated code does.

use rdatagen_core::{RegistryError, TypeCatalog, mnemonic_hash};

use super::writer::CodeWriter;

/// What a generated lookup returns for a matching name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The name resolves to this type.
    Resolved(u16),
    /// The name belongs to a reserved type; the lookup reports "not implemented".
    NotImplemented(u16),
}

/// One guarded comparison inside a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashArm {
    pub mnemonic: String,
    pub type_number: u16,
    pub reserved: bool,
}

impl HashArm {
    fn outcome(&self) -> LookupOutcome {
        if self.reserved {
            LookupOutcome::NotImplemented(self.type_number)
        } else {
            LookupOutcome::Resolved(self.type_number)
        }
    }
}

/// All arms sharing one hash value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub hash: u8,
    pub arms: Vec<HashArm>,
}

/// The mnemonic lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicHashTable {
    buckets: Vec<Bucket>,
}

impl MnemonicHashTable {
    /// Build the table from every catalog entry.
    ///
    /// ## Errors
    /// - [`RegistryError::EmptyMnemonic`] if an entry cannot be hashed.
    pub fn build(catalog: &TypeCatalog) -> Result<Self, RegistryError> {
        let buckets = catalog
            .hash_buckets()?
            .into_iter()
            .map(|bucket| Bucket {
                hash: bucket.hash,
                arms: bucket
                    .entries
                    .iter()
                    .map(|entry| HashArm {
                        mnemonic: entry.mnemonic().to_string(),
                        type_number: entry.type_number(),
                        reserved: entry.is_reserved(),
                    })
                    .collect(),
            })
            .collect();
        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Look `text` up the way the generated switch does.
    pub fn resolve(&self, text: &str) -> Option<LookupOutcome> {
        let hash = mnemonic_hash(text).ok()?;
        let bucket = self.buckets.iter().find(|b| b.hash == hash)?;
        bucket
            .arms
            .iter()
            .find(|arm| arm.mnemonic.len() == text.len() && arm.mnemonic.eq_ignore_ascii_case(text))
            .map(HashArm::outcome)
    }

    /// Emit the comparison helpers and `RDATATYPE_FROMTEXT_SW`.
    pub fn emit(&self, out: &mut CodeWriter) {
        emit_compare_macro(out, "RDATATYPE_COMPARE", &["*(_tp) = _d;", "return (ISC_R_SUCCESS);"]);
        emit_compare_macro(out, "RDATATYPE_COMPARE_RESERVED", &["return (ISC_R_NOTIMPLEMENTED);"]);

        out.begin_macro("RDATATYPE_FROMTEXT_SW(_hash,_typename,_length,_typep)");
        out.indent();
        out.line("switch (_hash) {");
        out.indent();
        for bucket in &self.buckets {
            out.line(&format!("case {}:", bucket.hash));
            out.indent();
            for arm in &bucket.arms {
                let helper = if arm.reserved { "RDATATYPE_COMPARE_RESERVED" } else { "RDATATYPE_COMPARE" };
                out.line(&format!(
                    "{helper}(\"{}\", {}, _typename, _length, _typep);",
                    arm.mnemonic, arm.type_number
                ));
            }
            out.line("break;");
            out.dedent();
        }
        // Hash values nobody uses today still need somewhere to land.
        out.line("default:");
        out.indent();
        out.line("break;");
        out.dedent();
        out.dedent();
        out.end_macro("}");
    }
}

/// `<name>(_s, _d, _tn, _n, _tp)`: run `body` when `_tn`/`_n` spell `_s`, ignoring case.
fn emit_compare_macro(out: &mut CodeWriter, name: &str, body: &[&str]) {
    out.begin_macro(&format!("{name}(_s, _d, _tn, _n, _tp)"));
    out.indent();
    out.line("do {");
    out.indent();
    out.line("if (sizeof(_s) - 1 == _n &&");
    out.line("    strncasecmp(_s,(_tn),(sizeof(_s) - 1)) == 0) {");
    out.indent();
    for stmt in body {
        out.line(stmt);
    }
    out.dedent();
    out.line("}");
    out.dedent();
    out.end_macro("} while (0)");
    out.blank_line();
}
