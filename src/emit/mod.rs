//! Artifact rendering
//!
//! Each `render_*` function turns a finished [`Registry`] into the complete text of one artifact. Nothing here
//! touches the filesystem: module texts that get pasted into an artifact are read by the caller and passed in.

pub mod accessors;
pub mod banner;
pub mod dispatch;
pub mod enums;
pub mod hash_table;
pub mod writer;

use rdatagen_core::{Registry, RegistryError};

pub use hash_table::{LookupOutcome, MnemonicHashTable};
pub use writer::CodeWriter;

/// How the code artifact brings in each module's implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleInclusion {
    /// One `#include "<location>/<mnemonic>_<type>.c"` per module.
    Include,
    /// Module texts pasted in Type Table order, one per record.
    Inline(Vec<String>),
}

/// Render the full code artifact: guard, modules, dispatch templates, hash lookup and accessors.
///
/// The registry should already carry the pseudo-types (see [`Registry::seed_pseudo_types`]).
///
/// ## Errors
/// - [`RegistryError::EmptyMnemonic`] if a catalog mnemonic cannot be hashed.
pub fn render_code(registry: &Registry, year: i32, modules: &ModuleInclusion) -> Result<String, RegistryError> {
    let table = MnemonicHashTable::build(registry.catalog())?;

    let mut out = CodeWriter::new();
    banner::emit_banner(&mut out, year);

    out.line("#ifndef DNS_CODE_H");
    out.line("#define DNS_CODE_H 1");
    out.blank_line();
    out.line("#include <stdbool.h>");
    out.line("#include <isc/result.h>");
    out.blank_line();
    out.line("#include <dns/name.h>");
    out.blank_line();

    match modules {
        ModuleInclusion::Include => {
            for record in registry.types() {
                out.line(&format!("#include \"{}\"", record.module_path('c')));
            }
        }
        ModuleInclusion::Inline(texts) => {
            for text in texts {
                out.raw(text);
                if !text.is_empty() && !text.ends_with('\n') {
                    out.blank_line();
                }
            }
        }
    }
    out.blank_line();
    out.blank_line();

    dispatch::emit_all(&mut out, registry);
    out.blank_line();

    table.emit(&mut out);
    accessors::emit_attribute_accessor(&mut out, registry.catalog());
    accessors::emit_mnemonic_accessor(&mut out, registry.catalog());

    out.line("#endif /* DNS_CODE_H */");
    Ok(out.finish())
}

/// Render the type enumeration header.
pub fn render_type_enum(registry: &Registry, year: i32) -> String {
    let mut out = CodeWriter::new();
    banner::emit_banner(&mut out, year);
    enums::emit_type_enum(&mut out, registry);
    out.finish()
}

/// Render the class enumeration header.
pub fn render_class_enum(registry: &Registry, year: i32) -> String {
    let mut out = CodeWriter::new();
    banner::emit_banner(&mut out, year);
    enums::emit_class_enum(&mut out, registry);
    out.finish()
}

/// Concatenate struct headers, bracketed by the optional prefix and suffix texts.
pub fn render_structs(prefix: Option<&str>, headers: &[String], suffix: Option<&str>) -> String {
    let mut out = String::new();
    out.extend(prefix);
    for header in headers {
        out.push_str(header);
    }
    out.extend(suffix);
    out
}

/// One `<target>:\t<struct header>` make dependency per Type Table record.
pub fn render_depend(registry: &Registry, target: &str) -> String {
    registry
        .types()
        .map(|record| format!("{target}:\t{}\n", record.module_path('h')))
        .collect()
}
