//! Generation pipeline
//!
//! One run: collect modules from a [`ModuleFeed`], build the [`Registry`], pick the banner year, render the
//! selected artifact into memory. The caller decides where the text goes; nothing is written on failure.

use std::fs;
use std::path::Path;

use rdatagen_core::Registry;

use crate::config::{GeneratorConfig, OutputMode};
use crate::emit::{self, ModuleInclusion, banner};
use crate::errors::GenerateError;
use crate::feed::ModuleFeed;

/// Register every module of `feed`, in feed order.
///
/// With `seed_pseudo_types` the reserved and meta types enter the catalog first, so a module that disagrees with
/// one of them on the mnemonic is rejected like any other name conflict.
///
/// ## Errors
/// - [`GenerateError::Feed`] if discovery fails.
/// - [`GenerateError::Registry`] on the first module that breaks a registry rule.
pub fn build_registry(feed: &dyn ModuleFeed, seed_pseudo_types: bool) -> Result<Registry, GenerateError> {
    let mut registry = Registry::new();
    if seed_pseudo_types {
        registry.seed_pseudo_types()?;
    }
    for module in feed.modules()? {
        registry.register(
            module.class_number,
            &module.class_mnemonic,
            module.type_number,
            &module.type_mnemonic,
            &module.location,
        )?;
    }
    tracing::info!(
        records = registry.len(),
        types = registry.catalog().len(),
        classes = registry.classes().count(),
        "registry built"
    );
    Ok(registry)
}

/// Run one generation and return the artifact text.
///
/// `SOURCE_DATE_EPOCH` is validated even in modes without a banner, so a bad value never goes unnoticed.
pub fn generate(config: &GeneratorConfig, feed: &dyn ModuleFeed) -> Result<String, GenerateError> {
    let year = banner::banner_year(config.source_date_epoch.as_deref())?;

    if config.mode == OutputMode::Depend && config.depend_target.is_none() {
        return Err(GenerateError::MissingDependTarget);
    }

    let registry = build_registry(feed, config.mode == OutputMode::Code)?;

    let text = match config.mode {
        OutputMode::Code => {
            let modules = if config.inline_modules {
                ModuleInclusion::Inline(read_modules(&registry)?)
            } else {
                ModuleInclusion::Include
            };
            emit::render_code(&registry, year, &modules)?
        }
        OutputMode::TypeEnum => emit::render_type_enum(&registry, year),
        OutputMode::ClassEnum => emit::render_class_enum(&registry, year),
        OutputMode::Structs => {
            let prefix = config.prefix.as_deref().and_then(read_optional);
            let headers: Vec<String> = registry
                .types()
                .filter_map(|record| read_optional(Path::new(&record.module_path('h'))))
                .collect();
            let suffix = config.suffix.as_deref().and_then(read_optional);
            emit::render_structs(prefix.as_deref(), &headers, suffix.as_deref())
        }
        OutputMode::Depend => {
            let target = config.depend_target.as_deref().ok_or(GenerateError::MissingDependTarget)?;
            emit::render_depend(&registry, target)
        }
    };

    tracing::debug!(mode = ?config.mode, bytes = text.len(), "artifact rendered");
    Ok(text)
}

/// Implementation sources in Type Table order; every one must be readable.
fn read_modules(registry: &Registry) -> Result<Vec<String>, GenerateError> {
    registry
        .types()
        .map(|record| {
            let path = record.module_path('c');
            fs::read_to_string(&path).map_err(|source| GenerateError::ModuleSource { path, source })
        })
        .collect()
}

/// Contents of a file that may legitimately be absent.
fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DiscoveredModule;
    use rdatagen_core::RegistryError;

    fn config(mode: OutputMode) -> GeneratorConfig {
        GeneratorConfig::new().with_mode(mode).with_source_date_epoch("0")
    }

    #[test]
    fn code_mode_seeds_pseudo_types() {
        let feed = vec![DiscoveredModule::generic(2, "ns", "rdata/generic")];
        let text = generate(&config(OutputMode::Code), &feed).unwrap();
        assert!(text.contains("case 255: return (str_totext(\"ANY\", target));"));
        assert!(text.contains("#include \"rdata/generic/ns_2.c\""));
    }

    #[test]
    fn enum_modes_do_not_seed() {
        let registry = build_registry(&vec![DiscoveredModule::generic(2, "ns", "rdata/generic")], false).unwrap();
        assert_eq!(registry.catalog().len(), 1);
    }

    #[test]
    fn pseudo_type_name_clash_is_fatal_in_code_mode() {
        let feed = vec![DiscoveredModule::generic(255, "all", "rdata/generic")];
        let err = generate(&config(OutputMode::Code), &feed).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Registry(RegistryError::TypeNameConflict { type_number: 255, .. })
        ));
    }

    #[test]
    fn bad_epoch_fails_every_mode() {
        let feed: Vec<DiscoveredModule> = Vec::new();
        let config = GeneratorConfig::new()
            .with_mode(OutputMode::Depend)
            .with_depend_target("code.h")
            .with_source_date_epoch("12x");
        assert!(matches!(generate(&config, &feed), Err(GenerateError::Epoch(_))));
    }

    #[test]
    fn depend_needs_a_target() {
        let feed: Vec<DiscoveredModule> = Vec::new();
        let err = generate(&config(OutputMode::Depend), &feed).unwrap_err();
        assert!(matches!(err, GenerateError::MissingDependTarget));
    }

    #[test]
    fn missing_inline_module_is_fatal() {
        let feed = vec![DiscoveredModule::generic(2, "ns", "/nonexistent/rdata/generic")];
        let err = generate(&config(OutputMode::Code).with_inline_modules(true), &feed).unwrap_err();
        match err {
            GenerateError::ModuleSource { path, .. } => assert_eq!(path, "/nonexistent/rdata/generic/ns_2.c"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_struct_headers_are_skipped() {
        let feed = vec![DiscoveredModule::generic(2, "ns", "/nonexistent/rdata/generic")];
        let text = generate(&config(OutputMode::Structs), &feed).unwrap();
        assert_eq!(text, "");
    }
}
