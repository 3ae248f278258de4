//! End-to-end generation over the checked-in fixture tree
//!
//! `tests/fixtures/lib/dns/rdata` holds a small module tree: generic modules, three class variants of type 1,
//! one class-only type and the internal-only type 65533, plus a few files the feed must ignore.

use std::path::Path;

use rdatagen::config::{GeneratorConfig, OutputMode};
use rdatagen::emit::{LookupOutcome, MnemonicHashTable};
use rdatagen::feed::{DirectoryFeed, ModuleFeed};
use rdatagen::{GenerateError, build_registry, generate};

fn source_root() -> String {
    format!("{}/tests/fixtures/lib/dns", env!("CARGO_MANIFEST_DIR"))
}

fn config(mode: OutputMode) -> GeneratorConfig {
    GeneratorConfig::new()
        .with_mode(mode)
        .with_source_root(source_root())
        .with_source_date_epoch("1700000000")
}

fn run(config: &GeneratorConfig) -> Result<String, GenerateError> {
    let feed = DirectoryFeed::new(config.source_root.as_deref(), config.mode.module_kind())?;
    generate(config, &feed)
}

#[test]
fn test_feed_discovers_modules_in_directory_order() {
    let root = source_root();
    let feed = DirectoryFeed::new(Some(Path::new(&root)), 'c').unwrap();
    let modules = feed.modules().unwrap();
    let found: Vec<(u16, u16, &str)> = modules
        .iter()
        .map(|m| (m.class_number, m.type_number, m.type_mnemonic.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (255, 250, "tsig"),
            (3, 1, "a"),
            (4, 1, "a"),
            (1, 1, "a"),
            (1, 28, "aaaa"),
            (0, 5, "cname"),
            (0, 65533, "keydata"),
            (0, 3, "md"),
            (0, 2, "ns"),
            (0, 16, "txt"),
        ]
    );
    assert!(modules.iter().all(|m| m.location.ends_with(&format!(
        "rdata/{}",
        if m.class_number == 0 {
            "generic".to_string()
        } else {
            format!("{}_{}", m.class_mnemonic, m.class_number)
        }
    ))));
}

#[test]
fn test_code_artifact_dispatch() {
    let text = run(&config(OutputMode::Code)).unwrap();

    assert!(text.starts_with("/*\n * Copyright (C) 1998-2023  Internet Systems Consortium"));
    assert!(text.contains(&format!("#include \"{}/rdata/in_1/a_1.c\"\n", source_root())));
    assert!(text.contains(&format!("#include \"{}/rdata/generic/keydata_65533.c\"\n", source_root())));

    let fromtext_a = concat!(
        "\tcase 1: switch (rdclass) { \\\n",
        "\t\tcase 1: result = fromtext_in_a(rdclass, type, lexer, origin, options, target, callbacks); break; \\\n",
        "\t\tcase 3: result = fromtext_ch_a(rdclass, type, lexer, origin, options, target, callbacks); break; \\\n",
        "\t\tcase 4: result = fromtext_hs_a(rdclass, type, lexer, origin, options, target, callbacks); break; \\\n",
        "\t\tdefault: result = DNS_R_UNKNOWN; break; \\\n",
        "\t\t} \\\n",
        "\t\tbreak; \\\n",
        "\tcase 2: result = fromtext_ns(rdclass, type, lexer, origin, options, target, callbacks); break; \\\n",
    );
    assert!(text.contains(fromtext_a), "{text}");

    // Only one class implements aaaa, yet it still gets a class switch.
    assert!(text.contains(concat!(
        "\tcase 28: switch (rdata->rdclass) { \\\n",
        "\t\tcase 1: result = towire_in_aaaa(rdata, cctx, target); break; \\\n",
    )));
    assert!(text.contains(concat!(
        "\tcase 250: switch (rdata->rdclass) { \\\n",
        "\t\tcase 255: result = totext_any_tsig(rdata, tctx, target); break; \\\n",
    )));
    assert!(text.ends_with("#endif /* DNS_CODE_H */\n"));
}

#[test]
fn test_code_artifact_accessors() {
    let text = run(&config(OutputMode::Code)).unwrap();

    assert!(text.contains("\tcase 0: return (DNS_RDATATYPEATTR_RESERVED); \\\n"));
    assert!(text.contains("\tcase 16: return (RRTYPE_TXT_ATTRIBUTES); \\\n"));
    assert!(text.contains("\tcase 65533: return (RRTYPE_KEYDATA_ATTRIBUTES); \\\n"));
    assert!(text.contains("\tcase 28: return (str_totext(\"AAAA\", target)); \\\n"));
    assert!(!text.contains("str_totext(\"KEYDATA\""));
    assert_eq!(text.matches("#define RDATATYPE_FROMTEXT_SW(").count(), 1);
}

#[test]
fn test_code_artifact_inline_modules() {
    let text = run(&config(OutputMode::Code).with_inline_modules(true)).unwrap();
    assert!(text.contains("static inline isc_result_t\ntowire_in_a(ARGS_TOWIRE) {\n"));
    assert!(text.contains("towire_keydata(ARGS_TOWIRE)"));
    assert!(!text.contains("#include \"/"));
}

#[test]
fn test_hash_table_resolves_fixture_types() {
    let root = source_root();
    let feed = DirectoryFeed::new(Some(Path::new(&root)), 'c').unwrap();
    let registry = build_registry(&feed, true).unwrap();
    let table = MnemonicHashTable::build(registry.catalog()).unwrap();

    for entry in registry.catalog().entries() {
        let expected = if entry.is_reserved() {
            LookupOutcome::NotImplemented(entry.type_number())
        } else {
            LookupOutcome::Resolved(entry.type_number())
        };
        assert_eq!(table.resolve(&entry.mnemonic().to_uppercase()), Some(expected));
    }
    assert_eq!(table.resolve("mx"), None);
}

#[test]
fn test_struct_headers_are_bracketed() {
    let fixtures = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let config = config(OutputMode::Structs)
        .with_prefix(format!("{fixtures}/rdatastruct_pre.h"))
        .with_suffix(format!("{fixtures}/rdatastruct_suf.h"));
    let text = run(&config).unwrap();

    assert!(text.starts_with(concat!(
        "#ifndef GENERATED_RDATASTRUCT_H\n",
        "#define GENERATED_RDATASTRUCT_H 1\n\n",
        "#ifndef IN_A_1_H\n",
    )));
    assert!(text.ends_with("#endif\n#endif /* GENERATED_RDATASTRUCT_H */\n"));
    let order: Vec<usize> = [
        "dns_rdata_in_a_t",
        "dns_rdata_ch_a_t",
        "dns_rdata_hs_a_t",
        "dns_rdata_ns_t",
        "dns_rdata_keydata_t",
    ]
    .iter()
    .map(|name| text.find(name).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert!(!text.contains("Copyright"));
}

#[test]
fn test_missing_prefix_is_skipped() {
    let config = config(OutputMode::Structs).with_prefix("/nonexistent/prefix.h");
    let text = run(&config).unwrap();
    assert!(text.starts_with("#ifndef IN_A_1_H\n"));
}

#[test]
fn test_depend_lines() {
    let text = run(&config(OutputMode::Depend).with_depend_target("include/dns/rdatastruct.h")).unwrap();
    let root = source_root();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], format!("include/dns/rdatastruct.h:\t{root}/rdata/in_1/a_1.h"));
    assert_eq!(lines[9], format!("include/dns/rdatastruct.h:\t{root}/rdata/generic/keydata_65533.h"));
}

#[test]
fn test_missing_source_root_fails() {
    let config = GeneratorConfig::new()
        .with_mode(OutputMode::ClassEnum)
        .with_source_root("/nonexistent/source")
        .with_source_date_epoch("0");
    assert!(matches!(run(&config), Err(GenerateError::Feed(_))));
}

#[test]
fn test_overlong_source_root_fails() {
    let config = GeneratorConfig::new().with_source_root("x".repeat(2000));
    assert!(matches!(run(&config), Err(GenerateError::Feed(_))));
}
