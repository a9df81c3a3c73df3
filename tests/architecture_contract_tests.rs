//! Architecture contract tests.

mod support;

use support::architecture::{find_item_definitions_in_mod_files, find_lines_containing, path_exists};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "teloxide::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::", "teloxide::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::application", "crate::infrastructure"],
    );
    assert!(
        hits.is_empty(),
        "ports should depend only on domain types: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_item_definitions_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found item definitions in mod.rs files: {violations:#?}"
    );
}

#[test]
fn collaborator_contracts_live_in_outbound_port() {
    for file in [
        "src/port/outbound/market_data.rs",
        "src/port/outbound/notifier.rs",
        "src/port/outbound/clock.rs",
        "src/port/outbound/report.rs",
    ] {
        assert!(path_exists(file), "expected outbound port `{file}`");
    }
}
