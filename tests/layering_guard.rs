//! Layering guardrails for the workspace crates.
//!
//! `polycheck_core` is pure vocabulary and has no dependencies. `polycheck_syntax` may use the vocabulary crate but
//! never the validator crate or anything that belongs to the binary (argument parsing, log output setup).
//! These tests scan the member manifests' `[dependencies]` tables.

/// Dependency names declared in the `[dependencies]` table of `manifest`.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let names = dependency_names(include_str!("../crates/polycheck_core/Cargo.toml"));
    assert!(names.is_empty(), "polycheck_core must stay dependency-free, found {names:?}");
}

#[test]
fn syntax_does_not_depend_on_validator_or_binary_stack() {
    let names = dependency_names(include_str!("../crates/polycheck_syntax/Cargo.toml"));
    assert!(names.iter().any(|name| name == "polycheck_core"));
    for forbidden in ["polycheck", "clap", "tracing-subscriber"] {
        assert!(
            !names.iter().any(|name| name == forbidden),
            "`{forbidden}` must not appear in polycheck_syntax's [dependencies]"
        );
    }
}

#[test]
fn scanner_reads_only_the_dependencies_table() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\na = \"1\" # note\nb = { path = \"b\" }\n\n[dev-dependencies]\nc = \"1\"\n";
    assert_eq!(dependency_names(manifest), vec!["a", "b"]);
}
