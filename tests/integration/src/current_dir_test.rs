//! End-to-end resolution from the process working directory
//!
//! Changing the working directory affects the whole process, so every
//! scenario runs inside a single test.

use deptry_config::{ConfigResolver, Overrides, ResolvedConfig, Setting, Source};
use deptry_test_utils::TestProject;
use pretty_assertions::assert_eq;
use std::env;

fn resolve_in(project: &TestProject, overrides: &Overrides) -> ResolvedConfig {
    env::set_current_dir(project.root()).unwrap();
    ConfigResolver::from_current_dir().resolve(overrides)
}

#[test]
fn test_resolution_scenarios_from_current_dir() {
    let original_dir = env::current_dir().unwrap();

    // Defaults only: no manifest file, no overrides
    let empty = TestProject::new();
    let config = resolve_in(&empty, &Overrides::default());
    assert_eq!(config.ignore_directories(), [".venv", "tests"]);
    assert!(!config.skip_missing());

    // Manifest sets ignore_missing, no override
    let with_missing = TestProject::new();
    with_missing.write_deptry_section(&[("ignore_missing", r#"["pkgA"]"#)]);
    let config = resolve_in(&with_missing, &Overrides::default());
    assert_eq!(config.ignore_missing(), ["pkgA"]);

    // Manifest sets skip_obsolete, falsy override is ignored
    let with_skip = TestProject::new();
    with_skip.write_deptry_section(&[("skip_obsolete", "true")]);
    let overrides = Overrides {
        skip_obsolete: Some(false),
        ..Overrides::default()
    };
    let config = resolve_in(&with_skip, &overrides);
    assert!(config.skip_obsolete());

    // Override beats manifest
    let with_transitive = TestProject::new();
    with_transitive.write_deptry_section(&[("ignore_transitive", r#"["pkgC"]"#)]);
    let overrides = Overrides {
        ignore_transitive: Some(vec!["pkgB".into()]),
        ..Overrides::default()
    };
    let config = resolve_in(&with_transitive, &overrides);
    assert_eq!(config.ignore_transitive(), ["pkgB"]);
    assert_eq!(
        config.provenance(Setting::IgnoreTransitive),
        Source::CommandLine
    );

    // A manifest in a parent directory is not picked up
    let nested = TestProject::new();
    nested.write_deptry_section(&[("skip_missing", "true")]);
    std::fs::create_dir(nested.root().join("src")).unwrap();
    env::set_current_dir(nested.root().join("src")).unwrap();
    let config = ConfigResolver::from_current_dir().resolve(&Overrides::default());
    assert_eq!(config, ResolvedConfig::default());

    env::set_current_dir(original_dir).unwrap();
}
