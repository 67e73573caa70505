//! Tests for layered configuration resolution

use deptry_config::{
    ConfigResolver, Overrides, ResolvedConfig, Setting, SettingChange, SettingValue, Source,
};
use deptry_test_utils::TestProject;
use rstest::rstest;

fn resolve(project: &TestProject, overrides: &Overrides) -> ResolvedConfig {
    ConfigResolver::new(project.manifest_path()).resolve(overrides)
}

fn list(items: &[&str]) -> SettingValue {
    SettingValue::from(items)
}

mod defaults {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_manifest_no_overrides() {
        let project = TestProject::new();
        let config = resolve(&project, &Overrides::default());

        assert_eq!(config.ignore_directories(), [".venv", "tests"]);
        assert!(config.ignore_obsolete().is_empty());
        assert!(config.ignore_missing().is_empty());
        assert!(config.ignore_transitive().is_empty());
        assert!(!config.ignore_notebooks());
        assert!(!config.skip_obsolete());
        assert!(!config.skip_missing());
        assert!(!config.skip_transitive());
        assert!(config.changes().is_empty());
    }

    #[rstest]
    #[case::without_tool_table("[project]\nname = \"demo\"\n")]
    #[case::other_tool_only("[tool.something]\nexclude = [\"foo\", \"bar\"]\n")]
    #[case::empty_section("[tool.deptry]\n")]
    #[case::malformed_toml("[tool.deptry\nskip_missing = true\n")]
    #[case::empty_file("")]
    fn test_unusable_manifest_falls_back_to_defaults(#[case] content: &str) {
        let project = TestProject::new();
        project.write_pyproject(content);

        let config = resolve(&project, &Overrides::default());
        assert_eq!(config, ResolvedConfig::default());
    }

    #[test]
    fn test_manifest_path_is_a_directory() {
        let project = TestProject::new();
        let config = ConfigResolver::new(project.root()).resolve(&Overrides::default());
        assert_eq!(config, ResolvedConfig::default());
    }
}

mod manifest_layer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_manifest_sets_ignore_missing() {
        let project = TestProject::new();
        project.write_deptry_section(&[("ignore_missing", r#"["pkgA"]"#)]);

        let config = resolve(&project, &Overrides::default());

        assert_eq!(config.ignore_missing(), ["pkgA"]);
        assert_eq!(config.provenance(Setting::IgnoreMissing), Source::Manifest);
    }

    #[test]
    fn test_every_key_is_recognized() {
        let project = TestProject::new();
        project.write_deptry_section(&[
            ("ignore_obsolete", r#"["a"]"#),
            ("ignore_missing", r#"["b"]"#),
            ("ignore_transitive", r#"["c"]"#),
            ("ignore_directories", r#"["build", "dist"]"#),
            ("ignore_notebooks", "true"),
            ("skip_obsolete", "true"),
            ("skip_missing", "true"),
            ("skip_transitive", "true"),
        ]);

        let config = resolve(&project, &Overrides::default());

        assert_eq!(config.ignore_obsolete(), ["a"]);
        assert_eq!(config.ignore_missing(), ["b"]);
        assert_eq!(config.ignore_transitive(), ["c"]);
        assert_eq!(config.ignore_directories(), ["build", "dist"]);
        assert!(config.ignore_notebooks());
        assert!(config.skip_obsolete());
        assert!(config.skip_missing());
        assert!(config.skip_transitive());
        for setting in Setting::ALL {
            assert_eq!(config.provenance(setting), Source::Manifest);
        }
    }

    #[test]
    fn test_manifest_list_replaces_default() {
        let project = TestProject::new();
        project.write_deptry_section(&[("ignore_directories", r#"["build"]"#)]);

        let config = resolve(&project, &Overrides::default());
        assert_eq!(config.ignore_directories(), ["build"]);
    }

    #[test]
    fn test_empty_manifest_list_still_overrides_default() {
        let project = TestProject::new();
        project.write_deptry_section(&[("ignore_directories", "[]")]);

        let config = resolve(&project, &Overrides::default());

        assert!(config.ignore_directories().is_empty());
        assert_eq!(
            config.provenance(Setting::IgnoreDirectories),
            Source::Manifest
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let project = TestProject::new();
        project.write_deptry_section(&[("Skip_Missing", "true"), ("skip-missing", "true")]);

        let config = resolve(&project, &Overrides::default());
        assert!(!config.skip_missing());
    }

    #[test]
    fn test_wrong_shape_keeps_previous_value_for_that_setting_only() {
        let project = TestProject::new();
        project.write_deptry_section(&[
            ("ignore_missing", r#""pkgA""#),
            ("skip_obsolete", "true"),
        ]);

        let config = resolve(&project, &Overrides::default());

        assert!(config.ignore_missing().is_empty());
        assert!(config.skip_obsolete());
    }

    #[test]
    fn test_dotted_key_form_is_read() {
        let project = TestProject::new();
        project.write_pyproject("[tool]\ndeptry.skip_transitive = true\n");

        let config = resolve(&project, &Overrides::default());
        assert!(config.skip_transitive());
    }
}

mod override_layer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_override_beats_manifest() {
        let project = TestProject::new();
        project.write_deptry_section(&[("ignore_transitive", r#"["pkgC"]"#)]);

        let overrides = Overrides {
            ignore_transitive: Some(vec!["pkgB".into()]),
            ..Overrides::default()
        };
        let config = resolve(&project, &overrides);

        assert_eq!(config.ignore_transitive(), ["pkgB"]);
        assert_eq!(
            config.changes(),
            [
                SettingChange {
                    setting: Setting::IgnoreTransitive,
                    value: list(&["pkgC"]),
                    source: Source::Manifest,
                },
                SettingChange {
                    setting: Setting::IgnoreTransitive,
                    value: list(&["pkgB"]),
                    source: Source::CommandLine,
                },
            ]
        );
    }

    #[test]
    fn test_falsy_override_does_not_reset_manifest_flag() {
        let project = TestProject::new();
        project.write_deptry_section(&[("skip_obsolete", "true")]);

        let overrides = Overrides {
            skip_obsolete: Some(false),
            ..Overrides::default()
        };
        let config = resolve(&project, &overrides);

        assert!(config.skip_obsolete());
        assert_eq!(config.provenance(Setting::SkipObsolete), Source::Manifest);
    }

    #[rstest]
    #[case::ignore_obsolete(Setting::IgnoreObsolete, r#"["pkg"]"#)]
    #[case::ignore_missing(Setting::IgnoreMissing, r#"["pkg"]"#)]
    #[case::ignore_transitive(Setting::IgnoreTransitive, r#"["pkg"]"#)]
    #[case::ignore_directories(Setting::IgnoreDirectories, r#"["pkg"]"#)]
    fn test_empty_override_list_is_ignored(#[case] setting: Setting, #[case] manifest: &str) {
        let project = TestProject::new();
        project.write_deptry_section(&[(setting.key(), manifest)]);

        let overrides = Overrides::new().with(setting, Vec::<String>::new()).unwrap();
        let config = resolve(&project, &overrides);

        assert_eq!(config.value(setting), list(&["pkg"]));
    }

    #[rstest]
    #[case::ignore_notebooks(Setting::IgnoreNotebooks)]
    #[case::skip_obsolete(Setting::SkipObsolete)]
    #[case::skip_missing(Setting::SkipMissing)]
    #[case::skip_transitive(Setting::SkipTransitive)]
    fn test_true_override_beats_false_manifest(#[case] setting: Setting) {
        let project = TestProject::new();
        project.write_deptry_section(&[(setting.key(), "false")]);

        let overrides = Overrides::new().with(setting, true).unwrap();
        let config = resolve(&project, &overrides);

        assert_eq!(config.value(setting), SettingValue::Flag(true));
        assert_eq!(config.provenance(setting), Source::CommandLine);
    }

    #[test]
    fn test_override_without_manifest() {
        let project = TestProject::new();
        let overrides = Overrides {
            ignore_directories: Some(vec!["vendor".into()]),
            ignore_notebooks: Some(true),
            ..Overrides::default()
        };

        let config = resolve(&project, &overrides);

        assert_eq!(config.ignore_directories(), ["vendor"]);
        assert!(config.ignore_notebooks());
        assert_eq!(config.changes().len(), 2);
    }
}
