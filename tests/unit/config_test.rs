//! Unit tests for config module

use mclang::formatting::UnknownCodePolicy;
use mclang::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!(config.workspace.directory.is_none());
    assert_eq!(config.workspace.base_language, "en_us");
    assert_eq!(config.formatting.unknown_codes, UnknownCodePolicy::Swallow);
    assert!(config.formatting.color);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.workspace.directory = Some("~/lang".to_string());
    config.formatting.unknown_codes = UnknownCodePolicy::Literal;

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.workspace.directory.as_deref(), Some("~/lang"));
    assert_eq!(parsed.formatting.unknown_codes, UnknownCodePolicy::Literal);
}

#[test]
fn formatting_section_parses_from_toml() {
    let toml_str = r#"
[formatting]
unknown_codes = "literal"
color = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.formatting.unknown_codes, UnknownCodePolicy::Literal);
    assert!(!config.formatting.color);
    assert_eq!(config.workspace.base_language, "en_us");
}

#[test]
fn workspace_section_defaults_missing_fields() {
    let toml_str = r#"
[workspace]
directory = "/srv/lang"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.workspace.directory.as_deref(), Some("/srv/lang"));
    assert_eq!(config.workspace.base_language, "en_us");
    assert!(config.formatting.color);
}

#[test]
fn empty_file_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.workspace.base_language, "en_us");
}

#[test]
fn unknown_policy_value_is_rejected() {
    let toml_str = r#"
[formatting]
unknown_codes = "explode"
"#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn unset_directory_is_not_serialized() {
    let toml_str = toml::to_string(&Config::default()).unwrap();
    assert!(!toml_str.contains("directory"));
    assert!(toml_str.contains("base_language = \"en_us\""));
    assert!(toml_str.contains("unknown_codes = \"swallow\""));
}
