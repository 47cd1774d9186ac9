//! Tests for types

use super::*;
use clap::ValueEnum;
use proptest::prelude::*;

// Feature: config-system, Property 1: Valid alias policy parsing
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_alias_parsing(policy in prop::sample::select(vec!["star", "none"])) {
        let toml_content = format!(r#"
[alias]
unnamed = "{}"
"#, policy);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse valid alias policy: {}", policy);

        let expected = match policy {
            "star" => AliasPolicy::Star,
            "none" => AliasPolicy::None,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.unwrap().alias.unnamed, expected);
    }
}

// Feature: config-system, Property 2: Missing fields use defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_host_fields_use_defaults(
        include_host_section in prop::bool::ANY,
        include_transport_field in prop::bool::ANY
    ) {
        let toml_content = if !include_host_section {
            String::new()
        } else if !include_transport_field {
            "[host]\n".to_string()
        } else {
            r#"
[host]
transport = "socket"
"#.to_string()
        };

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

        let config = config.unwrap();
        if !include_host_section || !include_transport_field {
            prop_assert_eq!(config.host.transport, Transport::Stdio);
        } else {
            prop_assert_eq!(config.host.transport, Transport::Socket);
        }
        prop_assert!(config.host.address.is_none());
    }
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.alias.unnamed, AliasPolicy::Star);
    assert_eq!(config.host.transport, Transport::Stdio);
    assert!(config.host.address.is_none());
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[alias]
unnamed = "none"

[host]
transport = "socket"
address = "/tmp/nvim.sock"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.alias.unnamed, AliasPolicy::None);
    assert_eq!(config.host.transport, Transport::Socket);
    assert_eq!(config.host.address.as_deref(), Some("/tmp/nvim.sock"));
}

#[test]
fn test_invalid_transport_rejected() {
    let toml = r#"
[host]
transport = "pipe"
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "Unknown transport should fail to parse");
}

#[test]
fn test_value_enum_names_match_config_names() {
    assert_eq!(
        AliasPolicy::from_str("none", false).unwrap(),
        AliasPolicy::None
    );
    assert_eq!(
        Transport::from_str("socket", false).unwrap(),
        Transport::Socket
    );
}
