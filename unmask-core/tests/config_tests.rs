// unmask-core/tests/config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use test_log::test;

use unmask_core::config::{self, CureProfile, Preset, ProfileConfig};
use unmask_core::{cure, Options};

#[test]
fn test_load_default_profiles() {
    let config = ProfileConfig::load_default_profiles().unwrap();
    assert_eq!(config.profiles.len(), 4);
    let strict = config.get("strict").unwrap();
    assert!(strict.description.is_some());
    assert_eq!(strict.preset, Preset::Default);
    assert_eq!(strict.options(), Options::ASCII_ONLY | Options::ALPHANUMERIC_ONLY);
}

#[test]
fn test_load_profiles_from_yaml_file() -> Result<()> {
    let yaml_content = r#"
profiles:
  - name: moderation
    description: "Keep case for display, fold everything else"
    flags:
      - retain_capitalization
  - name: greek_chat
    preset: pure_homoglyph
    flags: [ascii_only]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = ProfileConfig::load_from_file(file.path())?;

    assert_eq!(config.profiles.len(), 2);
    let moderation = config.get("moderation").unwrap();
    assert_eq!(moderation.preset, Preset::Default);
    assert_eq!(moderation.options(), Options::RETAIN_CAPITALIZATION);

    let greek = config.get("greek_chat").unwrap();
    assert_eq!(greek.options(), Options::PURE_HOMOGLYPH | Options::ASCII_ONLY);
    Ok(())
}

#[test]
fn test_load_single_profile_from_json_file() -> Result<()> {
    let json_content = r#"{
        "name": "keep_diacritics",
        "preset": "default",
        "flags": ["retain_diacritics", "disable_leetspeak"]
    }"#;
    let mut file = Builder::new().suffix(".json").tempfile()?;
    file.write_all(json_content.as_bytes())?;
    let profile = CureProfile::load_from_file(file.path())?;

    assert_eq!(profile.name, "keep_diacritics");
    assert_eq!(profile.options(), Options::RETAIN_DIACRITICS | Options::DISABLE_LEETSPEAK);
    assert_eq!(cure("ｃａｆé l33t", profile.options())?, "café l33t");
    Ok(())
}

#[test]
fn test_unknown_flag_is_rejected() -> Result<()> {
    let yaml_content = r#"
profiles:
  - name: broken
    flags: [retain_klingon]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = ProfileConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
    assert!(format!("{:#}", err).contains("retain_klingon"));
    Ok(())
}

#[test]
fn test_duplicate_profile_names_are_rejected() -> Result<()> {
    let yaml_content = r#"
profiles:
  - name: twice
  - name: twice
    preset: all
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = ProfileConfig::load_from_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Profile 'twice' is defined more than once");
    Ok(())
}

#[test]
fn test_missing_file() {
    let err = ProfileConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_merge_user_profiles_over_defaults() -> Result<()> {
    let yaml_content = r#"
profiles:
  - name: default
    flags: [disable_bidi]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let user = ProfileConfig::load_from_file(file.path())?;

    let merged = config::merge_profiles(ProfileConfig::load_default_profiles()?, Some(user));
    assert_eq!(merged.profiles.len(), 4);
    assert_eq!(merged.get("default").unwrap().options(), Options::DISABLE_BIDI);
    Ok(())
}

#[test]
fn test_options_round_trip_through_profile_yaml() -> Result<()> {
    let profile = CureProfile {
        name: "round_trip".to_string(),
        description: None,
        preset: Preset::All,
        flags: Options::DISABLE_BIDI | Options::RETAIN_TURKISH,
    };
    let yaml = serde_yml::to_string(&profile)?;
    let back: CureProfile = serde_yml::from_str(&yaml)?;
    assert_eq!(back, profile);
    Ok(())
}
