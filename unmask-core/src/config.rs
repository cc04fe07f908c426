//! Configuration management for `unmask-core`.
//!
//! This module defines curing profiles: named, documented option sets that
//! can be shipped with the library or loaded from YAML or JSON files. It
//! provides utilities for loading, merging and validating them.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::options::Options;

/// Maximum allowed length for a profile name.
pub const MAX_PROFILE_NAME_LENGTH: usize = 64;

/// A named starting point for a profile's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Default,
    All,
    PureHomoglyph,
}

impl Preset {
    pub const fn options(self) -> Options {
        match self {
            Preset::Default => Options::DEFAULT,
            Preset::All => Options::ALL,
            Preset::PureHomoglyph => Options::PURE_HOMOGLYPH,
        }
    }
}

/// A single curing profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CureProfile {
    /// Unique identifier for the profile (e.g., "strict").
    pub name: String,
    /// Human-readable description of what the profile is for.
    pub description: Option<String>,
    /// The preset the profile builds on.
    pub preset: Preset,
    /// Extra flags, by name, added on top of the preset.
    pub flags: Options,
}

impl Default for CureProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: None,
            preset: Preset::Default,
            flags: Options::DEFAULT,
        }
    }
}

impl CureProfile {
    /// The resolved options: the preset plus every extra flag.
    pub fn options(&self) -> Options {
        self.preset.options() | self.flags
    }

    /// Loads a single profile from a YAML or JSON file, chosen by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading curing profile from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile: CureProfile = if is_json(path) {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse profile file {}", path.display()))?
        } else {
            serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse profile file {}", path.display()))?
        };

        validate_profiles(std::slice::from_ref(&profile))?;
        debug!("Loaded profile '{}' resolving to {:?}.", profile.name, profile.options());
        Ok(profile)
    }
}

/// A collection of profiles.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfileConfig {
    pub profiles: Vec<CureProfile>,
}

/// Error type for a profile name that matches nothing.
#[derive(Debug)]
pub struct ProfileNotFoundError {
    pub profile_name: String,
}

impl fmt::Display for ProfileNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Curing profile '{}' not found.", self.profile_name)
    }
}

impl std::error::Error for ProfileNotFoundError {}

impl ProfileConfig {
    /// Loads a profile collection from a YAML or JSON file, chosen by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading curing profiles from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ProfileConfig = if is_json(path) {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        };

        validate_profiles(&config.profiles)?;
        info!("Loaded {} profiles from file {}.", config.profiles.len(), path.display());
        Ok(config)
    }

    /// Loads the built-in profiles from the embedded configuration.
    pub fn load_default_profiles() -> Result<Self> {
        debug!("Loading default profiles from embedded string...");
        let default_yaml = include_str!("../config/default_profiles.yaml");
        let config: ProfileConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default profiles")?;

        debug!("Loaded {} default profiles.", config.profiles.len());
        Ok(config)
    }

    pub fn get(&self, name: &str) -> Option<&CureProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Looks a profile up by name, failing with [`ProfileNotFoundError`].
    pub fn require(&self, name: &str) -> Result<&CureProfile> {
        self.get(name).ok_or_else(|| {
            anyhow!(ProfileNotFoundError {
                profile_name: name.to_string(),
            })
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }
}

/// Merges default and user profiles. A user profile replaces a default one
/// with the same name; new names are appended.
pub fn merge_profiles(default_config: ProfileConfig, user_config: Option<ProfileConfig>) -> ProfileConfig {
    let Some(user_config) = user_config else {
        return default_config;
    };

    let mut user_by_name: HashMap<String, CureProfile> = user_config
        .profiles
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();

    let mut merged = Vec::with_capacity(default_config.profiles.len() + user_by_name.len());
    for profile in default_config.profiles {
        match user_by_name.remove(&profile.name) {
            Some(user_profile) => {
                debug!("User profile '{}' overrides the built-in one.", user_profile.name);
                merged.push(user_profile);
            }
            None => merged.push(profile),
        }
    }

    let mut added: Vec<CureProfile> = user_by_name.into_values().collect();
    added.sort_by(|a, b| a.name.cmp(&b.name));
    merged.extend(added);

    ProfileConfig { profiles: merged }
}

/// Resolves a built-in profile by name.
pub fn load_profile_by_name(name: &str) -> Result<CureProfile> {
    let config = ProfileConfig::load_default_profiles()?;
    config.require(name).cloned()
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn validate_profiles(profiles: &[CureProfile]) -> Result<()> {
    let mut seen = HashSet::new();
    for profile in profiles {
        if profile.name.trim().is_empty() {
            return Err(anyhow!("Profile names must not be empty"));
        }
        if profile.name.len() > MAX_PROFILE_NAME_LENGTH {
            return Err(anyhow!(
                "Profile '{}': name length ({}) exceeds maximum allowed ({})",
                profile.name,
                profile.name.len(),
                MAX_PROFILE_NAME_LENGTH
            ));
        }
        if !seen.insert(profile.name.as_str()) {
            return Err(anyhow!("Profile '{}' is defined more than once", profile.name));
        }
        if profile.options().contains(Options::ASCII_ONLY) && profile.options().contains(Options::RETAIN_SCRIPTS) {
            warn!(
                "Profile '{}' retains every script but also sets ascii_only; retained scripts will be dropped.",
                profile.name
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_parse() {
        let config = ProfileConfig::load_default_profiles().unwrap();
        let names: Vec<&str> = config.names().collect();
        assert_eq!(names, vec!["default", "all", "pure_homoglyph", "strict"]);
        assert!(validate_profiles(&config.profiles).is_ok());
    }

    #[test]
    fn test_presets_resolve() {
        assert_eq!(load_profile_by_name("default").unwrap().options(), Options::DEFAULT);
        assert_eq!(load_profile_by_name("all").unwrap().options(), Options::ALL);
        assert_eq!(
            load_profile_by_name("pure_homoglyph").unwrap().options(),
            Options::PURE_HOMOGLYPH
        );
        assert_eq!(
            load_profile_by_name("strict").unwrap().options(),
            Options::ASCII_ONLY | Options::ALPHANUMERIC_ONLY
        );
    }

    #[test]
    fn test_unknown_profile() {
        let err = load_profile_by_name("nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "Curing profile 'nonexistent' not found.");
        assert!(err.downcast_ref::<ProfileNotFoundError>().is_some());
    }

    #[test]
    fn test_validation_rejects_duplicates_and_blank_names() {
        let dup = vec![CureProfile::default(), CureProfile::default()];
        assert!(validate_profiles(&dup).is_err());

        let blank = vec![CureProfile {
            name: "  ".to_string(),
            ..CureProfile::default()
        }];
        assert!(validate_profiles(&blank).is_err());
    }

    #[test]
    fn test_merge_profiles() {
        let defaults = ProfileConfig::load_default_profiles().unwrap();
        let user = ProfileConfig {
            profiles: vec![
                CureProfile {
                    name: "strict".to_string(),
                    description: Some("ASCII only, punctuation allowed".to_string()),
                    preset: Preset::Default,
                    flags: Options::ASCII_ONLY,
                },
                CureProfile {
                    name: "greek".to_string(),
                    description: None,
                    preset: Preset::Default,
                    flags: Options::RETAIN_GREEK,
                },
            ],
        };

        let merged = merge_profiles(defaults.clone(), Some(user));
        assert_eq!(merged.profiles.len(), 5);
        assert_eq!(merged.get("strict").unwrap().options(), Options::ASCII_ONLY);
        assert_eq!(merged.get("greek").unwrap().options(), Options::RETAIN_GREEK);
        assert_eq!(merged.get("all").unwrap().options(), Options::ALL);

        assert_eq!(merge_profiles(defaults.clone(), None), defaults);
    }
}
