//! Profile Registry
//!
//! Collects named harvest profiles from the embedded defaults, JSON strings,
//! or files on disk. Every profile is checked on registration, so anything
//! the registry hands out can be evaluated.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use harvest_core::HarvestReport;

use crate::{profile::HarvestProfile, ConfigurationError, ProfileResult, DEFAULT_PROFILES};

/// Named collection of checked harvest profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, HarvestProfile>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in profiles
    pub fn with_defaults() -> ProfileResult<Self> {
        let mut registry = Self::new();
        registry.load_defaults()?;
        Ok(registry)
    }

    /// Register a profile after checking it
    pub fn register(&mut self, profile: HarvestProfile) -> ProfileResult<()> {
        if let Err(err) = profile.check() {
            log::warn!("rejected harvest profile '{}': {}", profile.name, err);
            return Err(err);
        }
        if self.profiles.contains_key(&profile.name) {
            return Err(ConfigurationError::DuplicateProfile(profile.name));
        }

        log::debug!("registered harvest profile '{}'", profile.name);
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Load the built-in profiles embedded at compile time
    pub fn load_defaults(&mut self) -> ProfileResult<()> {
        let mut loaded = 0;
        for file in DEFAULT_PROFILES.files() {
            if file.path().extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let json = file.contents_utf8().ok_or_else(|| ConfigurationError::Encoding {
                path: file.path().display().to_string(),
            })?;
            self.register(HarvestProfile::from_json(json)?)?;
            loaded += 1;
        }

        log::info!("loaded {} built-in harvest profiles", loaded);
        Ok(())
    }

    /// Parse and register a profile from a JSON string
    pub fn load_json(&mut self, json: &str) -> ProfileResult<()> {
        self.register(HarvestProfile::from_json(json)?)
    }

    /// Read, parse and register a profile from a JSON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ProfileResult<()> {
        let path = path.as_ref();
        log::debug!("reading harvest profile from {}", path.display());
        let json = fs::read_to_string(path)?;
        self.load_json(&json)
    }

    /// Get profile by name
    pub fn get(&self, name: &str) -> Option<&HarvestProfile> {
        self.profiles.get(name)
    }

    /// Names of all registered profiles, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry holds no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Evaluate the combined budget of a registered profile
    pub fn evaluate(&self, name: &str) -> ProfileResult<HarvestReport> {
        self.get(name)
            .ok_or_else(|| ConfigurationError::NotFound(name.to_string()))?
            .evaluate()
    }
}
