#![allow(missing_docs)]

//! Persisted user preferences.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config;

const PREFERENCES_FILE: &str = "preferences.json";

/// Stored value of the sound preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoundSetting {
    #[default]
    On,
    Off,
}

impl SoundSetting {
    pub fn is_on(self) -> bool {
        self == SoundSetting::On
    }

    pub fn toggled(self) -> Self {
        match self {
            SoundSetting::On => SoundSetting::Off,
            SoundSetting::Off => SoundSetting::On,
        }
    }
}

impl From<bool> for SoundSetting {
    fn from(enabled: bool) -> Self {
        if enabled {
            SoundSetting::On
        } else {
            SoundSetting::Off
        }
    }
}

/// Contents of `preferences.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(rename = "spelaspel-sound", default)]
    pub sound: SoundSetting,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reads and writes [`Preferences`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's config directory.
    pub fn default_location() -> Self {
        Self::new(config::config_dir().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored preferences, or the defaults (sound on) when the file is
    /// missing or unreadable.
    pub fn load(&self) -> Preferences {
        if !self.path.exists() {
            return Preferences::default();
        }
        match self.read() {
            Ok(preferences) => preferences,
            Err(err) => {
                warn!("Ignoring unreadable preferences {:?}: {err:#}", self.path);
                Preferences::default()
            }
        }
    }

    pub fn sound_enabled(&self) -> bool {
        self.load().sound.is_on()
    }

    /// Write the sound setting, stamping the update time.
    pub fn persist_sound(&self, enabled: bool) -> Result<Preferences> {
        let preferences = Preferences {
            sound: SoundSetting::from(enabled),
            updated_at: Some(Utc::now()),
        };
        self.persist(&preferences)?;
        Ok(preferences)
    }

    pub fn persist(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create preferences directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(preferences)
            .context("failed to serialize preferences")?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write preferences {}", self.path.display()))
    }

    fn read(&self) -> Result<Preferences> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read preferences {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse preferences {}", self.path.display()))
    }
}
