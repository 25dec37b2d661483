//! Run settings
//!
//! Loaded from a JSON file for hosted runs. Every field is optional in the
//! file; missing ones take their defaults.

use std::fmt;
use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Surface;
use crate::consts::{MIN_SURFACE_SIZE, SURFACE_SIZE};

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "malformed settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the square display in pixels
    pub surface_size: i32,
    /// Box placement seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Stop after this many ticks; `None` runs forever
    pub max_ticks: Option<u64>,
    /// Sensor mounted with x and y swapped relative to the display
    pub swap_axes: bool,
    /// Print the final frame as ASCII when the run ends
    pub dump_frame: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_size: SURFACE_SIZE,
            seed: None,
            max_ticks: None,
            swap_axes: false,
            dump_frame: false,
        }
    }
}

impl Settings {
    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.surface_size < MIN_SURFACE_SIZE {
            return Err(SettingsError::Invalid(format!(
                "surface_size {} is below the minimum of {}",
                self.surface_size, MIN_SURFACE_SIZE
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(SettingsError::Invalid("max_ticks must be positive".into()));
        }
        Ok(())
    }

    pub fn surface(&self) -> Surface {
        Surface::new(self.surface_size)
    }

    /// Generator for box placement
    pub fn rng(&self) -> Pcg32 {
        match self.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.surface_size, 128);
        assert_eq!(s.seed, None);
        assert_eq!(s.max_ticks, None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "seed": 9, "max_ticks": 1000 }"#).unwrap();
        assert_eq!(s.seed, Some(9));
        assert_eq!(s.max_ticks, Some(1000));
        assert_eq!(s.surface_size, 128);
        assert!(!s.swap_axes);
    }

    #[test]
    fn test_rejects_small_surface() {
        let err = Settings::from_json(r#"{ "surface_size": 16 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = Settings::from_json("{ surface_size: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/hitbox.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            seed: Some(3),
            dump_frame: true,
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&s.to_json().unwrap()).unwrap(), s);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let s = Settings {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(s.rng().random::<u32>(), s.rng().random::<u32>());
    }
}
