//! Configuration for rendering and for the reference minting derivation
//!
//! Both structs are plain serde values with sensible defaults, so a host can
//! keep them in a JSON file next to its other settings.

use crate::error::{NexusError, Result};
use crate::render::shape::{BASE_SIZE, SIZE_PER_STAGE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest canvas that still holds the outermost particle orbit plus overlays
pub const MIN_CANVAS_SIZE: u32 = 240;

/// Tuning knobs for the compositor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width and height of the square canvas, in user units
    pub canvas_size: u32,
    /// Peak core pulse offset, in user units
    pub pulse_amplitude: f64,
    /// Pulse phase advance per animation frame, in radians
    pub pulse_rate: f64,
    /// Pathway rotation per animation frame, in degrees
    pub rotation_per_frame: f64,
    /// Draw the id label and the stage-progress indicator
    pub show_details: bool,
    /// Embed declarative rotation so viewers animate a single document
    pub animate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            pulse_amplitude: 2.0,
            pulse_rate: 0.1,
            rotation_per_frame: 0.5,
            show_details: true,
            animate: false,
        }
    }
}

impl RenderConfig {
    /// Static render used for metadata snapshots
    pub fn reference() -> Self {
        Self::default()
    }

    /// Same geometry, with embedded rotation for live display
    pub fn animated() -> Self {
        Self {
            animate: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_size < MIN_CANVAS_SIZE {
            return Err(NexusError::InvalidConfig(format!(
                "canvas_size {} is below the minimum of {}",
                self.canvas_size, MIN_CANVAS_SIZE
            )));
        }
        for (name, value) in [
            ("pulse_amplitude", self.pulse_amplitude),
            ("pulse_rate", self.pulse_rate),
            ("rotation_per_frame", self.rotation_per_frame),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NexusError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        let smallest_core = BASE_SIZE + SIZE_PER_STAGE;
        if self.pulse_amplitude >= smallest_core {
            return Err(NexusError::InvalidConfig(format!(
                "pulse_amplitude {} must stay below the smallest core size {}",
                self.pulse_amplitude, smallest_core
            )));
        }
        Ok(())
    }

    /// Canvas center
    pub fn center(&self) -> f64 {
        self.canvas_size as f64 / 2.0
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Mutation-roll policy for the two genesis classes, in basis points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintPolicy {
    /// Chance of a mutation for baseline entities (1000 = 10%)
    pub baseline_mutation_bps: u16,
    /// Chance of a mutation for enhanced-genesis entities
    pub enhanced_mutation_bps: u16,
}

impl Default for MintPolicy {
    fn default() -> Self {
        Self {
            baseline_mutation_bps: 1_000,
            enhanced_mutation_bps: 2_500,
        }
    }
}

impl MintPolicy {
    pub const BPS_SCALE: u16 = 10_000;

    pub fn rate_for(&self, enhanced: bool) -> u16 {
        let bps = if enhanced {
            self.enhanced_mutation_bps
        } else {
            self.baseline_mutation_bps
        };
        bps.min(Self::BPS_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.center(), 200.0);
        assert!(!config.animate);
        assert!(RenderConfig::animated().animate);
    }

    #[test]
    fn test_rejects_small_canvas() {
        let config = RenderConfig {
            canvas_size: 100,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(NexusError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_finite_tuning() {
        let config = RenderConfig {
            pulse_amplitude: f64::NAN,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
        let config = RenderConfig {
            rotation_per_frame: -1.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_pulse_that_inverts_the_core() {
        let config = RenderConfig {
            pulse_amplitude: 100.0,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(NexusError::InvalidConfig(_))));
        let config = RenderConfig {
            pulse_amplitude: BASE_SIZE + SIZE_PER_STAGE,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
        let config = RenderConfig {
            pulse_amplitude: 28.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"animate": true}"#).unwrap();
        assert!(config.animate);
        assert_eq!(config.canvas_size, 400);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("nexus-config-{}.json", std::process::id()));
        let config = RenderConfig::animated();
        config.save(&path).unwrap();
        let loaded = RenderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_mint_policy_rates() {
        let policy = MintPolicy::default();
        assert_eq!(policy.rate_for(false), 1_000);
        assert_eq!(policy.rate_for(true), 2_500);
        let capped = MintPolicy {
            baseline_mutation_bps: 60_000,
            ..policy
        };
        assert_eq!(capped.rate_for(false), MintPolicy::BPS_SCALE);
    }
}
