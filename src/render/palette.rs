//! Palette Deriver — integer HSL colors from the trait combination
//!
//! All arithmetic is on integers, so a palette is bit-identical on every host.

use crate::evolution::EvolutionStage;
use crate::genome::{CoreGeometry, NetworkDensity, PathwayPattern, TraitRecord};
use serde::{Deserialize, Serialize};

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u32, saturation: u32, lightness: u32) -> Self {
        Self {
            hue: (hue % 360) as u16,
            saturation: saturation.min(100) as u8,
            lightness: lightness.min(100) as u8,
        }
    }

    pub fn css(&self) -> String {
        format!("hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    pub glow: Hsl,
}

impl Palette {
    pub fn derive(
        core: CoreGeometry,
        pathway: PathwayPattern,
        density: NetworkDensity,
        stage: EvolutionStage,
        enhanced: bool,
    ) -> Self {
        let stage = stage.number() as u32;
        let bonus = if enhanced { 20 } else { 0 };

        let hue = (core.index() as u32 * 45 + pathway.index() as u32 * 72 + stage * 20) % 360;
        let saturation = 60 + density.get() as u32 * 10 + bonus;
        let lightness = 45 + stage * 8;

        let glow = if enhanced {
            Hsl::new(hue, 90, 70)
        } else {
            Hsl::new(hue, 60, 50)
        };

        Self {
            primary: Hsl::new(hue, saturation, lightness),
            secondary: Hsl::new(hue + 60, saturation, lightness),
            accent: Hsl::new(hue + 120, 80 + bonus, 60),
            glow,
        }
    }

    pub fn for_record(record: &TraitRecord, stage: EvolutionStage) -> Self {
        Self::derive(
            record.core_geometry(),
            record.pathway_pattern(),
            record.network_density(),
            stage,
            record.is_enhanced_genesis(),
        )
    }

    /// Inner and outer stops of the background gradient
    pub fn background(&self) -> (Hsl, Hsl) {
        let hue = self.primary.hue as u32;
        (Hsl::new(hue, 35, 12), Hsl::new(hue, 40, 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn density(n: u32) -> NetworkDensity {
        NetworkDensity::new(n).unwrap()
    }

    #[test]
    fn test_baseline_palette() {
        let p = Palette::derive(
            CoreGeometry::Circle,
            PathwayPattern::Linear,
            density(1),
            EvolutionStage::Spark,
            false,
        );
        assert_eq!(p.primary, Hsl { hue: 20, saturation: 70, lightness: 53 });
        assert_eq!(p.secondary.hue, 80);
        assert_eq!(p.accent, Hsl { hue: 140, saturation: 80, lightness: 60 });
        assert_eq!(p.glow, Hsl { hue: 20, saturation: 60, lightness: 50 });
        assert_eq!(p.primary.css(), "hsl(20,70%,53%)");
    }

    #[test]
    fn test_enhanced_palette_clamps() {
        let p = Palette::derive(
            CoreGeometry::Cross,
            PathwayPattern::Wave,
            density(5),
            EvolutionStage::Nexus,
            true,
        );
        // 7*45 + 4*72 + 4*20 = 683 -> 323
        assert_eq!(p.primary.hue, 323);
        assert_eq!(p.primary.saturation, 100);
        assert_eq!(p.primary.lightness, 77);
        assert_eq!(p.secondary.hue, 23);
        assert_eq!(p.accent.hue, 83);
        assert_eq!(p.accent.saturation, 100);
        assert_eq!(p.glow, Hsl { hue: 323, saturation: 90, lightness: 70 });
    }

    #[test]
    fn test_stage_shifts_hue_and_lightness() {
        let at = |stage| {
            Palette::derive(CoreGeometry::Star, PathwayPattern::Spiral, density(2), stage, false)
        };
        let spark = at(EvolutionStage::Spark);
        let flow = at(EvolutionStage::Flow);
        assert_eq!((flow.primary.hue + 360 - spark.primary.hue) % 360, 40);
        assert_eq!(flow.primary.lightness - spark.primary.lightness, 16);
    }
}
