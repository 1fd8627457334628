//! RarityBand — classification of the stored mutation intensity
//!
//! The intensity is rolled once at creation by the minting layer. This module
//! only classifies it; nothing here ever re-rolls.

use crate::genome::TraitRecord;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityBand {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl RarityBand {
    pub const ALL: [RarityBand; 6] = [
        RarityBand::Common,
        RarityBand::Uncommon,
        RarityBand::Rare,
        RarityBand::Epic,
        RarityBand::Legendary,
        RarityBand::Mythic,
    ];

    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0 => RarityBand::Common,
            1..=50 => RarityBand::Uncommon,
            51..=100 => RarityBand::Rare,
            101..=150 => RarityBand::Epic,
            151..=200 => RarityBand::Legendary,
            201..=255 => RarityBand::Mythic,
        }
    }

    /// Intensities that map to this band
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            RarityBand::Common => 0..=0,
            RarityBand::Uncommon => 1..=50,
            RarityBand::Rare => 51..=100,
            RarityBand::Epic => 101..=150,
            RarityBand::Legendary => 151..=200,
            RarityBand::Mythic => 201..=255,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityBand::Common => "Common",
            RarityBand::Uncommon => "Uncommon",
            RarityBand::Rare => "Rare",
            RarityBand::Epic => "Epic",
            RarityBand::Legendary => "Legendary",
            RarityBand::Mythic => "Mythic",
        }
    }

    /// Epic and above carry the visible mutation label
    pub fn is_mutated(self) -> bool {
        self >= RarityBand::Epic
    }
}

pub fn rarity_band(record: &TraitRecord) -> RarityBand {
    RarityBand::from_intensity(record.mutation_intensity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(RarityBand::from_intensity(0), RarityBand::Common);
        assert_eq!(RarityBand::from_intensity(195), RarityBand::Legendary);
        assert_eq!(RarityBand::from_intensity(255), RarityBand::Mythic);
        assert_eq!(RarityBand::from_intensity(50), RarityBand::Uncommon);
        assert_eq!(RarityBand::from_intensity(51), RarityBand::Rare);
        assert_eq!(RarityBand::from_intensity(101), RarityBand::Epic);
    }

    #[test]
    fn test_ranges_partition_the_byte() {
        for value in 0..=255u8 {
            let owners: Vec<RarityBand> = RarityBand::ALL
                .iter()
                .copied()
                .filter(|band| band.range().contains(&value))
                .collect();
            assert_eq!(owners, vec![RarityBand::from_intensity(value)]);
        }
    }

    #[test]
    fn test_mutated_threshold() {
        assert!(!RarityBand::Rare.is_mutated());
        assert!(RarityBand::Epic.is_mutated());
        assert!(RarityBand::Mythic.is_mutated());
    }
}
