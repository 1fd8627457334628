//! TraitRecord — the immutable attribute bundle of one entity
//!
//! A record is fixed at creation and only ever read afterwards. Evolution
//! changes how a record is drawn, never what it stores.
//!
//! Two outer forms exist:
//! - `RawTraitRecord`: wide integers, what arrives from JSON or a foreign host
//! - a fixed 22-byte big-endian encoding (and its hex string) for compact transport
//!
//! Both are checked on the way in, so a `TraitRecord` in hand is always valid.

use crate::error::{NexusError, Result};
use serde::{Deserialize, Serialize};

/// Length of the fixed-width binary encoding
pub const ENCODED_LEN: usize = 22;

const FLAG_ENHANCED: u8 = 0b0000_0001;

/// Central emblem geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CoreGeometry {
    Circle = 0,
    Diamond = 1,
    Hexagon = 2,
    Octagon = 3,
    Star = 4,
    Triangle = 5,
    Pentagon = 6,
    Cross = 7,
}

impl CoreGeometry {
    pub const ALL: [CoreGeometry; 8] = [
        CoreGeometry::Circle,
        CoreGeometry::Diamond,
        CoreGeometry::Hexagon,
        CoreGeometry::Octagon,
        CoreGeometry::Star,
        CoreGeometry::Triangle,
        CoreGeometry::Pentagon,
        CoreGeometry::Cross,
    ];

    pub fn from_index(value: u32) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| NexusError::invalid("core_geometry", value, "0..=7"))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            CoreGeometry::Circle => "Circle",
            CoreGeometry::Diamond => "Diamond",
            CoreGeometry::Hexagon => "Hexagon",
            CoreGeometry::Octagon => "Octagon",
            CoreGeometry::Star => "Star",
            CoreGeometry::Triangle => "Triangle",
            CoreGeometry::Pentagon => "Pentagon",
            CoreGeometry::Cross => "Cross",
        }
    }
}

/// Stroke style of the connecting pathways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PathwayPattern {
    Linear = 0,
    Curved = 1,
    Spiral = 2,
    Fractal = 3,
    Wave = 4,
}

impl PathwayPattern {
    pub const ALL: [PathwayPattern; 5] = [
        PathwayPattern::Linear,
        PathwayPattern::Curved,
        PathwayPattern::Spiral,
        PathwayPattern::Fractal,
        PathwayPattern::Wave,
    ];

    pub fn from_index(value: u32) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| NexusError::invalid("pathway_pattern", value, "0..=4"))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            PathwayPattern::Linear => "Linear",
            PathwayPattern::Curved => "Curved",
            PathwayPattern::Spiral => "Spiral",
            PathwayPattern::Fractal => "Fractal",
            PathwayPattern::Wave => "Wave",
        }
    }
}

/// Primitive used for the orbiting particle field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ParticleSystem {
    Circle = 0,
    Square = 1,
    Triangle = 2,
    Diamond = 3,
    Star = 4,
    Hexagon = 5,
}

impl ParticleSystem {
    pub const ALL: [ParticleSystem; 6] = [
        ParticleSystem::Circle,
        ParticleSystem::Square,
        ParticleSystem::Triangle,
        ParticleSystem::Diamond,
        ParticleSystem::Star,
        ParticleSystem::Hexagon,
    ];

    pub fn from_index(value: u32) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| NexusError::invalid("particle_system", value, "0..=5"))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ParticleSystem::Circle => "Circle",
            ParticleSystem::Square => "Square",
            ParticleSystem::Triangle => "Triangle",
            ParticleSystem::Diamond => "Diamond",
            ParticleSystem::Star => "Star",
            ParticleSystem::Hexagon => "Hexagon",
        }
    }
}

/// Network density, 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NetworkDensity(u8);

impl NetworkDensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(NexusError::invalid("network_density", value, "1..=5"))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for NetworkDensity {
    type Error = NexusError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NetworkDensity> for u32 {
    fn from(density: NetworkDensity) -> u32 {
        density.0 as u32
    }
}

/// Unvalidated record as received from an outer layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTraitRecord {
    pub id: u64,
    pub birth_time: u64,
    pub core_geometry: u32,
    pub pathway_pattern: u32,
    pub particle_system: u32,
    pub network_density: u32,
    pub mutation_intensity: u32,
    pub is_enhanced_genesis: bool,
}

/// Immutable, validated trait set of a single entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTraitRecord", into = "RawTraitRecord")]
pub struct TraitRecord {
    id: u64,
    birth_time: u64,
    core_geometry: CoreGeometry,
    pathway_pattern: PathwayPattern,
    particle_system: ParticleSystem,
    network_density: NetworkDensity,
    mutation_intensity: u8,
    is_enhanced_genesis: bool,
}

impl TraitRecord {
    /// Assemble a record from already-typed parts; only the id can still be wrong
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        birth_time: u64,
        core_geometry: CoreGeometry,
        pathway_pattern: PathwayPattern,
        particle_system: ParticleSystem,
        network_density: NetworkDensity,
        mutation_intensity: u8,
        is_enhanced_genesis: bool,
    ) -> Result<Self> {
        if id == 0 {
            return Err(NexusError::invalid("id", 0u64, ">= 1"));
        }
        Ok(Self {
            id,
            birth_time,
            core_geometry,
            pathway_pattern,
            particle_system,
            network_density,
            mutation_intensity,
            is_enhanced_genesis,
        })
    }

    /// Validate every field of a raw record
    pub fn from_raw(raw: RawTraitRecord) -> Result<Self> {
        let mutation_intensity = u8::try_from(raw.mutation_intensity)
            .map_err(|_| NexusError::invalid("mutation_intensity", raw.mutation_intensity, "0..=255"))?;
        Self::new(
            raw.id,
            raw.birth_time,
            CoreGeometry::from_index(raw.core_geometry)?,
            PathwayPattern::from_index(raw.pathway_pattern)?,
            ParticleSystem::from_index(raw.particle_system)?,
            NetworkDensity::new(raw.network_density)?,
            mutation_intensity,
            raw.is_enhanced_genesis,
        )
    }

    pub fn to_raw(&self) -> RawTraitRecord {
        RawTraitRecord {
            id: self.id,
            birth_time: self.birth_time,
            core_geometry: self.core_geometry.index() as u32,
            pathway_pattern: self.pathway_pattern.index() as u32,
            particle_system: self.particle_system.index() as u32,
            network_density: self.network_density.get() as u32,
            mutation_intensity: self.mutation_intensity as u32,
            is_enhanced_genesis: self.is_enhanced_genesis,
        }
    }

    /// Fixed-width big-endian encoding
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[0..8].copy_from_slice(&self.id.to_be_bytes());
        out[8..16].copy_from_slice(&self.birth_time.to_be_bytes());
        out[16] = self.core_geometry.index();
        out[17] = self.pathway_pattern.index();
        out[18] = self.particle_system.index();
        out[19] = self.network_density.get();
        out[20] = self.mutation_intensity;
        out[21] = if self.is_enhanced_genesis { FLAG_ENHANCED } else { 0 };
        out
    }

    /// Decode and validate the fixed-width form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODED_LEN {
            return Err(NexusError::invalid("encoding_length", bytes.len() as u64, "22 bytes"));
        }
        let flags = bytes[21];
        if flags & !FLAG_ENHANCED != 0 {
            return Err(NexusError::invalid("flags", flags, "only bit 0 may be set"));
        }
        let mut id = [0u8; 8];
        id.copy_from_slice(&bytes[0..8]);
        let mut birth = [0u8; 8];
        birth.copy_from_slice(&bytes[8..16]);

        Self::from_raw(RawTraitRecord {
            id: u64::from_be_bytes(id),
            birth_time: u64::from_be_bytes(birth),
            core_geometry: bytes[16] as u32,
            pathway_pattern: bytes[17] as u32,
            particle_system: bytes[18] as u32,
            network_density: bytes[19] as u32,
            mutation_intensity: bytes[20] as u32,
            is_enhanced_genesis: flags & FLAG_ENHANCED != 0,
        })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.encode())
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())
            .map_err(|_| NexusError::invalid("encoding_hex", s.len() as u64, "44 hex characters"))?;
        Self::decode(&bytes)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn birth_time(&self) -> u64 {
        self.birth_time
    }

    pub fn core_geometry(&self) -> CoreGeometry {
        self.core_geometry
    }

    pub fn pathway_pattern(&self) -> PathwayPattern {
        self.pathway_pattern
    }

    pub fn particle_system(&self) -> ParticleSystem {
        self.particle_system
    }

    pub fn network_density(&self) -> NetworkDensity {
        self.network_density
    }

    pub fn mutation_intensity(&self) -> u8 {
        self.mutation_intensity
    }

    pub fn is_enhanced_genesis(&self) -> bool {
        self.is_enhanced_genesis
    }

    /// Seconds elapsed since birth; rejects a time before birth
    pub fn age_at(&self, now: u64) -> Result<u64> {
        now.checked_sub(self.birth_time).ok_or(NexusError::TimeBeforeBirth {
            now,
            birth_time: self.birth_time,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Entity #{} | core={} | pathway={} | particles={} | density={} | mutation={} | enhanced={} | born={}",
            self.id,
            self.core_geometry.label(),
            self.pathway_pattern.label(),
            self.particle_system.label(),
            self.network_density.get(),
            self.mutation_intensity,
            self.is_enhanced_genesis,
            self.birth_time,
        )
    }
}

impl TryFrom<RawTraitRecord> for TraitRecord {
    type Error = NexusError;

    fn try_from(raw: RawTraitRecord) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl From<TraitRecord> for RawTraitRecord {
    fn from(record: TraitRecord) -> Self {
        record.to_raw()
    }
}
