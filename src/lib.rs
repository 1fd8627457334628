//! Nexus — generative traits, time-driven evolution and SVG composition
//!
//! An entity is an immutable `TraitRecord`. Its look at any moment is a pure
//! function of that record, the current time and an animation frame: no
//! clock, no entropy and no cached image are ever consulted.

pub mod config;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{MintPolicy, RenderConfig};
pub use error::{NexusError, Result};
pub use evolution::{evolution_stage, rarity_band, stage_progress, EvolutionStage, RarityBand, StageProgress};
pub use genome::{
    create_trait_record, describe_traits, CoreGeometry, NetworkDensity, ParticleSystem, PathwayPattern,
    RawTraitRecord, TokenMetadata, TraitAttribute, TraitRecord,
};
pub use render::{render, Compositor, Document, Palette};
