//! Genome — the Trait Model and everything that reads it by name
//!
//! A genome is fixed at creation: geometry, pathway pattern, particle system,
//! density, mutation intensity and genesis class, plus id and birth time.

mod derive;
mod describe;
mod record;

pub use derive::{create_trait_record, seed_fingerprint};
pub use describe::{describe_traits, AttributeValue, TokenMetadata, TraitAttribute};
pub use record::{
    CoreGeometry, NetworkDensity, ParticleSystem, PathwayPattern, RawTraitRecord, TraitRecord,
    ENCODED_LEN,
};
