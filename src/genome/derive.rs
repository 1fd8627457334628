//! Reference trait derivation from creation-time seed material
//!
//! The minting layer owns entropy. It hands over opaque seed bytes and the
//! genesis class, and this module turns them into a `TraitRecord` the same way
//! on every host. Rendering never calls back in here.

use super::record::{CoreGeometry, NetworkDensity, ParticleSystem, PathwayPattern, TraitRecord};
use crate::config::MintPolicy;
use crate::error::Result;
use log::info;
use sha2::{Digest, Sha256};

const DOMAIN_TAG: &[u8] = b"nexus-traits-v1";

/// Derive the immutable trait set for a new entity
pub fn create_trait_record(
    seed: &[u8],
    enhanced: bool,
    id: u64,
    birth_time: u64,
    policy: &MintPolicy,
) -> Result<TraitRecord> {
    let digest = trait_digest(seed, enhanced, id);

    let core = CoreGeometry::from_index((digest[0] % 8) as u32)?;
    let pathway = PathwayPattern::from_index((digest[1] % 5) as u32)?;
    let particles = ParticleSystem::from_index((digest[2] % 6) as u32)?;
    let density = NetworkDensity::new(1 + (digest[3] % 5) as u32)?;
    let mutation = mutation_roll(&digest, enhanced, policy);

    let record = TraitRecord::new(id, birth_time, core, pathway, particles, density, mutation, enhanced)?;
    info!("Derived traits: {}", record.summary());
    Ok(record)
}

/// Mutation intensity for a digest: 0 when the roll misses, else 1..=255
fn mutation_roll(digest: &[u8; 32], enhanced: bool, policy: &MintPolicy) -> u8 {
    let roll = u16::from_be_bytes([digest[4], digest[5]]) % MintPolicy::BPS_SCALE;
    if roll < policy.rate_for(enhanced) {
        1 + digest[6] % 255
    } else {
        0
    }
}

fn trait_digest(seed: &[u8], enhanced: bool, id: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    hasher.update(seed);
    hasher.update(id.to_be_bytes());
    hasher.update([enhanced as u8]);
    hasher.finalize().into()
}

/// Hex fingerprint of the seed material, for audit logs
pub fn seed_fingerprint(seed: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    hasher.update(seed);
    hex::encode(&hasher.finalize()[..8])
}
