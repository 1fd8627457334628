//! Evolution Engine — stage and rarity as pure functions
//!
//! Stage depends on (birth time, now); rarity depends on the stored mutation
//! intensity. Neither is ever written back to the record.

mod rarity;
mod stage;

pub use rarity::{rarity_band, RarityBand};
pub use stage::{
    evolution_stage, stage_progress, EvolutionStage, StageProgress, FLOW_AT, NEXUS_AT, PULSE_AT,
    SECONDS_PER_DAY,
};
