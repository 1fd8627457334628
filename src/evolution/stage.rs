//! EvolutionStage — four life stages driven purely by age
//!
//! The thresholds (7, 28 and 84 days) are the contract. Stage names are
//! presentation only and never feed back into any computation.

use crate::error::Result;
use crate::genome::TraitRecord;
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Age at which each stage begins, in seconds
pub const PULSE_AT: u64 = 7 * SECONDS_PER_DAY;
pub const FLOW_AT: u64 = 28 * SECONDS_PER_DAY;
pub const NEXUS_AT: u64 = 84 * SECONDS_PER_DAY;

/// Life stage of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EvolutionStage {
    Spark = 1,
    Pulse = 2,
    Flow = 3,
    Nexus = 4,
}

impl EvolutionStage {
    pub const ALL: [EvolutionStage; 4] = [
        EvolutionStage::Spark,
        EvolutionStage::Pulse,
        EvolutionStage::Flow,
        EvolutionStage::Nexus,
    ];

    /// Classify an age in seconds
    pub fn from_age(age_secs: u64) -> Self {
        if age_secs >= NEXUS_AT {
            EvolutionStage::Nexus
        } else if age_secs >= FLOW_AT {
            EvolutionStage::Flow
        } else if age_secs >= PULSE_AT {
            EvolutionStage::Pulse
        } else {
            EvolutionStage::Spark
        }
    }

    /// Stage number, 1 through 4
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            EvolutionStage::Spark => "Spark",
            EvolutionStage::Pulse => "Pulse",
            EvolutionStage::Flow => "Flow",
            EvolutionStage::Nexus => "Nexus",
        }
    }

    /// Age at which this stage begins
    pub fn starts_at(self) -> u64 {
        match self {
            EvolutionStage::Spark => 0,
            EvolutionStage::Pulse => PULSE_AT,
            EvolutionStage::Flow => FLOW_AT,
            EvolutionStage::Nexus => NEXUS_AT,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            EvolutionStage::Spark => Some(EvolutionStage::Pulse),
            EvolutionStage::Pulse => Some(EvolutionStage::Flow),
            EvolutionStage::Flow => Some(EvolutionStage::Nexus),
            EvolutionStage::Nexus => None,
        }
    }

    pub fn is_final(self) -> bool {
        self.next().is_none()
    }
}

/// Where an entity sits inside its current stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageProgress {
    pub stage: EvolutionStage,
    pub age_secs: u64,
    /// Age at which the next stage begins, `None` once final
    pub next_stage_at: Option<u64>,
    /// Fraction of the current stage already lived, 1.0 when final
    pub fraction: f64,
}

impl StageProgress {
    pub fn from_age(age_secs: u64) -> Self {
        let stage = EvolutionStage::from_age(age_secs);
        let next_stage_at = stage.next().map(EvolutionStage::starts_at);
        let fraction = match next_stage_at {
            Some(end) => {
                let start = stage.starts_at();
                (age_secs - start) as f64 / (end - start) as f64
            }
            None => 1.0,
        };
        Self {
            stage,
            age_secs,
            next_stage_at,
            fraction,
        }
    }

    /// Seconds until the next transition, `None` once final
    pub fn time_until_next_stage(&self) -> Option<u64> {
        self.next_stage_at.map(|at| at - self.age_secs)
    }
}

/// Stage of a record at `now`
pub fn evolution_stage(record: &TraitRecord, now: u64) -> Result<EvolutionStage> {
    Ok(EvolutionStage::from_age(record.age_at(now)?))
}

/// Stage plus in-stage progress of a record at `now`
pub fn stage_progress(record: &TraitRecord, now: u64) -> Result<StageProgress> {
    Ok(StageProgress::from_age(record.age_at(now)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(EvolutionStage::from_age(0), EvolutionStage::Spark);
        assert_eq!(EvolutionStage::from_age(PULSE_AT - 1), EvolutionStage::Spark);
        assert_eq!(EvolutionStage::from_age(PULSE_AT), EvolutionStage::Pulse);
        assert_eq!(EvolutionStage::from_age(FLOW_AT - 1), EvolutionStage::Pulse);
        assert_eq!(EvolutionStage::from_age(FLOW_AT), EvolutionStage::Flow);
        assert_eq!(EvolutionStage::from_age(NEXUS_AT - 1), EvolutionStage::Flow);
        assert_eq!(EvolutionStage::from_age(NEXUS_AT), EvolutionStage::Nexus);
        assert_eq!(EvolutionStage::from_age(u64::MAX), EvolutionStage::Nexus);
    }

    #[test]
    fn test_numbers_and_order() {
        let numbers: Vec<u8> = EvolutionStage::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(EvolutionStage::Spark < EvolutionStage::Nexus);
        for stage in EvolutionStage::ALL {
            assert_eq!(EvolutionStage::from_age(stage.starts_at()), stage);
        }
        assert!(EvolutionStage::Nexus.is_final());
    }

    #[test]
    fn test_progress() {
        let p = StageProgress::from_age(0);
        assert_eq!(p.stage, EvolutionStage::Spark);
        assert_eq!(p.fraction, 0.0);
        assert_eq!(p.time_until_next_stage(), Some(PULSE_AT));

        let mid_pulse = PULSE_AT + (FLOW_AT - PULSE_AT) / 2;
        let p = StageProgress::from_age(mid_pulse);
        assert_eq!(p.stage, EvolutionStage::Pulse);
        assert!((p.fraction - 0.5).abs() < 1e-9);

        let p = StageProgress::from_age(NEXUS_AT + 5);
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.next_stage_at, None);
        assert_eq!(p.time_until_next_stage(), None);
    }
}
