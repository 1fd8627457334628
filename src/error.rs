//! Error taxonomy for the Nexus engine
//!
//! Every failure is a plain value handed back to the caller. Nothing here is
//! transient, so nothing is retried: a rejected trait stays rejected and a
//! render before birth stays a render before birth.

/// Errors surfaced by trait validation, evolution and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NexusError {
    #[error("Invalid trait {field}: {value} (expected {expected})")]
    InvalidTrait {
        field: &'static str,
        value: u64,
        expected: &'static str,
    },

    #[error("Time {now} precedes birth time {birth_time}")]
    TimeBeforeBirth { now: u64, birth_time: u64 },

    #[error("Render failure: {0}")]
    RenderFailure(String),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

impl NexusError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<u64>, expected: &'static str) -> Self {
        let value = value.into();
        log::warn!("Rejected {}={} (expected {})", field, value, expected);
        NexusError::InvalidTrait {
            field,
            value,
            expected,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NexusError>;
