//! Failures of the external cluster classifier

use thiserror::Error;

/// Why a cluster could not be obtained for a travel plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("prediction service returned {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("prediction service rejected the plan: {0}")]
    Rejected(String),

    #[error("no cluster assigned in response")]
    NoClusterAssigned,

    #[error("invalid cluster in response: {0}")]
    InvalidCluster(String),

    #[error("prediction request timed out")]
    Timeout,

    #[error("prediction service unreachable: {0}")]
    Transport(String),

    #[error("malformed prediction response: {0}")]
    Decode(String),
}

impl PredictionError {
    /// Network-level failures, as opposed to an answer the service gave
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport(_))
    }
}
