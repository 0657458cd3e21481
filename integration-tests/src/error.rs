use thiserror::Error;

/// Outcome of a harness call that did not succeed
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The contract panicked while handling the call. Negative tests expect this.
    #[error("`{method}` was rejected: {message}")]
    Rejected { method: String, message: String },

    /// The sandbox or RPC layer failed before the contract could answer
    #[error("sandbox error: {0}")]
    Workspaces(#[from] near_workspaces::error::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HarnessError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, HarnessError::Rejected { .. })
    }
}

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
