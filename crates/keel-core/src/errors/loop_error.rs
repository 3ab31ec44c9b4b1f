//! Remediation loop errors. Both variants terminate the loop.

use super::{ChangeError, ParseError};

/// Errors that terminate a remediation loop run.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    /// The external remediation agent faulted. Never retried within the
    /// same iteration; the loop terminates and reports.
    #[error("Remediation step failed at iteration {iteration}: {message}")]
    Remediation { iteration: u32, message: String },

    /// Cancellation observed at an iteration boundary.
    #[error("Loop cancelled before iteration {iteration}")]
    Cancelled { iteration: u32 },

    #[error("Change detection failed: {0}")]
    Change(#[from] ChangeError),

    #[error("Review failed: {0}")]
    Review(#[from] ParseError),
}
