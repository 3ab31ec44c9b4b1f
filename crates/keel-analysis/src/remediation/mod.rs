//! The remediation loop: review -> remediate -> re-review until the change
//! set is clean or the iteration budget is exhausted.
//!
//! Collaborators sit behind seam traits so the loop can be driven without a
//! real workspace: the conformance engine implements `Reviewer`, the change
//! detector implements `ChangeSource`, and the external agent implements
//! `RemediationAgent`.

use serde::{Deserialize, Serialize};

use keel_core::{CancelToken, ChangeError, LoopError, ParseError};

use crate::changes::{ChangeDetector, VcsClient};
use crate::engine::{ArchitectureReview, ConformanceEngine};

/// Loop states. Terminal states are the two `Terminated` variants; the loop
/// never revisits `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    Idle,
    Reviewing,
    Clean,
    NeedsRemediation,
    Remediating,
    Terminated(Outcome),
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The last review had no high-severity finding.
    Success,
    /// High-severity findings persisted through the iteration budget.
    MaxIterationsReached,
}

/// The change set feeding one review pass.
#[derive(Debug, Clone, Default)]
pub struct SessionChanges {
    pub diff_text: String,
    pub touched: Vec<String>,
}

/// Source of the current session change set.
pub trait ChangeSource {
    fn current(&mut self) -> Result<SessionChanges, ChangeError>;
}

impl<V: VcsClient> ChangeSource for ChangeDetector<V> {
    fn current(&mut self) -> Result<SessionChanges, ChangeError> {
        Ok(SessionChanges {
            diff_text: self.diff_text(),
            touched: self.diff(),
        })
    }
}

/// One review pass over the current change set.
pub trait Reviewer {
    fn review(
        &mut self,
        diff_text: &str,
        touched: &[String],
    ) -> Result<ArchitectureReview, ParseError>;
}

impl Reviewer for ConformanceEngine {
    fn review(
        &mut self,
        diff_text: &str,
        touched: &[String],
    ) -> Result<ArchitectureReview, ParseError> {
        Ok(ConformanceEngine::review(self, diff_text, touched))
    }
}

/// The external remediation agent. Invoked at most once per iteration,
/// strictly sequentially: its completion signals the loop to re-review.
pub trait RemediationAgent {
    fn remediate(&mut self, review: &ArchitectureReview) -> Result<(), String>;
}

/// Progress snapshot exposed for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RemediationLoopState {
    pub iteration: u32,
    pub max_iterations: u32,
    pub state: LoopState,
    pub last_review: Option<ArchitectureReview>,
}

/// Final loop outcome: iteration count, terminal state, and the last
/// review's findings verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct LoopReport {
    pub iterations: u32,
    pub outcome: Outcome,
    pub review: ArchitectureReview,
}

/// Drives the state machine. Strictly sequential; cancellation is honored
/// at iteration boundaries only.
pub struct RemediationLoop {
    state: LoopState,
    iteration: u32,
    max_iterations: u32,
    last_review: Option<ArchitectureReview>,
    cancel: CancelToken,
}

impl RemediationLoop {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            state: LoopState::Idle,
            iteration: 0,
            max_iterations,
            last_review: None,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn progress(&self) -> RemediationLoopState {
        RemediationLoopState {
            iteration: self.iteration,
            max_iterations: self.max_iterations,
            state: self.state,
            last_review: self.last_review.clone(),
        }
    }

    fn transition(&mut self, next: LoopState) {
        tracing::debug!(from = ?self.state, to = ?next, iteration = self.iteration, "loop transition");
        self.state = next;
    }

    /// Run to termination.
    ///
    /// `Success` as soon as a review carries no high-severity finding
    /// (possibly at iteration 0). `MaxIterationsReached` when highs persist
    /// at the budget; no further remediation runs. A failed remediation
    /// step terminates the loop without retry.
    pub fn run(
        &mut self,
        changes: &mut impl ChangeSource,
        reviewer: &mut impl Reviewer,
        agent: &mut impl RemediationAgent,
    ) -> Result<LoopReport, LoopError> {
        loop {
            if self.cancel.is_cancelled() {
                return Err(LoopError::Cancelled {
                    iteration: self.iteration,
                });
            }

            self.transition(LoopState::Reviewing);
            let session = changes.current()?;
            let review = reviewer.review(&session.diff_text, &session.touched)?;
            let clean = !review.has_high_severity();
            self.last_review = Some(review.clone());

            if clean {
                self.transition(LoopState::Clean);
                self.transition(LoopState::Terminated(Outcome::Success));
                return Ok(LoopReport {
                    iterations: self.iteration,
                    outcome: Outcome::Success,
                    review,
                });
            }

            if self.iteration >= self.max_iterations {
                self.transition(LoopState::Terminated(Outcome::MaxIterationsReached));
                return Ok(LoopReport {
                    iterations: self.iteration,
                    outcome: Outcome::MaxIterationsReached,
                    review,
                });
            }

            self.transition(LoopState::NeedsRemediation);
            self.transition(LoopState::Remediating);
            agent
                .remediate(&review)
                .map_err(|message| LoopError::Remediation {
                    iteration: self.iteration,
                    message,
                })?;
            self.iteration += 1;
        }
    }
}
