use serde::{Deserialize, Serialize};

use super::domain::{Assignment, Consultant};
use super::verifier::RemoteCheckError;

/// Outcome of a pipeline invocation: success or one of the named failure
/// kinds. Absence of a match is only ever represented through
/// [`MatchFailure::NoMatchingAssignment`], never through an empty success.
pub type MatchOutcome<T> = Result<T, MatchFailure>;

/// Closed failure taxonomy shared by both pipeline stages.
///
/// Extensible only by adding variants; no stage is allowed to escape the
/// pipeline with an error outside this enum.
#[derive(Debug, thiserror::Error)]
pub enum MatchFailure {
    /// Logical, data-dependent miss: no catalogue assignment shares a skill
    /// with the consultant. Deterministic for a fixed catalogue.
    #[error("no assignment matches the skills of consultant '{}'", .consultant.name)]
    NoMatchingAssignment { consultant: Consultant },
    /// Transient infrastructure outage reported by the remote verifier. The
    /// cause is kept for diagnostics; the kind alone is enough to dispatch on.
    #[error("remote verification service unavailable")]
    RemoteServiceUnavailable {
        #[source]
        cause: RemoteCheckError,
    },
}

impl MatchFailure {
    /// True for failures whose recurrence is independent of the input.
    pub fn is_transient(&self) -> bool {
        matches!(self, MatchFailure::RemoteServiceUnavailable { .. })
    }

    /// True for failures that are a deterministic function of the input data.
    pub fn is_logical(&self) -> bool {
        matches!(self, MatchFailure::NoMatchingAssignment { .. })
    }
}

/// Structured success payload of the remote-eligibility operation.
///
/// A matched assignment whose client declines remote work is a definite
/// answer, so `remote_friendly: false` travels on the success branch even for
/// `remote_only` consultants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEligibility {
    pub assignment: Assignment,
    pub remote_friendly: bool,
}

/// Selective recovery combinators over [`MatchOutcome`].
pub trait MatchOutcomeExt<T> {
    /// Recover from the transient kind only; logical misses pass through
    /// untouched. The fallback is itself fallible and its failure stays
    /// inside the closed union.
    fn recover_transient(self, fallback: impl FnOnce(RemoteCheckError) -> MatchOutcome<T>)
        -> MatchOutcome<T>;

    /// Collapse any failure into a default value.
    fn value_or(self, default: T) -> T;
}

impl<T> MatchOutcomeExt<T> for MatchOutcome<T> {
    fn recover_transient(
        self,
        fallback: impl FnOnce(RemoteCheckError) -> MatchOutcome<T>,
    ) -> MatchOutcome<T> {
        match self {
            Err(MatchFailure::RemoteServiceUnavailable { cause }) => fallback(cause),
            other => other,
        }
    }

    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }
}
