//! Two-stage consultant matching pipeline.
//!
//! Stage one is a pure, deterministic search over the assignment catalogue
//! that can miss; stage two is a flaky remote check of the matched client's
//! remote-work policy. Both report through the closed [`MatchFailure`] union
//! so callers keep failure provenance without inspecting error text.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod outcome;
pub mod router;
pub mod service;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use catalog::AssignmentCatalog;
pub use domain::{Assignment, Consultant};
pub use engine::find_best_match;
pub use outcome::{MatchFailure, MatchOutcome, MatchOutcomeExt, RemoteEligibility};
pub use router::matching_router;
pub use service::MatchingService;
pub use verifier::{RemoteCheckError, RemoteVerifier, SimulatedRemoteChecker};
