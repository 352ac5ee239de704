use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::AssignmentCatalog;
use super::domain::Consultant;
use super::engine;
use super::outcome::{MatchFailure, MatchOutcome, RemoteEligibility};
use super::verifier::RemoteVerifier;

/// Pipeline composing the matching engine and the remote verifier behind the
/// shared [`MatchFailure`] taxonomy.
///
/// Each invocation is a single linear traversal with two short-circuit exits;
/// nothing is retried here and no state survives between calls, so concurrent
/// invocations for different consultants need no coordination.
pub struct MatchingService<V> {
    catalog: AssignmentCatalog,
    verifier: Arc<V>,
}

impl<V> MatchingService<V>
where
    V: RemoteVerifier + 'static,
{
    pub fn new(catalog: AssignmentCatalog, verifier: Arc<V>) -> Self {
        Self { catalog, verifier }
    }

    /// Best matching client name for the consultant.
    ///
    /// Projects [`Assignment::client_name`] on success; the failure kind of a
    /// miss propagates unchanged.
    pub fn find_best_matching_client(&self, consultant: &Consultant) -> MatchOutcome<String> {
        let assignment = engine::find_best_match(consultant, &self.catalog)?;
        debug!(
            consultant = %consultant.name,
            assignment = %assignment.name,
            "matched consultant to assignment"
        );
        Ok(assignment.client_name.clone())
    }

    /// Match the consultant, then ask the remote verifier whether the matched
    /// client accepts remote work.
    ///
    /// If the matching stage fails the verifier is never invoked. A verifier
    /// fault of any kind becomes [`MatchFailure::RemoteServiceUnavailable`];
    /// a client that simply declines remote work is a definite answer and
    /// travels on the success branch, also for `remote_only` consultants.
    pub fn verify_remote_eligibility(
        &self,
        consultant: &Consultant,
    ) -> MatchOutcome<RemoteEligibility> {
        let assignment = engine::find_best_match(consultant, &self.catalog)?.clone();

        let remote_friendly = self
            .verifier
            .check_remote_friendly(&assignment.client_name)
            .map_err(|cause| {
                warn!(
                    client = %assignment.client_name,
                    error = %cause,
                    "remote verifier unavailable"
                );
                MatchFailure::RemoteServiceUnavailable { cause }
            })?;

        debug!(
            consultant = %consultant.name,
            client = %assignment.client_name,
            remote_friendly,
            "remote eligibility resolved"
        );

        Ok(RemoteEligibility {
            assignment,
            remote_friendly,
        })
    }
}
