use std::sync::Arc;

use super::common::*;
use crate::matching::outcome::{MatchFailure, MatchOutcomeExt};

#[test]
fn find_best_matching_client_projects_the_client_name() {
    let verifier = Arc::new(ScriptedVerifier::answering(true));
    let service = service_with(verifier);

    let client = service
        .find_best_matching_client(&tony_hoare())
        .expect("match exists");
    assert_eq!(client, "Aviation client");
}

#[test]
fn find_best_matching_client_propagates_the_miss_unchanged() {
    let verifier = Arc::new(ScriptedVerifier::answering(true));
    let service = service_with(verifier);

    match service.find_best_matching_client(&uncle_bob()) {
        Err(MatchFailure::NoMatchingAssignment { consultant }) => {
            assert_eq!(consultant.name, "Uncle Bob");
        }
        other => panic!("expected logical miss, got {other:?}"),
    }
}

#[test]
fn match_failure_short_circuits_before_the_verifier() {
    let verifier = Arc::new(ScriptedVerifier::failing("service down"));
    let service = service_with(verifier.clone());

    let outcome = service.verify_remote_eligibility(&uncle_bob());

    assert!(matches!(
        outcome,
        Err(MatchFailure::NoMatchingAssignment { .. })
    ));
    assert_eq!(verifier.calls(), 0, "verifier must not run after a miss");
}

#[test]
fn verifier_fault_becomes_the_transient_kind() {
    let verifier = Arc::new(ScriptedVerifier::failing("service down"));
    let service = service_with(verifier.clone());

    match service.verify_remote_eligibility(&tony_hoare()) {
        Err(MatchFailure::RemoteServiceUnavailable { cause }) => {
            assert!(cause.to_string().contains("service down"));
        }
        other => panic!("expected transient failure, got {other:?}"),
    }
    assert_eq!(verifier.calls(), 1);
}

#[test]
fn remote_friendly_client_yields_a_structured_success() {
    let verifier = Arc::new(ScriptedVerifier::answering(true));
    let service = service_with(verifier);

    let eligibility = service
        .verify_remote_eligibility(&tony_hoare())
        .expect("remote check succeeds");
    assert!(eligibility.remote_friendly);
    assert_eq!(eligibility.assignment.client_name, "Aviation client");
}

#[test]
fn declined_remote_work_is_a_success_even_for_remote_only_consultants() {
    let verifier = Arc::new(ScriptedVerifier::answering(false));
    let service = service_with(verifier);

    let consultant = tony_hoare().remote_only();
    let eligibility = service
        .verify_remote_eligibility(&consultant)
        .expect("a definite 'no' is not a failure");
    assert!(!eligibility.remote_friendly);
}

#[test]
fn transient_outages_recover_selectively() {
    let verifier = Arc::new(ScriptedVerifier::failing("service down"));
    let service = service_with(verifier);

    // Callers may default an outage, but a miss must keep its kind.
    let defaulted = service
        .verify_remote_eligibility(&tony_hoare())
        .map(|eligibility| eligibility.remote_friendly)
        .recover_transient(|_cause| Ok(false));
    assert!(!defaulted.expect("outage defaulted"));

    let miss = service
        .verify_remote_eligibility(&uncle_bob())
        .map(|eligibility| eligibility.remote_friendly)
        .recover_transient(|_cause| Ok(false));
    assert!(matches!(
        miss,
        Err(MatchFailure::NoMatchingAssignment { .. })
    ));
}
