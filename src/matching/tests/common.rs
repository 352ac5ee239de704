use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::matching::catalog::AssignmentCatalog;
use crate::matching::domain::Consultant;
use crate::matching::service::MatchingService;
use crate::matching::verifier::{RemoteCheckError, RemoteVerifier};

pub(super) fn tony_hoare() -> Consultant {
    Consultant::new("Tony Hoare", ["java", "spring"])
}

pub(super) fn uncle_bob() -> Consultant {
    Consultant::new("Uncle Bob", ["c++"])
}

/// Deterministic verifier double: always answers or always fails, and counts
/// invocations so tests can assert the short-circuit law.
pub(super) struct ScriptedVerifier {
    script: Script,
    calls: AtomicUsize,
}

enum Script {
    Answer(bool),
    Fail(String),
}

impl ScriptedVerifier {
    pub(super) fn answering(answer: bool) -> Self {
        Self {
            script: Script::Answer(answer),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn failing(message: &str) -> Self {
        Self {
            script: Script::Fail(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl RemoteVerifier for ScriptedVerifier {
    fn check_remote_friendly(&self, _client_name: &str) -> Result<bool, RemoteCheckError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.script {
            Script::Answer(answer) => Ok(*answer),
            Script::Fail(message) => Err(RemoteCheckError::Transport(message.clone())),
        }
    }
}

pub(super) fn service_with(verifier: Arc<ScriptedVerifier>) -> MatchingService<ScriptedVerifier> {
    MatchingService::new(AssignmentCatalog::standard(), verifier)
}
