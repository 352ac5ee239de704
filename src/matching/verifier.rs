use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

/// External collaborator answering whether a client accepts remote work.
///
/// Implementations may fail on any invocation, independent of input. The
/// pipeline maps every such failure to
/// [`super::MatchFailure::RemoteServiceUnavailable`]; injecting the trait
/// rather than a concrete client is what lets tests script both branches.
pub trait RemoteVerifier: Send + Sync {
    fn check_remote_friendly(&self, client_name: &str) -> Result<bool, RemoteCheckError>;
}

/// Error raised by a remote verifier invocation.
#[derive(Debug, thiserror::Error)]
pub enum RemoteCheckError {
    #[error("remote check transport failed: {0}")]
    Transport(String),
}

/// Stand-in for the real network-backed verifier: answers from a fixed set of
/// remote-friendly clients, sleeps to simulate latency, and goes down with a
/// configurable probability (the real service is roughly one-in-three flaky).
pub struct SimulatedRemoteChecker {
    remote_clients: BTreeSet<String>,
    failure_rate: f32,
    latency: Duration,
}

impl SimulatedRemoteChecker {
    pub const DEFAULT_FAILURE_RATE: f32 = 1.0 / 3.0;

    pub fn new(failure_rate: f32, latency: Duration) -> Self {
        Self {
            remote_clients: ["Aviation client".to_string()].into_iter().collect(),
            failure_rate,
            latency,
        }
    }

    pub fn with_remote_clients(
        mut self,
        clients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.remote_clients = clients.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for SimulatedRemoteChecker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAILURE_RATE, Duration::from_millis(1500))
    }
}

impl RemoteVerifier for SimulatedRemoteChecker {
    fn check_remote_friendly(&self, client_name: &str) -> Result<bool, RemoteCheckError> {
        if fastrand::f32() < self.failure_rate {
            return Err(RemoteCheckError::Transport("service down".to_string()));
        }

        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        Ok(self.remote_clients.contains(client_name))
    }
}
