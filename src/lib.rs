//! Consultant-to-assignment matching with a typed, closed failure taxonomy.
//!
//! The crate centers on a two-stage pipeline: a deterministic matching stage
//! over a read-only assignment catalogue, followed by an unreliable remote
//! check of whether the matched client accepts remote work. Both stages report
//! through the same closed [`matching::MatchFailure`] union so callers can
//! distinguish a logical miss from a transient outage without string parsing.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
