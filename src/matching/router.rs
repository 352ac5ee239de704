use std::sync::Arc;

use axum::{extract::State, routing::post, Router};
use serde_json::{json, Value};

use super::domain::Consultant;
use super::outcome::RemoteEligibility;
use super::service::MatchingService;
use super::verifier::RemoteVerifier;
use crate::error::AppError;

/// Router builder exposing the two pipeline operations over HTTP.
///
/// Handlers return `Result<_, AppError>`; the failure-kind-to-status mapping
/// (miss → 404, outage → 503) lives on [`AppError`]'s `IntoResponse` impl.
pub fn matching_router<V>(service: Arc<MatchingService<V>>) -> Router
where
    V: RemoteVerifier + 'static,
{
    Router::new()
        .route("/api/v1/matching/client", post(best_client_handler::<V>))
        .route(
            "/api/v1/matching/remote-eligibility",
            post(remote_eligibility_handler::<V>),
        )
        .with_state(service)
}

pub(crate) async fn best_client_handler<V>(
    State(service): State<Arc<MatchingService<V>>>,
    axum::Json(consultant): axum::Json<Consultant>,
) -> Result<axum::Json<Value>, AppError>
where
    V: RemoteVerifier + 'static,
{
    let client_name = service.find_best_matching_client(&consultant)?;
    Ok(axum::Json(json!({
        "consultant": consultant.name,
        "client_name": client_name,
    })))
}

pub(crate) async fn remote_eligibility_handler<V>(
    State(service): State<Arc<MatchingService<V>>>,
    axum::Json(consultant): axum::Json<Consultant>,
) -> Result<axum::Json<RemoteEligibility>, AppError>
where
    V: RemoteVerifier + 'static,
{
    let eligibility = service.verify_remote_eligibility(&consultant)?;
    Ok(axum::Json(eligibility))
}
