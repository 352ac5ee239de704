use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use consultant_match::config::AppConfig;
use consultant_match::error::AppError;
use consultant_match::matching::{
    matching_router, AssignmentCatalog, Consultant, MatchFailure, MatchingService,
    SimulatedRemoteChecker,
};
use consultant_match::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct OpsState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Consultant Matching Service",
    about = "Match consultants to client assignments and check remote-work eligibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the matching pipeline once for a consultant and print the outcome
    Match(MatchArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Consultant name
    #[arg(long, default_value = "Tony Hoare")]
    name: String,
    /// A skill the consultant offers (repeat for each skill)
    #[arg(long = "skill", required = true)]
    skills: Vec<String>,
    /// Mark the consultant as only interested in remote assignments
    #[arg(long)]
    remote_only: bool,
    /// Also check whether the matched client accepts remote work
    #[arg(long)]
    check_remote: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Match(args) => run_match(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = OpsState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let verifier = Arc::new(SimulatedRemoteChecker::new(
        config.verifier.failure_rate,
        config.verifier.latency,
    ));
    let service = Arc::new(MatchingService::new(AssignmentCatalog::standard(), verifier));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(matching_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "consultant matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let consultant = consultant_from_args(&args);

    let verifier = Arc::new(SimulatedRemoteChecker::new(
        config.verifier.failure_rate,
        config.verifier.latency,
    ));
    let service = MatchingService::new(AssignmentCatalog::standard(), verifier);

    match service.find_best_matching_client(&consultant) {
        Ok(client_name) => {
            println!(
                "Consultant {} is best assigned to client: {client_name}",
                consultant.name
            );
        }
        Err(failure) => {
            println!("{failure}");
            return Ok(());
        }
    }

    if args.check_remote {
        match service.verify_remote_eligibility(&consultant) {
            Ok(eligibility) if eligibility.remote_friendly => {
                println!(
                    "{} allows remote work for consultant {}",
                    eligibility.assignment.client_name, consultant.name
                );
            }
            Ok(eligibility) => {
                println!(
                    "{} does not allow remote work{}",
                    eligibility.assignment.client_name,
                    if consultant.remote_only {
                        " (consultant only works remotely)"
                    } else {
                        ""
                    }
                );
            }
            Err(failure @ MatchFailure::RemoteServiceUnavailable { .. }) => {
                println!("{failure}; try again later");
            }
            Err(failure) => {
                println!("{failure}");
            }
        }
    }

    Ok(())
}

fn consultant_from_args(args: &MatchArgs) -> Consultant {
    let consultant = Consultant::new(args.name.clone(), args.skills.iter().cloned());
    if args.remote_only {
        consultant.remote_only()
    } else {
        consultant
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
