//! Application builder: wires storage, auth and services into an Axum app.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use staybook_auth::{JwtDecoder, JwtEncoder, PasswordHasher, SessionManager};
use staybook_core::config::AppConfig;
use staybook_core::error::AppError;
use staybook_database::repositories::{
    BookingRepository, ListingRepository, LocationRepository, ReviewRepository, UserRepository,
};
use staybook_database::seed::seed_database;
use staybook_database::{DataStore, open_backend};
use staybook_service::{BookingService, ListingService, ReviewService};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Opens the store and constructs every repository and service.
///
/// With `reseed` the stored snapshot is replaced by a fresh seed even when
/// it is current.
pub async fn build_state(config: AppConfig, reseed: bool) -> Result<AppState, AppError> {
    // ── Step 1: Storage ──────────────────────────────────────────
    let backend = open_backend(&config.store).await?;
    let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);

    let seed_hasher = Arc::clone(&password_hasher);
    let seed = move || seed_database(|p| seed_hasher.hash_password(p));

    let store = DataStore::open(backend, config.store.key.clone(), seed.clone()).await?;
    if reseed {
        info!("Reseeding on request");
        store.replace(seed()?).await?;
    }
    let store = Arc::new(store);

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(Arc::clone(&store)));
    let location_repo = Arc::new(LocationRepository::new(Arc::clone(&store)));
    let listing_repo = Arc::new(ListingRepository::new(Arc::clone(&store)));
    let booking_repo = Arc::new(BookingRepository::new(Arc::clone(&store)));
    let review_repo = Arc::new(ReviewRepository::new(Arc::clone(&store)));

    // ── Step 3: Auth ─────────────────────────────────────────────
    if config.auth.use_auth && config.auth.jwt_secret == "CHANGE_ME_IN_PRODUCTION" {
        warn!("Using the default token secret");
    }
    let session_manager = Arc::new(SessionManager::new(
        Arc::new(JwtEncoder::new(&config.auth)),
        Arc::new(JwtDecoder::new(&config.auth)),
        user_repo,
        password_hasher,
        config.auth.clone(),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let listing_service = Arc::new(ListingService::new(
        Arc::clone(&listing_repo),
        location_repo,
    ));
    let booking_service = Arc::new(BookingService::new(
        booking_repo,
        Arc::clone(&listing_repo),
    ));
    let review_service = Arc::new(ReviewService::new(review_repo, listing_repo));

    Ok(AppState {
        config: Arc::new(config),
        store,
        session_manager,
        listing_service,
        booking_service,
        review_service,
    })
}

/// Runs the Staybook server until Ctrl+C, then drains in-flight requests
/// for at most `server.shutdown_grace_seconds`.
pub async fn run_server(config: AppConfig, reseed: bool) -> Result<(), AppError> {
    info!("Starting Staybook server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config, reseed).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Staybook server listening on {}", addr);

    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
        .into_future();

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            shutdown_signal().await;
            info!("Shutdown requested, draining connections");
            shutdown.cancel();
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, stopping");
        }
    }

    info!("Staybook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
