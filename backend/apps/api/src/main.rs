//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `auth::AuthError` / `kernel::error::AppError`.

mod settings;

use std::sync::Arc;

use auth::application::{BootstrapAdminUseCase, BootstrapOutcome};
use auth::domain::repository::AccountRepository;
use auth::{AuthConfig, InMemoryAccountRepository, PgAccountRepository, portal_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(config = ?settings.auth, "Auth configuration loaded");

    let app = match settings.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(PgAccountRepository::new(pool), &settings).await?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory only");
            build_app(InMemoryAccountRepository::new(), &settings).await?
        }
    };

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed the admin (if configured) and assemble the full router
async fn build_app<R>(repo: R, settings: &Settings) -> anyhow::Result<Router>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    if let Some(input) = settings.admin.clone() {
        bootstrap_admin(repo.clone(), settings.auth.clone(), input).await?;
    }

    Ok(portal_router(repo, settings.auth.clone())?
        .layer(TraceLayer::new_for_http())
        .layer(cors(&settings.frontend_origins)))
}

async fn bootstrap_admin<R>(
    repo: R,
    config: AuthConfig,
    input: auth::application::BootstrapAdminInput,
) -> anyhow::Result<()>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let outcome = BootstrapAdminUseCase::new(Arc::new(repo), Arc::new(config))
        .execute(input)
        .await?;

    if let BootstrapOutcome::Created(account) = outcome {
        tracing::info!(account_id = %account.account_id, "Admin account ready");
    }

    Ok(())
}

fn cors(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
