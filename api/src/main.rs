//! Credit Application API Server
//!
//! A REST backend for registering customers and requesting credit proposals.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresCreditRepository, PostgresCustomerRepository};
use app::{CreditService, CustomerService};
use config::Config;
use domain::ports::{CreditRepository, CustomerRepository};

/// Application state shared across all handlers
///
/// Generic over the repository ports so the same router runs against
/// Postgres in production and against the in-memory repositories in tests.
pub struct AppState<CR, RR>
where
    CR: CustomerRepository,
    RR: CreditRepository,
{
    pub customer_service: Arc<CustomerService<CR>>,
    pub credit_service: Arc<CreditService<RR, CR>>,
}

impl<CR, RR> Clone for AppState<CR, RR>
where
    CR: CustomerRepository,
    RR: CreditRepository,
{
    fn clone(&self) -> Self {
        Self {
            customer_service: self.customer_service.clone(),
            credit_service: self.credit_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router over any pair of repository implementations
pub fn router<CR, RR>(state: AppState<CR, RR>) -> Router
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/customers",
            post(handlers::create_customer::<CR, RR>).patch(handlers::update_customer::<CR, RR>),
        )
        .route(
            "/api/customers/:id",
            get(handlers::get_customer::<CR, RR>).delete(handlers::delete_customer::<CR, RR>),
        )
        .route(
            "/api/credits",
            post(handlers::create_credit::<CR, RR>).get(handlers::list_credits::<CR, RR>),
        )
        .route("/api/credits/:credit_code", get(handlers::get_credit::<CR, RR>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,credit_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting credit application API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let customer_repo = Arc::new(PostgresCustomerRepository::new(db.clone()));
    let credit_repo = Arc::new(PostgresCreditRepository::new(db.clone()));

    // Create application services
    let customer_service = Arc::new(CustomerService::new(customer_repo.clone()));
    let credit_service = Arc::new(CreditService::new(credit_repo, customer_service.clone()));

    let state = AppState {
        customer_service,
        credit_service,
    };

    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
