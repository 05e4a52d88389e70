use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use coachbase_storage::store::S3Store;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("COACHBASE_BUCKET").unwrap_or_else(|_| "coachbase".to_string());
    let s3 = coachbase_storage::client::build_client().await;

    let state = AppState {
        store: S3Store::new(s3, bucket),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}

fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/programs",
            get(routes::programs::list_programs).post(routes::programs::create_program),
        )
        .route(
            "/programs/{id}",
            get(routes::programs::get_program).patch(routes::programs::update_program),
        )
        .route(
            "/meal-plans",
            get(routes::meal_plans::list_meal_plans).post(routes::meal_plans::create_meal_plan),
        )
        .route(
            "/meal-plans/{id}",
            get(routes::meal_plans::get_meal_plan).patch(routes::meal_plans::update_meal_plan),
        )
        .route_layer(axum_mw::from_fn(middleware::session::require_session));

    Router::new()
        // Health (no session)
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
