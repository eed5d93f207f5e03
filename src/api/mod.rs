pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    trace::TraceLayer,
};

use state::AppState;

pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))

        // JSON API over the same services the pages use
        .nest("/api", api_routes())

        .with_state(app_state)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::events::list))
        .route("/calendar/:year/:month", get(handlers::events::grid))
        .route("/members", get(handlers::members::list))
        .route("/signup", post(handlers::signup::signup))
        .route("/contact", post(handlers::contact::contact))
}
