pub mod pages;
pub mod templates;

use axum::{
    Router,
    routing::{get, post},
};
use crate::api::state::AppState;

pub fn create_web_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/events", get(pages::events::events_page))
        .route("/community", get(pages::community::community_page))
        .route("/community/signup", post(pages::community::signup_handler))
        .route("/blog", get(pages::blog::blog_page))
        .route("/about", get(pages::about::about_page))
        .route("/about/contact", post(pages::about::contact_handler))
        .with_state(state)
}
