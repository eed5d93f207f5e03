pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod web;

use std::sync::Arc;

use axum::Router;

use crate::{api::state::AppState, config::Settings, service::ServiceContext};

/// The full site: JSON API and HTML pages sharing one state.
pub fn build_app(settings: Settings) -> Router {
    let service_context = Arc::new(ServiceContext::from_settings(&settings));
    let state = AppState::new(service_context, Arc::new(settings));

    let api_app = api::create_app(state.clone());
    let web_app = web::create_web_routes(state);

    api_app.merge(web_app)
}
