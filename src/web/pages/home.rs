use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    api::state::AppState,
    web::templates::{HtmlTemplate, PageContext},
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
}

// GET /
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    HtmlTemplate(HomeTemplate {
        page: PageContext::new(&state.settings, "Home", "/"),
    })
}
