use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::BlogPost,
    service::content_service::select_post,
    web::templates::{HtmlTemplate, PageContext},
};

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub page: PageContext,
    pub posts: Vec<BlogPost>,
    pub current: Option<BlogPost>,
    pub current_id: String,
    pub not_found: bool,
}

#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    pub post: Option<String>,
}

// GET /blog
pub async fn blog_page(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Response {
    let posts = state
        .service_context
        .content_service
        .posts()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Blog posts unavailable: {}", e);
            Vec::new()
        });

    let current = select_post(&posts, query.post.as_deref()).cloned();
    let not_found = current.is_none() && !posts.is_empty();
    let status = if not_found { StatusCode::NOT_FOUND } else { StatusCode::OK };

    let template = BlogTemplate {
        page: PageContext::new(&state.settings, "Blog", "/blog"),
        current_id: current.as_ref().map(|p| p.id.clone()).unwrap_or_default(),
        current,
        posts,
        not_found,
    };

    (status, HtmlTemplate(template)).into_response()
}
