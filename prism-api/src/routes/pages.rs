//! HTML Page Routes
//!
//! The index page, the greeting form handler, the favicon and the static
//! asset directory.

use axum::{
    extract::Form,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::services::{ServeDir, ServeFile};

use crate::constants::FAVICON_FILE;
use crate::state::AppState;
use crate::templates::{render_hello, render_index};

/// Greeting form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelloForm {
    #[serde(default)]
    pub name: String,
}

/// GET / - Index page
pub async fn index() -> Html<String> {
    tracing::debug!("Index page requested");
    Html(render_index())
}

/// POST /hello - Greeting page, or a redirect home when the name is blank
pub async fn hello(Form(form): Form<HelloForm>) -> Response {
    let name = form.name.trim();
    if name.is_empty() {
        tracing::debug!("Greeting requested without a name, redirecting");
        return (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    }

    tracing::debug!(name, "Greeting requested");
    Html(render_hello(name)).into_response()
}

/// Create the page router, including favicon and /static.
pub fn create_router(state: &AppState) -> Router {
    let static_dir = state.static_dir.as_path();

    Router::new()
        .route("/", get(index))
        .route("/hello", post(hello))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join(FAVICON_FILE)))
        .nest_service("/static", ServeDir::new(static_dir))
}
