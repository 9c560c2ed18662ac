pub mod deck;
pub mod templates;

use askama::Template;
use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse},
  routing::{get, post},
  Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::LogOnError;
use crate::paths;
use crate::state::AppState;

use templates::{IndexTemplate, ManifestErrorTemplate};

pub use deck::{flip, input, next, prev, select_chapter, shuffle};

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
  if let Some(message) = &state.manifest_error {
    let template = ManifestErrorTemplate {
      message: message.to_string(),
    };
    return (
      StatusCode::SERVICE_UNAVAILABLE,
      Html(template.render().log_warn_default("Failed to render manifest error")),
    )
      .into_response();
  }

  let Ok(deck) = state.lock() else {
    return (StatusCode::SERVICE_UNAVAILABLE, Html("<h1>Deck unavailable</h1>".to_string()))
      .into_response();
  };

  // A startup failure stays relevant only until a chapter loads
  let error = match deck.session().selected_key() {
    None => state.startup_error.as_deref().map(String::from),
    Some(_) => None,
  };

  let template = IndexTemplate {
    options: deck.chapter_options(),
    view: deck.render(),
    error,
  };
  Html(template.render().log_warn_default("Failed to render index")).into_response()
}

/// All routes, with static assets served from `static/`
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/select", post(select_chapter))
    .route("/next", post(next))
    .route("/prev", post(prev))
    .route("/flip", post(flip))
    .route("/shuffle", post(shuffle))
    .route("/input", post(input))
    .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
