//! Deck action handlers. Each one mutates the controller and answers with
//! a fresh card panel.

use askama::Template;
use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  Form,
};

use crate::controller::{Controller, LoadOutcome};
use crate::db::LogOnError;
use crate::input::{Action, InputEvent};
use crate::state::AppState;

use super::templates::{CardPanelTemplate, InputForm, SelectForm};

/// Render the card panel, optionally with an alert banner
pub(crate) fn panel(deck: &Controller, error: Option<String>) -> Html<String> {
  let template = CardPanelTemplate {
    view: deck.render(),
    error,
  };
  Html(template.render().log_warn_default("Failed to render card panel"))
}

fn unavailable() -> Response {
  (
    StatusCode::SERVICE_UNAVAILABLE,
    Html("<p role=\"alert\">Deck unavailable. Please reload the page.</p>".to_string()),
  )
    .into_response()
}

/// Lock the deck, run `f`, and render the resulting panel
fn with_deck(state: &AppState, f: impl FnOnce(&mut Controller)) -> Response {
  match state.lock() {
    Ok(mut deck) => {
      f(&mut deck);
      panel(&deck, None).into_response()
    }
    Err(_) => unavailable(),
  }
}

pub async fn select_chapter(
  State(state): State<AppState>,
  Form(form): Form<SelectForm>,
) -> impl IntoResponse {
  let error = match state.select_chapter(&form.key).await {
    Ok(LoadOutcome::Applied) => None,
    Ok(LoadOutcome::Superseded) => {
      tracing::debug!("Selection of {} superseded by a newer one", form.key);
      None
    }
    Err(e) => {
      tracing::warn!("Failed to load chapter {}: {}", form.key, e);
      Some(format!("Failed to load {}: {}", form.key, e.user_message()))
    }
  };

  match state.lock() {
    Ok(deck) => panel(&deck, error).into_response(),
    Err(_) => unavailable(),
  }
}

pub async fn next(State(state): State<AppState>) -> impl IntoResponse {
  with_deck(&state, |deck| deck.apply(Action::Next))
}

pub async fn prev(State(state): State<AppState>) -> impl IntoResponse {
  with_deck(&state, |deck| deck.apply(Action::Prev))
}

pub async fn flip(State(state): State<AppState>) -> impl IntoResponse {
  with_deck(&state, |deck| deck.apply(Action::Flip))
}

pub async fn shuffle(State(state): State<AppState>) -> impl IntoResponse {
  with_deck(&state, |deck| deck.apply(Action::Shuffle))
}

/// Translate the form into an input event, None for malformed input
fn input_event(form: &InputForm) -> Option<InputEvent> {
  match form.kind.as_str() {
    "key" => form.key.clone().map(InputEvent::Key),
    "drag-start" => form.x.filter(|x| x.is_finite()).map(InputEvent::DragStart),
    "drag-end" => form.x.filter(|x| x.is_finite()).map(InputEvent::DragEnd),
    "click" => Some(InputEvent::Click),
    _ => None,
  }
}

pub async fn input(State(state): State<AppState>, Form(form): Form<InputForm>) -> impl IntoResponse {
  let Some(event) = input_event(&form) else {
    tracing::debug!("Ignoring malformed input event of kind {:?}", form.kind);
    return (StatusCode::BAD_REQUEST, "Malformed input event").into_response();
  };

  with_deck(&state, |deck| {
    if let Some(action) = deck.handle_input(&event) {
      tracing::trace!("Input {:?} -> {}", event, action.as_str());
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(kind: &str, key: Option<&str>, x: Option<f64>) -> InputForm {
    InputForm {
      kind: kind.to_string(),
      key: key.map(String::from),
      x,
    }
  }

  #[test]
  fn test_input_event_parsing() {
    assert_eq!(
      input_event(&form("key", Some("f"), None)),
      Some(InputEvent::Key("f".into()))
    );
    assert_eq!(
      input_event(&form("drag-start", None, Some(12.0))),
      Some(InputEvent::DragStart(12.0))
    );
    assert_eq!(
      input_event(&form("drag-end", None, Some(-3.5))),
      Some(InputEvent::DragEnd(-3.5))
    );
    assert_eq!(input_event(&form("click", None, None)), Some(InputEvent::Click));
  }

  #[test]
  fn test_malformed_input_events() {
    assert_eq!(input_event(&form("key", None, None)), None);
    assert_eq!(input_event(&form("drag-end", None, None)), None);
    assert_eq!(input_event(&form("drag-end", None, Some(f64::NAN))), None);
    assert_eq!(input_event(&form("scroll", None, Some(1.0))), None);
  }
}
