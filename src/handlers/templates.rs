//! Template and form structs for deck handlers.

use askama::Template;
use serde::Deserialize;

use crate::filters;
use crate::view::{CardView, ChapterOption};

/// Full page: chapter picker, card panel, controls
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub options: Vec<ChapterOption>,
  pub view: CardView,
  pub error: Option<String>,
}

/// Card panel fragment swapped in after every action
#[derive(Template)]
#[template(path = "card_panel.html")]
pub struct CardPanelTemplate {
  pub view: CardView,
  pub error: Option<String>,
}

/// Shown instead of the deck when the manifest could not be loaded
#[derive(Template)]
#[template(path = "manifest_error.html")]
pub struct ManifestErrorTemplate {
  pub message: String,
}

// ============================================================================
// Form Structs
// ============================================================================

#[derive(Deserialize)]
pub struct SelectForm {
  pub key: String,
}

/// Raw input forwarded by the page script
#[derive(Deserialize)]
pub struct InputForm {
  /// "key", "drag-start", "drag-end" or "click"
  pub kind: String,
  #[serde(default)]
  pub key: Option<String>,
  #[serde(default)]
  pub x: Option<f64>,
}
