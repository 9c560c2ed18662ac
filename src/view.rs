//! Display projection of the deck session.
//!
//! [`CardView`] is everything the page shows for the current card. It is
//! computed from state on every request and never stored.

use crate::config;
use crate::domain::Manifest;
use crate::session::DeckSession;

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
  /// Chapter header, empty until a chapter is loaded
  pub title: String,
  pub front_text: String,
  pub front_lang: String,
  pub back_text: String,
  pub back_lang: String,
  pub hint: String,
  /// "3 / 7", or empty for an empty deck
  pub counter: String,
  /// Position through the deck in (0, 1], or 0 for an empty deck
  pub progress: f64,
  pub flipped: bool,
  pub is_empty: bool,
  /// File key of the loaded chapter
  pub selected_key: Option<String>,
}

impl CardView {
  pub fn project(session: &DeckSession, manifest: Option<&Manifest>) -> Self {
    let title = match (session.selected_key(), manifest) {
      (Some(key), Some(manifest)) => manifest.chapter_title(key, session.dataset_title()),
      (Some(_), None) => session.dataset_title().unwrap_or_default().to_string(),
      (None, _) => String::new(),
    };
    let selected_key = session.selected_key().map(String::from);

    let Some(card) = session.current() else {
      return Self {
        title,
        front_text: config::EMPTY_DECK_PLACEHOLDER.to_string(),
        front_lang: String::new(),
        back_text: String::new(),
        back_lang: String::new(),
        hint: String::new(),
        counter: String::new(),
        progress: 0.0,
        flipped: false,
        is_empty: true,
        selected_key,
      };
    };

    let total = session.len();
    let position = session.index() + 1;

    Self {
      title,
      front_text: card.front.text.clone(),
      front_lang: card.front.language_tag(),
      back_text: card.back.text.clone(),
      back_lang: card.back.language_tag(),
      hint: card.hint.text.clone(),
      counter: format!("{} / {}", position, total),
      progress: position as f64 / total as f64,
      flipped: session.is_flipped(),
      is_empty: false,
      selected_key,
    }
  }

  /// Progress as a CSS width, e.g. "100%" or "33.33%"
  pub fn progress_percent(&self) -> String {
    let percent = self.progress * 100.0;
    if percent.fract() == 0.0 {
      format!("{}%", percent as u32)
    } else {
      format!("{:.2}%", percent)
    }
  }
}

/// One entry of the chapter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterOption {
  pub value: String,
  pub label: String,
  pub selected: bool,
}

pub fn chapter_options(manifest: &Manifest, selected: Option<&str>) -> Vec<ChapterOption> {
  manifest
    .surahs
    .iter()
    .map(|entry| ChapterOption {
      value: entry.file.clone(),
      label: entry.label(),
      selected: selected == Some(entry.file.as_str()),
    })
    .collect()
}
