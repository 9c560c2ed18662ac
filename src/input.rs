//! Mapping from raw input to deck actions.
//!
//! The browser forwards key names and drag coordinates untouched; the
//! decision of what they mean lives here. A horizontal drag longer than
//! `config::SWIPE_THRESHOLD_PX` is a swipe (left = next, right = prev);
//! anything shorter is a tap and flips the card.

use crate::config;

/// Something the deck can do in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Next,
  Prev,
  Flip,
  Shuffle,
}

impl Action {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Next => "next",
      Self::Prev => "prev",
      Self::Flip => "flip",
      Self::Shuffle => "shuffle",
    }
  }
}

/// Raw input event as delivered by the page script
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
  /// `KeyboardEvent.key` value, e.g. "ArrowLeft", "f", " "
  Key(String),
  /// Pointer or touch went down at this x coordinate
  DragStart(f64),
  /// Pointer or touch was released at this x coordinate
  DragEnd(f64),
  /// Card surface or flip button clicked
  Click,
}

/// Action bound to a key, if any
pub fn action_for_key(key: &str) -> Option<Action> {
  match key {
    "ArrowRight" => Some(Action::Next),
    "ArrowLeft" => Some(Action::Prev),
    " " => Some(Action::Flip),
    k if k.eq_ignore_ascii_case("f") => Some(Action::Flip),
    _ => None,
  }
}

/// Tap or swipe, from the horizontal displacement of a drag
pub fn classify_drag(dx: f64, threshold: f64) -> Action {
  if dx.abs() > threshold {
    if dx < 0.0 { Action::Next } else { Action::Prev }
  } else {
    Action::Flip
  }
}

/// Remembers where the current drag began.
#[derive(Debug, Clone)]
pub struct DragTracker {
  start_x: Option<f64>,
  threshold: f64,
}

impl Default for DragTracker {
  fn default() -> Self {
    Self::new(config::SWIPE_THRESHOLD_PX)
  }
}

impl DragTracker {
  pub fn new(threshold: f64) -> Self {
    Self {
      start_x: None,
      threshold,
    }
  }

  pub fn start(&mut self, x: f64) {
    self.start_x = Some(x);
  }

  /// Finish the drag. A release without a recorded start measures from 0.
  pub fn end(&mut self, x: f64) -> Action {
    let dx = x - self.start_x.take().unwrap_or(0.0);
    classify_drag(dx, self.threshold)
  }

  /// Feed one raw event, returning the action it resolves to
  pub fn handle(&mut self, event: &InputEvent) -> Option<Action> {
    match event {
      InputEvent::Key(key) => action_for_key(key),
      InputEvent::DragStart(x) => {
        self.start(*x);
        None
      }
      InputEvent::DragEnd(x) => Some(self.end(*x)),
      InputEvent::Click => Some(Action::Flip),
    }
  }
}
