//! Deck session state: the cards of the selected chapter, the position in
//! the deck, and which face is showing.
//!
//! All operations here are synchronous and infallible. `index` is always a
//! valid position while the deck is non-empty and 0 when it is empty.

use rand::Rng;

use crate::domain::{Card, ChapterData};

#[derive(Debug, Clone, Default)]
pub struct DeckSession {
  cards: Vec<Card>,
  index: usize,
  flipped: bool,
  /// File key of the chapter the cards came from
  selected_key: Option<String>,
  /// Title carried by the dataset itself
  dataset_title: Option<String>,
}

impl DeckSession {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the deck with a freshly loaded chapter and rewind.
  pub fn load(&mut self, key: &str, data: ChapterData) {
    self.cards = data.cards;
    self.dataset_title = data.surah;
    self.selected_key = Some(key.to_string());
    self.index = 0;
    self.flipped = false;
  }

  pub fn cards(&self) -> &[Card] {
    &self.cards
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn is_flipped(&self) -> bool {
    self.flipped
  }

  pub fn selected_key(&self) -> Option<&str> {
    self.selected_key.as_deref()
  }

  pub fn dataset_title(&self) -> Option<&str> {
    self.dataset_title.as_deref()
  }

  /// The card on display, None for an empty deck
  pub fn current(&self) -> Option<&Card> {
    self.cards.get(self.index)
  }

  /// Advance one card, wrapping from the last to the first
  pub fn next(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    self.index = (self.index + 1) % self.cards.len();
    self.flipped = false;
  }

  /// Go back one card, wrapping from the first to the last
  pub fn prev(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    let len = self.cards.len();
    self.index = (self.index + len - 1) % len;
    self.flipped = false;
  }

  pub fn flip(&mut self) {
    self.flipped = !self.flipped;
  }

  /// Randomly reorder the deck, keeping the displayed card on screen.
  ///
  /// After shuffling, the position moves to the first card whose front text
  /// matches the card shown before; 0 when there is no such card.
  pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    let shown_front = self.current().map(|c| c.front.text.clone());

    fisher_yates(&mut self.cards, rng);

    self.index = shown_front
      .and_then(|front| self.cards.iter().position(|c| c.front.text == front))
      .unwrap_or(0);
    self.flipped = false;
  }
}

/// Unbiased in-place shuffle: for i from the last index down to 1, swap
/// element i with a uniformly chosen element in [0, i].
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
  for i in (1..items.len()).rev() {
    let j = rng.random_range(0..=i);
    items.swap(i, j);
  }
}
