//! Application state shared by all handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::content::{DeckSource, DirSource, LoadError};
use crate::controller::{Controller, LoadOutcome};

/// Application state passed to all handlers
pub struct AppState<S = DirSource> {
  /// The single deck controller
  pub deck: Arc<Mutex<Controller>>,
  /// Where chapter data is fetched from
  pub source: Arc<S>,
  /// Set when the manifest failed to load at startup; shown instead of the deck
  pub manifest_error: Option<Arc<str>>,
  /// Set when the chapter opened at startup failed to load; shown as an
  /// alert until some chapter loads
  pub startup_error: Option<Arc<str>>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      deck: Arc::clone(&self.deck),
      source: Arc::clone(&self.source),
      manifest_error: self.manifest_error.clone(),
      startup_error: self.startup_error.clone(),
    }
  }
}

impl<S: DeckSource> AppState<S> {
  pub fn new(controller: Controller, source: S) -> Self {
    Self {
      deck: Arc::new(Mutex::new(controller)),
      source: Arc::new(source),
      manifest_error: None,
      startup_error: None,
    }
  }

  /// Load the manifest and the initial chapter, recording any failure for
  /// the first page render instead of aborting.
  pub async fn start(mut controller: Controller, source: S) -> Self {
    let mut manifest_error = None;
    let mut startup_error = None;

    match controller.load_manifest(&source).await {
      Ok(()) => {
        if let Some(key) = controller.initial_selection() {
          if let Err(e) = controller.select_chapter(&source, &key).await {
            tracing::warn!("Failed to load initial chapter {}: {}", key, e);
            startup_error = Some(format!("Failed to load {}: {}", key, e.user_message()));
          }
        }
      }
      Err(e) => {
        tracing::error!("Failed to load manifest: {}", e);
        manifest_error = Some(e.user_message());
      }
    }

    let mut state = Self::new(controller, source);
    if let Some(message) = manifest_error {
      state = state.with_manifest_error(message);
    }
    state.startup_error = startup_error.map(Arc::from);
    state
  }

  pub fn with_manifest_error(mut self, message: &str) -> Self {
    self.manifest_error = Some(Arc::from(message));
    self
  }

  /// Try to acquire the deck lock, returning an error if poisoned
  pub fn lock(&self) -> Result<MutexGuard<'_, Controller>, LoadError> {
    self.deck.lock().map_err(|_| {
      tracing::error!("Deck mutex poisoned - a thread panicked while holding the lock");
      LoadError::Unavailable
    })
  }

  /// Load a chapter without holding the deck lock during the fetch.
  ///
  /// A selection made while this one is still fetching wins; this result
  /// is then reported as `Superseded` and leaves the deck untouched.
  pub async fn select_chapter(&self, key: &str) -> Result<LoadOutcome, LoadError> {
    let ticket = {
      let mut deck = self.lock()?;
      deck.begin_load(key)?
    };

    let result = self.source.chapter(&ticket.key).await;

    let mut deck = self.lock()?;
    deck.finish_load(ticket, result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::MemoryStore;
  use crate::domain::Manifest;
  use crate::testing::MemorySource;

  fn state() -> AppState<MemorySource> {
    let manifest = Manifest::from_json(
      r#"{"surahs": [{"id": 1, "name_en": "Al-Fatiha", "file": "001.json"}]}"#,
    )
    .unwrap();
    let mut controller = Controller::new(Box::new(MemoryStore::new()));
    controller.set_manifest(manifest.clone());
    AppState::new(
      controller,
      MemorySource::new(manifest).with_chapter("001.json", &["a", "b"]),
    )
  }

  #[tokio::test]
  async fn test_select_chapter_through_state() {
    let state = state();
    let outcome = state.select_chapter("001.json").await.unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(state.lock().unwrap().render().counter, "1 / 2");
  }

  #[tokio::test]
  async fn test_select_missing_chapter_reports_error() {
    let state = state();
    let result = state.select_chapter("404.json").await;
    assert!(matches!(result, Err(LoadError::NotFound(_))));
    assert!(state.lock().unwrap().session().is_empty());
  }

  #[tokio::test]
  async fn test_clones_share_one_controller() {
    let state = state();
    let other = state.clone();
    state.select_chapter("001.json").await.unwrap();
    other.lock().unwrap().next();
    assert_eq!(state.lock().unwrap().session().index(), 1);
  }

  #[tokio::test]
  async fn test_start_loads_initial_chapter() {
    let manifest = Manifest::from_json(
      r#"{"surahs": [{"id": 1, "name_en": "Al-Fatiha", "file": "001.json"}]}"#,
    )
    .unwrap();
    let source = MemorySource::new(manifest).with_chapter("001.json", &["a", "b"]);
    let state = AppState::start(Controller::new(Box::new(MemoryStore::new())), source).await;

    assert!(state.manifest_error.is_none());
    assert!(state.startup_error.is_none());
    assert_eq!(state.lock().unwrap().render().counter, "1 / 2");
  }

  #[tokio::test]
  async fn test_start_records_initial_chapter_failure() {
    let manifest = Manifest::from_json(
      r#"{"surahs": [{"id": 112, "name_en": "Al-Ikhlas", "file": "112.json"}]}"#,
    )
    .unwrap();
    let state = AppState::start(
      Controller::new(Box::new(MemoryStore::new())),
      MemorySource::new(manifest),
    )
    .await;

    assert!(state.manifest_error.is_none());
    assert_eq!(
      state.startup_error.as_deref(),
      Some("Failed to load 112.json: Chapter file not found")
    );
    assert!(state.lock().unwrap().session().is_empty());
  }

  #[test]
  fn test_manifest_error_flag() {
    let state = state().with_manifest_error("The chapter list is malformed");
    assert_eq!(state.manifest_error.as_deref(), Some("The chapter list is malformed"));
  }
}
