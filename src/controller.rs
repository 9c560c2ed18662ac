//! Card session controller.
//!
//! Owns the manifest, the deck session, the drag tracker, and the preference
//! store. One instance serves the whole app; the web layer keeps it behind a
//! mutex and never holds the lock across a fetch.
//!
//! Chapter loads are split in two so the fetch can happen unlocked:
//! [`Controller::begin_load`] hands out a [`LoadTicket`], and
//! [`Controller::finish_load`] applies the fetched data only if no newer
//! ticket has been issued in the meantime.

use rand::Rng;

use crate::config;
use crate::content::{DeckSource, LoadError, ManifestError};
use crate::db::{LogOnError, PreferenceStore};
use crate::domain::{ChapterData, Manifest};
use crate::input::{Action, DragTracker, InputEvent};
use crate::paths;
use crate::session::DeckSession;
use crate::view::{chapter_options, CardView, ChapterOption};

/// Identifies one chapter load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
  pub seq: u64,
  pub key: String,
}

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
  /// The deck now shows the requested chapter
  Applied,
  /// A newer selection was made while this one was in flight; discarded
  Superseded,
}

pub struct Controller {
  manifest: Option<Manifest>,
  session: DeckSession,
  drag: DragTracker,
  store: Box<dyn PreferenceStore>,
  latest_seq: u64,
}

impl Controller {
  pub fn new(store: Box<dyn PreferenceStore>) -> Self {
    Self {
      manifest: None,
      session: DeckSession::new(),
      drag: DragTracker::default(),
      store,
      latest_seq: 0,
    }
  }

  pub fn manifest(&self) -> Option<&Manifest> {
    self.manifest.as_ref()
  }

  pub fn session(&self) -> &DeckSession {
    &self.session
  }

  pub fn set_manifest(&mut self, manifest: Manifest) {
    self.manifest = Some(manifest);
  }

  /// Fetch the chapter list. Must succeed before any chapter can load.
  pub async fn load_manifest<S: DeckSource>(&mut self, source: &S) -> Result<(), ManifestError> {
    let manifest = source.manifest().await?;
    tracing::info!("Manifest loaded: {} chapters", manifest.surahs.len());
    self.set_manifest(manifest);
    Ok(())
  }

  /// Chapter to open at startup: the persisted one if the manifest still
  /// lists it, otherwise the first chapter.
  pub fn initial_selection(&self) -> Option<String> {
    let manifest = self.manifest.as_ref()?;

    let stored = self
      .store
      .get(config::LAST_SELECTED_KEY)
      .log_warn("Failed to read last selected chapter")
      .flatten();

    match stored {
      Some(key) if manifest.contains(&key) => Some(key),
      Some(stale) => {
        tracing::debug!("Stored chapter {:?} is not in the manifest, using default", stale);
        manifest.first_key().map(String::from)
      }
      None => manifest.first_key().map(String::from),
    }
  }

  /// Start loading a chapter. The returned ticket supersedes all earlier ones.
  pub fn begin_load(&mut self, key: &str) -> Result<LoadTicket, LoadError> {
    if self.manifest.is_none() {
      return Err(LoadError::NoManifest);
    }
    if !paths::is_valid_file_key(key) {
      return Err(LoadError::InvalidKey(key.to_string()));
    }

    self.latest_seq += 1;
    Ok(LoadTicket {
      seq: self.latest_seq,
      key: key.to_string(),
    })
  }

  /// Apply the result of a fetch started with `begin_load`.
  ///
  /// On failure the previous deck stays in place. Results for superseded
  /// tickets are dropped whether they succeeded or not.
  pub fn finish_load(
    &mut self,
    ticket: LoadTicket,
    result: Result<ChapterData, LoadError>,
  ) -> Result<LoadOutcome, LoadError> {
    if ticket.seq != self.latest_seq {
      tracing::debug!(
        "Discarding load of {} (ticket {}, latest {})",
        ticket.key,
        ticket.seq,
        self.latest_seq
      );
      return Ok(LoadOutcome::Superseded);
    }

    let data = result?;
    tracing::info!("Loaded chapter {} ({} cards)", ticket.key, data.cards.len());

    self.session.load(&ticket.key, data);
    self
      .store
      .set(config::LAST_SELECTED_KEY, &ticket.key)
      .log_warn("Failed to persist last selected chapter");

    Ok(LoadOutcome::Applied)
  }

  /// Fetch and apply a chapter in one step, for callers that own the
  /// controller outright.
  pub async fn select_chapter<S: DeckSource>(
    &mut self,
    source: &S,
    key: &str,
  ) -> Result<LoadOutcome, LoadError> {
    let ticket = self.begin_load(key)?;
    let result = source.chapter(&ticket.key).await;
    self.finish_load(ticket, result)
  }

  pub fn next(&mut self) {
    self.session.next();
  }

  pub fn prev(&mut self) {
    self.session.prev();
  }

  pub fn flip(&mut self) {
    self.session.flip();
  }

  pub fn shuffle(&mut self) {
    self.shuffle_with(&mut rand::rng());
  }

  pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.session.shuffle(rng);
  }

  pub fn apply(&mut self, action: Action) {
    match action {
      Action::Next => self.next(),
      Action::Prev => self.prev(),
      Action::Flip => self.flip(),
      Action::Shuffle => self.shuffle(),
    }
  }

  /// Feed a raw input event; returns the action taken, if any.
  pub fn handle_input(&mut self, event: &InputEvent) -> Option<Action> {
    let action = self.drag.handle(event)?;
    self.apply(action);
    Some(action)
  }

  pub fn render(&self) -> CardView {
    CardView::project(&self.session, self.manifest.as_ref())
  }

  pub fn chapter_options(&self) -> Vec<ChapterOption> {
    match &self.manifest {
      Some(manifest) => chapter_options(manifest, self.session.selected_key()),
      None => Vec::new(),
    }
  }
}
