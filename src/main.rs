use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quran_flashcards::config::Settings;
use quran_flashcards::content::DirSource;
use quran_flashcards::controller::Controller;
use quran_flashcards::db::{MemoryStore, PreferenceStore, SqliteStore};
use quran_flashcards::handlers;
use quran_flashcards::state::AppState;

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quran_flashcards=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = Settings::load();
  tracing::info!("Reading chapters from {}", settings.data_dir.display());

  let store: Box<dyn PreferenceStore> = match SqliteStore::open(&settings.prefs_db) {
    Ok(store) => Box::new(store),
    Err(e) => {
      tracing::warn!(
        "Failed to open preference database {}: {}; last chapter will not be remembered",
        settings.prefs_db.display(),
        e
      );
      Box::new(MemoryStore::new())
    }
  };

  let source = DirSource::new(&settings.data_dir);
  let state = AppState::start(Controller::new(store), source).await;

  let app = handlers::router(state);

  let bind_addr = settings.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", settings.port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
