use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS settings (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL,
      updated_at TEXT
    );
    "#,
  )?;

  // Databases created before timestamps were tracked
  let has_updated_at = conn
    .prepare("SELECT updated_at FROM settings LIMIT 0")
    .is_ok();
  if !has_updated_at {
    conn.execute("ALTER TABLE settings ADD COLUMN updated_at TEXT", [])?;
  }

  Ok(())
}
