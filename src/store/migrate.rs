use rusqlite::{Connection, Result};

/// Ensure the `slots` table exists. Each slot holds one JSON document
/// keyed by a stable name; the contact collection, the legacy collection
/// and the migration flag each live in their own slot.
fn ensure_slots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending schema migrations.
///
/// Invoked from store::initialize::init_store().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_slots_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
