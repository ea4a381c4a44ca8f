//! SQLite-backed storage handle (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct StorePool {
    pub conn: Connection,
}

impl StorePool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
