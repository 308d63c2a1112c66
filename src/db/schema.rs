use rusqlite::Connection;

use crate::error::BdayResult;

/// Initialize the schema. Creates all tables if they don't exist.
///
/// Interests live in their own table keyed by (contact, position) so that
/// insertion order survives the round trip.
pub fn initialize(conn: &Connection) -> BdayResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            birthday TEXT NOT NULL,
            relationship TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS contact_interests (
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            interest TEXT NOT NULL,
            PRIMARY KEY (contact_id, position)
        );
        ",
    )?;
    Ok(())
}

/// Open the session store: an in-memory database that lives exactly as long
/// as this run. Nothing is ever written to disk.
pub fn open_session() -> BdayResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

/// In-memory connection with schema applied, for tests.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
