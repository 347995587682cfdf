//! SqliteStore — MessageStore over a single rusqlite connection.
//!
//! Schema: one `messages` table. `seq` carries insertion order; `created_at`
//! is fixed-width RFC 3339 (microseconds, `Z`) so it sorts lexically.
//! Cipher metadata is kept as JSON text.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::error::{Result, WallError};
use crate::types::{Message, NewMessage};

use super::traits::MessageStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS messages (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
    id           TEXT NOT NULL UNIQUE,
    created_at   TEXT NOT NULL,
    author_alias TEXT NOT NULL,
    epoch        TEXT NOT NULL,
    cipher_type  TEXT NOT NULL,
    ciphertext   TEXT NOT NULL,
    plaintext    TEXT NOT NULL,
    difficulty   INTEGER NOT NULL,
    metadata     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_messages_created ON messages (created_at DESC, seq DESC);
";

const COLUMNS: &str =
    "id, created_at, author_alias, epoch, cipher_type, ciphertext, plaintext, difficulty, metadata";

impl From<rusqlite::Error> for WallError {
    fn from(e: rusqlite::Error) -> Self {
        WallError::Sqlite(e.to_string())
    }
}

/// Raw column values, converted to a [`Message`] outside the row callback.
struct MessageRow {
    id: String,
    created_at: String,
    author_alias: String,
    epoch: String,
    cipher_type: String,
    ciphertext: String,
    plaintext: String,
    difficulty: i64,
    metadata: String,
}

impl MessageRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            created_at: row.get(1)?,
            author_alias: row.get(2)?,
            epoch: row.get(3)?,
            cipher_type: row.get(4)?,
            ciphertext: row.get(5)?,
            plaintext: row.get(6)?,
            difficulty: row.get(7)?,
            metadata: row.get(8)?,
        })
    }
}

impl TryFrom<MessageRow> for Message {
    type Error = WallError;

    fn try_from(row: MessageRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| WallError::Storage(format!("bad created_at {:?}: {e}", row.created_at)))?
            .with_timezone(&Utc);
        let difficulty = u8::try_from(row.difficulty)
            .map_err(|_| WallError::Storage(format!("bad difficulty {}", row.difficulty)))?;
        Ok(Message {
            id: row.id,
            created_at,
            author_alias: row.author_alias,
            epoch: row.epoch.parse()?,
            cipher_type: row.cipher_type.parse()?,
            ciphertext: row.ciphertext,
            plaintext: row.plaintext,
            difficulty,
            metadata: serde_json::from_str(&row.metadata)?,
        })
    }
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened message database");
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn query_messages(&self, sql: &str, limit: i64, offset: i64) -> Result<Vec<Message>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![limit, offset], MessageRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Message::try_from).collect()
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl MessageStore for SqliteStore {
    fn insert(&self, message: NewMessage) -> Result<Message> {
        // Stored at microsecond precision; truncate so the returned value matches.
        let created_at = Utc::now().trunc_subsecs(6);
        let message = message.into_message(Uuid::new_v4().to_string(), created_at);
        let metadata = serde_json::to_string(&message.metadata)?;
        self.conn.lock().execute(
            &format!("INSERT INTO messages ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
            params![
                message.id,
                message
                    .created_at
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
                message.author_alias,
                message.epoch.as_str(),
                message.cipher_type.as_str(),
                message.ciphertext,
                message.plaintext,
                i64::from(message.difficulty),
                metadata,
            ],
        )?;
        Ok(message)
    }

    fn get(&self, id: &str) -> Result<Option<Message>> {
        let row = self
            .conn
            .lock()
            .query_row(
                &format!("SELECT {COLUMNS} FROM messages WHERE id = ?1"),
                params![id],
                MessageRow::from_row,
            )
            .optional()?;
        row.map(Message::try_from).transpose()
    }

    fn latest(&self, limit: usize) -> Result<Vec<Message>> {
        self.query_messages(
            &format!(
                "SELECT {COLUMNS} FROM messages ORDER BY created_at DESC, seq DESC LIMIT ?1 OFFSET ?2"
            ),
            to_i64(limit),
            0,
        )
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .lock()
            .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| WallError::Storage(format!("bad count {count}")))
    }

    fn nth(&self, offset: usize) -> Result<Option<Message>> {
        let mut rows = self.query_messages(
            &format!("SELECT {COLUMNS} FROM messages ORDER BY seq ASC LIMIT ?1 OFFSET ?2"),
            1,
            to_i64(offset),
        )?;
        Ok(rows.pop())
    }
}
