//! Snippet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide put/get/patch/delete/catalog/search over the `snippets` table.
//! - Keep SQL and transaction handling inside the persistence boundary.
//!
//! # Invariants
//! - Every write runs inside one immediate transaction that is either
//!   committed or rolled back (on drop) before the call returns.
//! - `put` is an upsert: an existing keyword has its message and hidden flag
//!   overwritten, never duplicated.
//! - Catalog and search never return hidden rows.
//! - Search input is matched as literal text.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::snippet::{Snippet, SnippetValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SNIPPET_COLUMNS: [&str; 3] = ["keyword", "message", "hidden"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from snippet persistence. Not-found outcomes are not errors.
#[derive(Debug)]
pub enum RepoError {
    /// Write input failed model validation.
    Validation(SnippetValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid snippet.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snippet repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "snippet repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "snippet repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted snippet data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<SnippetValidationError> for RepoError {
    fn from(value: SnippetValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for snippet operations.
pub trait SnippetRepository {
    /// Inserts the snippet, or overwrites message and hidden flag when the
    /// keyword already exists. Returns what was stored.
    fn put(&self, snippet: &Snippet) -> RepoResult<Snippet>;
    /// Returns the message stored under `keyword`, hidden or not.
    fn get(&self, keyword: &str) -> RepoResult<Option<String>>;
    /// Replaces the message of an existing snippet. `None` when absent.
    fn patch(&self, keyword: &str, message: &str) -> RepoResult<Option<Snippet>>;
    /// Removes one snippet. Returns the removed keyword, `None` when absent.
    fn delete(&self, keyword: &str) -> RepoResult<Option<String>>;
    /// Lists visible keywords in ascending order.
    fn catalog(&self) -> RepoResult<Vec<String>>;
    /// Lists visible snippets whose keyword contains `needle` literally.
    fn search(&self, needle: &str) -> RepoResult<Vec<Snippet>>;
}

/// SQLite-backed snippet repository.
pub struct SqliteSnippetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnippetRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_snippet_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn begin(&self) -> RepoResult<Transaction<'conn>> {
        Ok(Transaction::new_unchecked(
            self.conn,
            TransactionBehavior::Immediate,
        )?)
    }
}

impl SnippetRepository for SqliteSnippetRepository<'_> {
    fn put(&self, snippet: &Snippet) -> RepoResult<Snippet> {
        snippet.validate()?;

        let tx = self.begin()?;
        tx.execute(
            "INSERT INTO snippets (keyword, message, hidden)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(keyword) DO UPDATE SET
                message = excluded.message,
                hidden = excluded.hidden;",
            params![
                snippet.keyword.as_str(),
                snippet.message.as_str(),
                bool_to_int(snippet.hidden),
            ],
        )?;
        tx.commit()?;

        Ok(snippet.clone())
    }

    fn get(&self, keyword: &str) -> RepoResult<Option<String>> {
        let message = self
            .conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1;",
                [keyword],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(message)
    }

    fn patch(&self, keyword: &str, message: &str) -> RepoResult<Option<Snippet>> {
        let tx = self.begin()?;
        let changed = tx.execute(
            "UPDATE snippets SET message = ?2 WHERE keyword = ?1;",
            params![keyword, message],
        )?;

        if changed == 0 {
            return Ok(None);
        }

        let updated = load_snippet(&tx, keyword)?;
        tx.commit()?;
        Ok(updated)
    }

    fn delete(&self, keyword: &str) -> RepoResult<Option<String>> {
        let tx = self.begin()?;
        if !snippet_exists(&tx, keyword)? {
            return Ok(None);
        }

        tx.execute("DELETE FROM snippets WHERE keyword = ?1;", [keyword])?;
        tx.commit()?;
        Ok(Some(keyword.to_string()))
    }

    fn catalog(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT keyword
             FROM snippets
             WHERE hidden = 0
             ORDER BY keyword ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut keywords = Vec::new();

        while let Some(row) = rows.next()? {
            keywords.push(row.get::<_, String>(0)?);
        }

        Ok(keywords)
    }

    fn search(&self, needle: &str) -> RepoResult<Vec<Snippet>> {
        // instr() compares bytes, so LIKE metacharacters and case are literal.
        let mut stmt = self.conn.prepare(
            "SELECT keyword, message, hidden
             FROM snippets
             WHERE hidden = 0
               AND instr(keyword, ?1) > 0
             ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([needle])?;
        let mut snippets = Vec::new();

        while let Some(row) = rows.next()? {
            snippets.push(parse_snippet_row(row)?);
        }

        Ok(snippets)
    }
}

fn load_snippet(conn: &Connection, keyword: &str) -> RepoResult<Option<Snippet>> {
    let mut stmt = conn.prepare(
        "SELECT keyword, message, hidden
         FROM snippets
         WHERE keyword = ?1;",
    )?;
    let mut rows = stmt.query([keyword])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_snippet_row(row)?));
    }

    Ok(None)
}

fn snippet_exists(conn: &Connection, keyword: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM snippets
            WHERE keyword = ?1
        );",
        [keyword],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_snippet_row(row: &Row<'_>) -> RepoResult<Snippet> {
    let hidden = match row.get::<_, i64>("hidden")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid hidden value `{other}` in snippets.hidden"
            )));
        }
    };

    Ok(Snippet {
        keyword: row.get("keyword")?,
        message: row.get("message")?,
        hidden,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn ensure_snippet_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "snippets")? {
        return Err(RepoError::MissingRequiredTable("snippets"));
    }

    for column in SNIPPET_COLUMNS {
        if !table_has_column(conn, "snippets", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "snippets",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
