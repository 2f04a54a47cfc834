use std::path::PathBuf;

use autoinc_bench::{Connector, Dialect, SyncConnection};
use constants::*;
use rusqlite::Connection;

pub const SQLITE_DIALECT: Dialect = Dialect {
  // The file named by the DSN is the database and is created on open.
  create_database: None,
  create_table: SQLITE_CREATE_TABLE_QUERY,
  insert: SQLITE_INSERT_QUERY,
  prepared_insert: SQLITE_PREPARED_INSERT_QUERY,
};

/// Opens one connection to a SQLite file per call.
#[derive(Clone, Debug)]
pub struct SqliteConnector {
  path: PathBuf,
}

impl SqliteConnector {
  /// Accepts a plain path or a `sqlite://` URL.
  pub fn new(dsn: &str) -> Self {
    let path = dsn.strip_prefix("sqlite://").unwrap_or(dsn);
    return Self {
      path: PathBuf::from(path),
    };
  }
}

impl Connector for SqliteConnector {
  type Connection = SqliteConnection;

  fn dialect(&self) -> &Dialect {
    return &SQLITE_DIALECT;
  }

  fn connect(&self) -> rusqlite::Result<SqliteConnection> {
    let conn = Connection::open(&self.path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    // Writers queue behind each other instead of failing with SQLITE_BUSY.
    conn.busy_handler(Some(|_attempts| {
      std::thread::sleep(BUSY_SLEEP);
      return true;
    }))?;
    conn.execute_batch(PRAGMAS)?;
    return Ok(SqliteConnection(conn));
  }
}

/// Prepared statements live in the connection's statement cache, keyed by their SQL.
pub struct SqliteConnection(Connection);

impl SyncConnection for SqliteConnection {
  type Error = rusqlite::Error;
  type Prepared = String;

  fn execute(&mut self, sql: &str) -> rusqlite::Result<()> {
    self.0.execute(sql, ())?;
    return Ok(());
  }

  fn prepare(&mut self, sql: &str) -> rusqlite::Result<String> {
    self.0.prepare_cached(sql)?;
    return Ok(sql.to_owned());
  }

  fn execute_prepared(&mut self, sql: &String, param: &str) -> rusqlite::Result<()> {
    let mut stmt = self.0.prepare_cached(sql)?;
    stmt.execute([param])?;
    return Ok(());
  }
}
