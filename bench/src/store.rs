//! The seam between the benchmark and a concrete database driver.

/// Statements a backend runs. `create_database` is `None` for stores where the
/// connection target already is the database (SQLite files).
#[derive(Clone, Copy, Debug)]
pub struct Dialect {
  pub create_database: Option<&'static str>,
  pub create_table: &'static str,
  pub insert: &'static str,
  pub prepared_insert: &'static str,
}

pub trait SyncConnection {
  type Error: std::error::Error + Send + Sync + 'static;
  type Prepared;

  fn execute(&mut self, sql: &str) -> Result<(), Self::Error>;

  fn prepare(&mut self, sql: &str) -> Result<Self::Prepared, Self::Error>;

  /// Runs a statement from [`SyncConnection::prepare`] with a single string parameter.
  fn execute_prepared(&mut self, stmt: &Self::Prepared, param: &str) -> Result<(), Self::Error>;
}

pub trait Connector: Send + Sync {
  type Connection: SyncConnection;

  fn dialect(&self) -> &Dialect;

  fn connect(&self) -> Result<Self::Connection, <Self::Connection as SyncConnection>::Error>;
}
