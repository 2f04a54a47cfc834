//! In-memory store used by the unit tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::store::{Connector, Dialect, SyncConnection};

pub const MOCK_DIALECT: Dialect = Dialect {
  create_database: Some("CREATE DATABASE IF NOT EXISTS bench"),
  create_table: "CREATE TABLE IF NOT EXISTS bench.t (id INT PRIMARY KEY AUTO_INCREMENT, name VARCHAR(10))",
  insert: "INSERT INTO bench.t (name) VALUES ('test')",
  prepared_insert: "INSERT INTO bench.t (name) VALUES (?)",
};

#[derive(Debug, thiserror::Error)]
#[error("mock store: {0}")]
pub struct MockError(pub &'static str);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Failure {
  #[default]
  None,
  Connect,
  CreateDatabase,
  CreateTable,
  Prepare,
  /// The connection opened `connection`-th fails after `after` successful inserts.
  Insert { connection: u64, after: u64 },
}

#[derive(Debug, Default)]
pub struct MockStore {
  pub connects: AtomicU64,
  pub prepares: AtomicU64,
  pub inserts: AtomicU64,
  pub statements: Mutex<Vec<String>>,
  created: Mutex<HashSet<String>>,
}

impl MockStore {
  pub fn inserted(&self) -> u64 {
    return self.inserts.load(Ordering::SeqCst);
  }
}

pub struct MockConnector {
  pub store: Arc<MockStore>,
  pub dialect: Dialect,
  pub failure: Failure,
  pub latency: Duration,
}

impl MockConnector {
  pub fn new() -> Self {
    return Self {
      store: Arc::new(MockStore::default()),
      dialect: MOCK_DIALECT,
      failure: Failure::None,
      latency: Duration::from_micros(50),
    };
  }

  pub fn failing(failure: Failure) -> Self {
    return Self {
      failure,
      ..Self::new()
    };
  }
}

pub struct MockConnection {
  store: Arc<MockStore>,
  failure: Failure,
  latency: Duration,
  index: u64,
  inserted: u64,
}

impl MockConnection {
  fn insert(&mut self) -> Result<(), MockError> {
    if !self.latency.is_zero() {
      std::thread::sleep(self.latency);
    }
    if let Failure::Insert { connection, after } = self.failure {
      if connection == self.index && self.inserted >= after {
        return Err(MockError("duplicate entry for key 'PRIMARY'"));
      }
    }
    self.inserted += 1;
    self.store.inserts.fetch_add(1, Ordering::SeqCst);
    return Ok(());
  }
}

impl SyncConnection for MockConnection {
  type Error = MockError;
  type Prepared = String;

  fn execute(&mut self, sql: &str) -> Result<(), MockError> {
    if sql.starts_with("CREATE") {
      if sql.starts_with("CREATE DATABASE") && self.failure == Failure::CreateDatabase {
        return Err(MockError("access denied"));
      }
      if sql.starts_with("CREATE TABLE") && self.failure == Failure::CreateTable {
        return Err(MockError("access denied"));
      }
      self.store.statements.lock().push(sql.to_owned());
      let fresh = self.store.created.lock().insert(sql.to_owned());
      if !fresh && !sql.contains("IF NOT EXISTS") {
        return Err(MockError("object already exists"));
      }
      return Ok(());
    }
    return self.insert();
  }

  fn prepare(&mut self, sql: &str) -> Result<String, MockError> {
    if self.failure == Failure::Prepare {
      return Err(MockError("syntax error"));
    }
    self.store.prepares.fetch_add(1, Ordering::SeqCst);
    return Ok(sql.to_owned());
  }

  fn execute_prepared(&mut self, _stmt: &String, param: &str) -> Result<(), MockError> {
    assert_eq!(param, constants::INSERT_VALUE);
    return self.insert();
  }
}

impl Connector for MockConnector {
  type Connection = MockConnection;

  fn dialect(&self) -> &Dialect {
    return &self.dialect;
  }

  fn connect(&self) -> Result<MockConnection, MockError> {
    if self.failure == Failure::Connect {
      return Err(MockError("connection refused"));
    }
    let index = self.store.connects.fetch_add(1, Ordering::SeqCst);
    return Ok(MockConnection {
      store: self.store.clone(),
      failure: self.failure,
      latency: self.latency,
      index,
      inserted: 0,
    });
  }
}
