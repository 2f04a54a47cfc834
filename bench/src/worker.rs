use std::time::{Duration, Instant};

use constants::INSERT_VALUE;
use tracing::debug;

use crate::config::InsertMode;
use crate::error::BenchError;
use crate::store::{Connector, SyncConnection};

#[derive(Clone, Copy, Debug)]
pub struct Deadline(Instant);

impl Deadline {
  pub fn after(duration: Duration) -> Self {
    return Self(Instant::now() + duration);
  }

  #[inline]
  pub fn expired(&self) -> bool {
    return Instant::now() >= self.0;
  }
}

/// Calls `insert` until the deadline passes and returns how many calls succeeded.
///
/// The deadline is checked before every call, so an expired deadline always wins over a new
/// insert, while an insert already in flight runs to completion.
pub fn insert_until<E>(
  deadline: &Deadline,
  mut insert: impl FnMut() -> Result<(), E>,
) -> Result<u64, E> {
  let mut tally: u64 = 0;
  while !deadline.expired() {
    insert()?;
    tally += 1;
  }
  return Ok(tally);
}

/// The deadline starts at loop entry, after connecting and preparing.
pub fn run_worker<C: Connector>(
  id: usize,
  connector: &C,
  mode: InsertMode,
  duration: Duration,
) -> Result<u64, BenchError> {
  debug!(worker = id, "connecting");
  let mut conn = connector
    .connect()
    .map_err(|err| BenchError::Connect(err.into()))?;
  let dialect = connector.dialect();

  let execute_err = |err: <C::Connection as SyncConnection>::Error| BenchError::Execute {
    worker: id,
    source: err.into(),
  };

  let tally = match mode {
    InsertMode::Plain => {
      debug!(worker = id, "looping");
      let deadline = Deadline::after(duration);
      insert_until(&deadline, || conn.execute(dialect.insert)).map_err(execute_err)?
    }
    InsertMode::Prepared => {
      let stmt = conn
        .prepare(dialect.prepared_insert)
        .map_err(|err| BenchError::Prepare {
          worker: id,
          source: err.into(),
        })?;
      debug!(worker = id, "looping");
      let deadline = Deadline::after(duration);
      insert_until(&deadline, || conn.execute_prepared(&stmt, INSERT_VALUE))
        .map_err(execute_err)?
    }
  };

  debug!(worker = id, tally, "deadline reached");
  return Ok(tally);
}
