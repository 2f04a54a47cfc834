use thiserror::Error;

/// Driver errors are carried opaquely; the variant says which step failed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum BenchError {
  #[error("Failed to connect to the target store")]
  Connect(#[source] BoxError),

  #[error("Failed to create database")]
  CreateDatabase(#[source] BoxError),

  #[error("Failed to create table")]
  CreateTable(#[source] BoxError),

  #[error("Worker {worker} failed to prepare the insert statement")]
  Prepare {
    worker: usize,
    #[source]
    source: BoxError,
  },

  #[error("Insert failed on worker {worker}")]
  Execute {
    worker: usize,
    #[source]
    source: BoxError,
  },

  #[error("Unsupported run type: {0:?} (expected init, run or prepare)")]
  UnsupportedRunType(String),

  #[error("Failed to spawn worker thread")]
  Spawn(#[from] std::io::Error),

  #[error("Worker {0} exited without reporting")]
  WorkerLost(usize),
}
