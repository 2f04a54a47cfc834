//! Insert throughput benchmark for auto-increment primary keys.
//!
//! A backend provides a [`Connector`]; [`execute`] either bootstraps the schema or fans out
//! worker threads that insert until their deadline and reports the summed count.

#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod runner;
pub mod schema;
pub mod store;
pub mod worker;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::config::{BenchConfig, Cli, InsertMode, RunType};
pub use crate::error::{BenchError, BoxError};
pub use crate::runner::RunReport;
pub use crate::store::{Connector, Dialect, SyncConnection};

/// Logs to stderr so stdout only carries the result line. Filter via `RUST_LOG`, default `info`.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();
}

/// Runs the configured mode. Returns a report for `run`/`prepare`, nothing for `init`.
///
/// On a worker error the other workers keep inserting until their deadline; only process exit
/// stops them.
pub fn execute<C>(config: &BenchConfig, connector: Arc<C>) -> Result<Option<RunReport>, BenchError>
where
  C: Connector + 'static,
{
  let Some(mode) = config.run_type.insert_mode() else {
    schema::initialize(connector.as_ref())?;
    return Ok(None);
  };

  info!(
    run_type = %config.run_type,
    workers = config.workers,
    duration = ?config.duration,
    "starting workers"
  );
  let report = runner::run(connector, config.workers, mode, config.duration)?;
  return Ok(Some(report));
}
