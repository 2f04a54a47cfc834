mod connection;

use std::sync::Arc;

use autoinc_bench::Cli;
use clap::Parser;
use constants::SQLITE_DEFAULT_DSN;

use crate::connection::SqliteConnector;

fn main() -> anyhow::Result<()> {
  autoinc_bench::init_tracing();

  let config = Cli::parse().into_config(SQLITE_DEFAULT_DSN)?;
  tracing::info!(db = %config.dsn, "sqlite v{}", rusqlite::version());

  let connector = Arc::new(SqliteConnector::new(&config.dsn));
  if let Some(report) = autoinc_bench::execute(&config, connector)? {
    println!("QPS : {}", report.qps());
  }
  return Ok(());
}
