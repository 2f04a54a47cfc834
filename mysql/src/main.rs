mod connection;

use std::sync::Arc;

use autoinc_bench::Cli;
use clap::Parser;
use constants::MYSQL_DEFAULT_DSN;

use crate::connection::MysqlConnector;

fn main() -> anyhow::Result<()> {
  autoinc_bench::init_tracing();

  let config = Cli::parse().into_config(MYSQL_DEFAULT_DSN)?;
  let connector = Arc::new(MysqlConnector::new(config.dsn.clone()));
  if let Ok(target) = connector.target() {
    tracing::info!(%target, "mysql target");
  }

  if let Some(report) = autoinc_bench::execute(&config, connector)? {
    println!("QPS : {}", report.qps());
  }
  return Ok(());
}
