use tracing::info;

use crate::error::BenchError;
use crate::store::{Connector, SyncConnection};

pub fn initialize<C: Connector>(connector: &C) -> Result<(), BenchError> {
  let mut conn = connector
    .connect()
    .map_err(|err| BenchError::Connect(err.into()))?;
  let dialect = connector.dialect();

  if let Some(sql) = dialect.create_database {
    conn
      .execute(sql)
      .map_err(|err| BenchError::CreateDatabase(err.into()))?;
    info!("database ready");
  }

  conn
    .execute(dialect.create_table)
    .map_err(|err| BenchError::CreateTable(err.into()))?;
  info!("table ready");

  return Ok(());
}
