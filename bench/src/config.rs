use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use constants::{DEFAULT_RUNTIME_SECS, DEFAULT_THREADS};

use crate::error::BenchError;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Measures insert throughput into an auto-increment table")]
pub struct Cli {
  /// Number of concurrent workers
  #[arg(long, env = "AUTOINC_THREAD", default_value_t = DEFAULT_THREADS)]
  pub thread: usize,

  /// Test time in seconds
  #[arg(
    long,
    env = "AUTOINC_RUNTIME",
    default_value_t = DEFAULT_RUNTIME_SECS,
    value_parser = clap::value_parser!(u64).range(1..),
  )]
  pub runtime: u64,

  /// Connection target; the backend's local default when omitted
  #[arg(long, env = "AUTOINC_DSN")]
  pub dsn: Option<String>,

  /// Run type: init, run or prepare
  #[arg(long, env = "AUTOINC_RUNTYPE", default_value = "init")]
  pub runtype: String,
}

impl Cli {
  pub fn into_config(self, default_dsn: &str) -> Result<BenchConfig, BenchError> {
    let run_type: RunType = self.runtype.parse()?;
    return Ok(BenchConfig {
      workers: self.thread,
      duration: Duration::from_secs(self.runtime),
      dsn: self.dsn.unwrap_or_else(|| default_dsn.to_owned()),
      run_type,
    });
  }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
  pub workers: usize,
  pub duration: Duration,
  pub dsn: String,
  pub run_type: RunType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunType {
  Init,
  Run,
  Prepare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertMode {
  Plain,
  Prepared,
}

impl RunType {
  pub fn insert_mode(self) -> Option<InsertMode> {
    return match self {
      RunType::Init => None,
      RunType::Run => Some(InsertMode::Plain),
      RunType::Prepare => Some(InsertMode::Prepared),
    };
  }
}

impl FromStr for RunType {
  type Err = BenchError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    return match s.to_ascii_lowercase().as_str() {
      "init" => Ok(RunType::Init),
      "run" => Ok(RunType::Run),
      "prepare" => Ok(RunType::Prepare),
      _ => Err(BenchError::UnsupportedRunType(s.to_owned())),
    };
  }
}

impl fmt::Display for RunType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      RunType::Init => "init",
      RunType::Run => "run",
      RunType::Prepare => "prepare",
    };
    return f.write_str(name);
  }
}
