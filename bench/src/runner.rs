use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::aggregator::Aggregator;
use crate::config::InsertMode;
use crate::error::BenchError;
use crate::store::Connector;
use crate::worker::run_worker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
  pub workers: usize,
  pub duration: Duration,
  pub total: u64,
  pub elapsed: Duration,
}

impl RunReport {
  pub fn qps(&self) -> u64 {
    return self.total.checked_div(self.duration.as_secs()).unwrap_or(0);
  }
}

/// Returns as soon as any worker fails. The remaining workers are left running; the caller is
/// expected to exit.
pub fn run<C>(
  connector: Arc<C>,
  workers: usize,
  mode: InsertMode,
  duration: Duration,
) -> Result<RunReport, BenchError>
where
  C: Connector + 'static,
{
  let start = Instant::now();
  let (tx, rx) = crossbeam_channel::unbounded();

  let handles = (0..workers)
    .map(|id| {
      let tx = tx.clone();
      let connector = connector.clone();

      std::thread::Builder::new()
        .name(format!("worker-{id}"))
        .spawn(move || {
          let result = run_worker(id, connector.as_ref(), mode, duration);
          // The runner stops listening after the first failure.
          let _ = tx.send((id, result));
        })
    })
    .collect::<Result<Vec<_>, _>>()?;
  drop(tx);

  let aggregator = Aggregator::new();
  let mut reported = vec![false; workers];
  for _ in 0..workers {
    let Ok((id, result)) = rx.recv() else {
      // Every sender is gone, so some worker panicked before reporting.
      let lost = reported.iter().position(|r| !r).unwrap_or_default();
      return Err(BenchError::WorkerLost(lost));
    };
    reported[id] = true;

    let tally = result?;
    debug!(worker = id, tally, "worker flushed");
    aggregator.add_and_commit(tally);
  }

  for (id, handle) in handles.into_iter().enumerate() {
    handle.join().map_err(|_| BenchError::WorkerLost(id))?;
  }

  let report = RunReport {
    workers,
    duration,
    total: aggregator.into_total(),
    elapsed: start.elapsed(),
  };
  info!(
    workers,
    total = report.total,
    elapsed = ?report.elapsed,
    "all workers done"
  );
  return Ok(report);
}
