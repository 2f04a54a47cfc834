use parking_lot::Mutex;

/// Sum of the tallies flushed by finished workers.
///
/// Consuming [`Aggregator::into_total`] is the only way to read the sum, so the read can only
/// happen once nobody else holds a reference.
#[derive(Debug, Default)]
pub struct Aggregator {
  total: Mutex<u64>,
}

impl Aggregator {
  pub fn new() -> Self {
    return Self::default();
  }

  pub fn add_and_commit(&self, tally: u64) {
    *self.total.lock() += tally;
  }

  pub fn into_total(self) -> u64 {
    return self.total.into_inner();
  }
}
