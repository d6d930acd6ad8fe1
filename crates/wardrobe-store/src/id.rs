//! Time-derived id assignment.

use std::sync::atomic::{AtomicI64, Ordering};

/// Generates ids from the current wall-clock time in milliseconds.
///
/// The legacy web client used the raw timestamp string, which collides when
/// two inserts land in the same millisecond. This generator keeps the
/// timestamp-string shape but bumps past the last issued value, so ids
/// from one generator are strictly increasing.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_timestamp_shaped() {
        let id = IdGenerator::new().next_id();
        assert!(id.parse::<i64>().is_ok());
        assert!(id.len() >= 13, "millisecond timestamps are 13+ digits");
    }

    #[test]
    fn test_same_millisecond_inserts_get_distinct_ids() {
        let generator = IdGenerator::new();
        let a = generator.next_id();
        let b = generator.next_id();
        let c = generator.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.parse::<i64>().unwrap() < b.parse::<i64>().unwrap());
    }
}
