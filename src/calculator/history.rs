//! Bounded, most-recent-first log of completed calculations.

use std::collections::VecDeque;

/// Default number of records kept before the oldest is evicted.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl History {
    /// Create an empty log holding at most `limit` records (at least one).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a calculation, evicting the oldest entry if the log is full.
    pub fn push(&mut self, record: String) {
        self.entries.push_front(record);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Copy of the records, newest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut history = History::default();
        history.push("1 + 1 = 2".to_string());
        history.push("2 + 2 = 4".to_string());
        assert_eq!(history.snapshot(), vec!["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.push(format!("entry {i}"));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.snapshot(), vec!["entry 4", "entry 3", "entry 2"]);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut history = History::new(0);
        history.push("a".to_string());
        history.push("b".to_string());
        assert_eq!(history.limit(), 1);
        assert_eq!(history.snapshot(), vec!["b"]);
    }
}
