//! Fixed-capacity window of recent average-fitness values.

use crate::error::{EvolveError, Result};
use std::collections::VecDeque;

/// Number of generations the GP driver averages over.
pub const TREND_WINDOW: usize = 5;

/// A FIFO that always holds exactly `capacity` values.
///
/// It starts filled with zeros; every [`push`](TrendBuffer::push) evicts
/// the oldest value.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl TrendBuffer {
    /// # Errors
    ///
    /// [`EvolveError::InvalidTrendWindow`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EvolveError::InvalidTrendWindow);
        }
        Ok(Self {
            values: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        })
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Arithmetic mean of the window.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.capacity as f64
    }

    /// The most recently pushed value (0.0 before any push).
    pub fn latest(&self) -> f64 {
        self.values.back().copied().unwrap_or(0.0)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.contains(&value)
    }
}

impl Default for TrendBuffer {
    fn default() -> Self {
        Self {
            values: std::iter::repeat(0.0).take(TREND_WINDOW).collect(),
            capacity: TREND_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_zeros() {
        let buf = TrendBuffer::default();
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.mean(), 0.0);
        assert_eq!(buf.latest(), 0.0);
        assert!(buf.iter().all(|v| v == 0.0));
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buf = TrendBuffer::new(3).unwrap();
        for v in [1.0, 2.0, 3.0, 4.0] {
            buf.push(v);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(buf.get(0), Some(2.0));
        assert_eq!(buf.latest(), 4.0);
        assert!(!buf.contains(1.0));
        assert!(buf.contains(3.0));
    }

    #[test]
    fn test_mean_counts_prefilled_zeros() {
        let mut buf = TrendBuffer::new(5).unwrap();
        buf.push(10.0);
        assert_eq!(buf.mean(), 2.0);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(TrendBuffer::new(0), Err(EvolveError::InvalidTrendWindow));
    }
}
