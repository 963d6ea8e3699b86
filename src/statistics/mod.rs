//! Statistical summaries over a sliding window
//!
//! This module provides fixed-capacity structures that summarize the most
//! recent samples of a stream. Memory is allocated once, up front.
//!
//! # Example
//!
//! ```
//! use slidingstats::statistics::SlidingWindowStats;
//!
//! let mut window = SlidingWindowStats::new(5).unwrap();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     window.insert(value).unwrap();
//! }
//!
//! println!("Average: {}", window.average());
//! println!("Max: {}", window.maximum());
//! println!("Min: {}", window.minimum());
//! ```

mod sliding_window;

pub use sliding_window::{ExtremaMode, SlidingWindowStats};

/// Compute the buffer memory needed for a window of the given capacity
pub fn memory_for_window(capacity: usize) -> usize {
    capacity * core::mem::size_of::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_for_window() {
        assert_eq!(memory_for_window(0), 0);
        assert_eq!(memory_for_window(1), 8);
        assert_eq!(memory_for_window(1024), 8192);
    }
}
