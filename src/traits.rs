//! Core traits for windowed accumulators
//!
//! Every fixed-window structure implements the base [`Windowed`] trait and
//! reports failures through [`WindowError`].

use core::fmt::Debug;

/// Error raised by window construction or insertion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    /// A value that cannot be aggregated (NaN) was inserted
    InvalidInput {
        value: f64,
    },
    /// The window was configured with a size of zero
    InvalidConfiguration {
        capacity: usize,
    },
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WindowError::InvalidInput { value } => {
                write!(f, "invalid input: {} cannot be inserted into a window", value)
            }
            WindowError::InvalidConfiguration { capacity } => {
                write!(
                    f,
                    "invalid configuration: window capacity must be at least 1, found {}",
                    capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WindowError {}

/// Core trait for all fixed-capacity windowed accumulators
///
/// The window holds at most [`capacity`](Windowed::capacity) of the most
/// recent items. Older items are evicted as new ones arrive.
pub trait Windowed: Clone + Debug {
    /// The type of item the window retains
    type Item;

    /// Add an item, evicting the oldest one when the window is full
    fn insert(&mut self, item: Self::Item) -> Result<(), WindowError>;

    /// Reset the window to empty, keeping its capacity
    fn clear(&mut self);

    /// Maximum number of items retained
    fn capacity(&self) -> usize;

    /// Number of items currently retained
    fn len(&self) -> usize;

    /// Whether every slot has been written at least once
    fn is_full(&self) -> bool;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items accepted since construction or the last clear
    fn count(&self) -> u64;

    /// Check if window is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        let err = WindowError::InvalidConfiguration { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid configuration: window capacity must be at least 1, found 0"
        );

        let err = WindowError::InvalidInput { value: f64::NAN };
        assert_eq!(
            err.to_string(),
            "invalid input: NaN cannot be inserted into a window"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            WindowError::InvalidConfiguration { capacity: 0 },
            WindowError::InvalidConfiguration { capacity: 0 }
        );
        // NaN payloads never compare equal
        assert_ne!(
            WindowError::InvalidInput { value: f64::NAN },
            WindowError::InvalidInput { value: f64::NAN }
        );
    }
}
