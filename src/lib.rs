//! # Slidingstats
//!
//! Fixed-window streaming statistics for Rust.
//!
//! Slidingstats keeps the most recent `N` samples of a numeric stream in a
//! pre-allocated circular buffer and answers moving average, maximum and
//! minimum queries over them. Memory use is bounded by the window size no
//! matter how many samples are added.
//!
//! ## Features
//!
//! - **Moving Average**: Arithmetic mean of the samples currently in the window
//! - **Windowed Extremes**: Maximum and minimum over the same samples
//! - **Bounded Memory**: One allocation at construction, never resized
//! - **Typed Errors**: NaN input and zero-sized windows are reported, not ignored
//!
//! ## Quick Start
//!
//! ```rust
//! use slidingstats::prelude::*;
//!
//! let mut window = SlidingWindowStats::new(3).unwrap();
//! for latency_ms in [12.0, 15.0, 11.0, 40.0] {
//!     window.insert(latency_ms).unwrap();
//! }
//!
//! // 12.0 was evicted by 40.0
//! assert_eq!(window.average(), 22.0);
//! assert_eq!(window.maximum(), 40.0);
//! ```
//!
//! ## Concurrency
//!
//! None of the structures synchronize internally. Share a window between
//! threads by wrapping it in a `Mutex` (or similar) on the caller's side.
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `statistics` (default): Sliding window average, maximum and minimum
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::{ExtremaMode, SlidingWindowStats};
}

#[cfg(feature = "statistics")]
pub use statistics::{ExtremaMode, SlidingWindowStats};
