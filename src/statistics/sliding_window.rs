//! Sliding window statistics (moving average, maximum, minimum)
//!
//! Keeps the most recent `capacity` samples in a pre-allocated circular
//! buffer. Insertion is O(1); every query scans the valid slots, O(capacity).

use crate::traits::{WindowError, Windowed};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// How [`SlidingWindowStats::maximum`] and [`SlidingWindowStats::minimum`]
/// scan the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremaMode {
    /// Legacy scan: the running extreme starts at `0.0` and is replaced when
    /// a slot compares strictly beyond it, or when slot 0 holds a nonzero
    /// value.
    ///
    /// A zero-valued slot 0 never seeds the scan, so a window whose first
    /// slot holds `-0.0` reports `+0.0`.
    #[default]
    Compatible,
    /// The running extreme is seeded from the first valid slot.
    Exact,
}

/// Moving average, maximum and minimum over a fixed-size window
///
/// Samples are written into a circular buffer of `capacity` slots that is
/// allocated once and never resized. Until the buffer wraps for the first
/// time only slots `[0, cursor)` hold inserted samples; afterwards all slots
/// do, in slot order rather than insertion order.
///
/// Queries on an empty window return `0.0`.
///
/// The structure does no internal synchronization. Wrap it in a `Mutex` to
/// share it between threads.
///
/// # Example
///
/// ```
/// use slidingstats::statistics::SlidingWindowStats;
///
/// let mut window = SlidingWindowStats::new(3).unwrap();
///
/// for value in [1.0, 2.0, 3.0] {
///     window.insert(value).unwrap();
/// }
/// assert_eq!(window.average(), 2.0);
/// assert_eq!(window.maximum(), 3.0);
/// assert_eq!(window.minimum(), 1.0);
/// assert!(window.slots_filled());
///
/// // Overwrites slot 0
/// window.insert(4.0).unwrap();
/// assert_eq!(window.values(), &[4.0, 2.0, 3.0]);
/// assert_eq!(window.average(), 3.0);
/// ```
///
/// # Rejected Input
///
/// ```
/// use slidingstats::statistics::SlidingWindowStats;
/// use slidingstats::traits::WindowError;
///
/// let mut window = SlidingWindowStats::new(4).unwrap();
/// window.insert(1.5).unwrap();
///
/// assert!(matches!(
///     window.insert(f64::NAN),
///     Err(WindowError::InvalidInput { .. })
/// ));
/// assert_eq!(window.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SlidingWindowStats {
    /// Backing slots, always `capacity` long
    buffer: Vec<f64>,
    /// Slot the next sample is written to
    cursor: usize,
    /// Set once the cursor has wrapped back to slot 0
    full: bool,
    /// Samples accepted since construction or the last clear
    count: u64,
    mode: ExtremaMode,
}

impl SlidingWindowStats {
    /// Create an empty window holding up to `capacity` samples
    ///
    /// Returns [`WindowError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, WindowError> {
        Self::with_mode(capacity, ExtremaMode::default())
    }

    /// Create an empty window with an explicit [`ExtremaMode`]
    pub fn with_mode(capacity: usize, mode: ExtremaMode) -> Result<Self, WindowError> {
        if capacity == 0 {
            tracing::warn!(capacity, "rejected sliding window configuration");
            return Err(WindowError::InvalidConfiguration { capacity });
        }

        tracing::debug!(capacity, ?mode, "created sliding window");
        Ok(Self {
            buffer: vec![0.0; capacity],
            cursor: 0,
            full: false,
            count: 0,
            mode,
        })
    }

    /// Window size
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Extrema scan mode chosen at construction
    pub fn mode(&self) -> ExtremaMode {
        self.mode
    }

    /// Number of valid samples in the window
    pub fn len(&self) -> usize {
        if self.full {
            self.buffer.len()
        } else {
            self.cursor
        }
    }

    /// Check if no sample has been inserted
    pub fn is_empty(&self) -> bool {
        !self.full && self.cursor == 0
    }

    /// Whether every slot has been written at least once
    pub fn slots_filled(&self) -> bool {
        self.full
    }

    /// Number of samples accepted since construction or the last clear
    ///
    /// Unlike [`len`](Self::len) this keeps growing after the window is full.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Insert a sample, overwriting the oldest one once the window is full
    ///
    /// NaN is rejected with [`WindowError::InvalidInput`] and leaves the
    /// window untouched. Infinities are accepted.
    pub fn insert(&mut self, value: f64) -> Result<(), WindowError> {
        if value.is_nan() {
            tracing::warn!(
                capacity = self.buffer.len(),
                "rejected NaN sample for sliding window"
            );
            return Err(WindowError::InvalidInput { value });
        }

        self.buffer[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.buffer.len();
        self.count += 1;

        if !self.full && self.cursor == 0 {
            self.full = true;
            tracing::trace!(capacity = self.buffer.len(), "sliding window filled");
        }

        Ok(())
    }

    /// Insert samples in order, stopping at the first NaN
    ///
    /// Returns the number of samples inserted. Samples before a rejected one
    /// stay in the window.
    pub fn extend_from<I>(&mut self, values: I) -> Result<usize, WindowError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut inserted = 0;
        for value in values {
            self.insert(value)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Valid slots, in slot order
    fn valid(&self) -> &[f64] {
        &self.buffer[..self.len()]
    }

    /// Sum of the samples in the window
    pub fn sum(&self) -> f64 {
        self.valid().iter().sum()
    }

    /// Arithmetic mean of the samples in the window, `0.0` when empty
    pub fn average(&self) -> f64 {
        let valid = self.valid();
        if valid.is_empty() {
            return 0.0;
        }

        self.sum() / valid.len() as f64
    }

    /// Largest sample in the window, `0.0` when empty
    pub fn maximum(&self) -> f64 {
        self.extreme(|candidate, current| candidate > current)
    }

    /// Smallest sample in the window, `0.0` when empty
    pub fn minimum(&self) -> f64 {
        self.extreme(|candidate, current| candidate < current)
    }

    /// Spread between [`maximum`](Self::maximum) and [`minimum`](Self::minimum)
    pub fn range(&self) -> f64 {
        self.maximum() - self.minimum()
    }

    fn extreme(&self, beats: impl Fn(f64, f64) -> bool) -> f64 {
        let valid = self.valid();
        let Some(&first) = valid.first() else {
            return 0.0;
        };

        match self.mode {
            ExtremaMode::Compatible => {
                let mut current = 0.0;
                for (i, &value) in valid.iter().enumerate() {
                    if beats(value, current) || (i == 0 && value != 0.0) {
                        current = value;
                    }
                }
                current
            }
            ExtremaMode::Exact => valid[1..].iter().fold(first, |current, &value| {
                if beats(value, current) {
                    value
                } else {
                    current
                }
            }),
        }
    }

    /// The raw backing buffer, `capacity` slots in slot order
    ///
    /// This is a zero-copy, read-only view. Before the window is full, slots
    /// from [`len`](Self::len) onward hold `0.0` (or samples from before the
    /// last [`clear`](Self::clear)) rather than inserted samples.
    pub fn values(&self) -> &[f64] {
        &self.buffer
    }

    /// Valid samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (newer, older) = if self.full {
            self.buffer.split_at(self.cursor)
        } else {
            (&self.buffer[..self.cursor], &[][..])
        };
        older.iter().chain(newer.iter()).copied()
    }

    /// Most recently inserted sample
    pub fn latest(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let cap = self.buffer.len();
        Some(self.buffer[(self.cursor + cap - 1) % cap])
    }

    /// Reset to an empty window, keeping capacity and mode
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.cursor = 0;
        self.full = false;
        self.count = 0;
        tracing::trace!(capacity = self.buffer.len(), "sliding window cleared");
    }
}

impl Windowed for SlidingWindowStats {
    type Item = f64;

    fn insert(&mut self, item: Self::Item) -> Result<(), WindowError> {
        SlidingWindowStats::insert(self, item)
    }

    fn clear(&mut self) {
        SlidingWindowStats::clear(self);
    }

    fn capacity(&self) -> usize {
        SlidingWindowStats::capacity(self)
    }

    fn len(&self) -> usize {
        SlidingWindowStats::len(self)
    }

    fn is_full(&self) -> bool {
        self.full
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + super::memory_for_window(self.buffer.len())
    }

    fn count(&self) -> u64 {
        self.count
    }
}
