//! Fixed-Size Circular Buffer
//!
//! ## Overview
//!
//! Both histories in this crate, the wind vane samples and the per-interval
//! wind speeds, are fixed-capacity rings that overwrite their oldest entry.
//! This module provides that ring once, with the capacity fixed at compile
//! time through const generics.
//!
//! ## Zero-Filled Slots
//!
//! Unlike a queue, the ring is never "short". Slots that have not been
//! written yet hold `T::default()` and take part in whole-ring computations
//! such as the vane histogram or the gust maximum. [`CircularBuffer::len`]
//! still reports how many slots have been written, so callers can tell a
//! warmed-up ring from a fresh one.
//!
//! ```text
//! CircularBuffer<u16, 5> after pushing 1..=7:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  6  │  7  │  3  │  4  │  5  │  ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!             ↑
//!             └── cursor = 2 (next write, also the oldest value)
//!
//! snapshot() = [3, 4, 5, 6, 7]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use weatherpack_core::buffer::CircularBuffer;
//!
//! let mut ring: CircularBuffer<u16, 3> = CircularBuffer::new();
//! ring.push(10);
//! ring.push(20);
//! ring.push(30);
//! ring.push(40);
//!
//! assert_eq!(ring.snapshot(), [20, 30, 40]);
//! assert_eq!(ring.last(), Some(&40));
//! ```

/// Fixed-size ring that overwrites its oldest slot when full
///
/// ## Internal Invariants
///
/// - `cursor < N` (next write position is always valid)
/// - `len <= N`
/// - the oldest slot is at `cursor` once the ring is full
///
/// Not synchronised: rings live in the cooperative context only.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T, const N: usize> {
    /// Storage, default-initialised
    slots: [T; N],

    /// Index where the next write will occur
    cursor: usize,

    /// Number of slots written so far, saturating at N
    len: usize,
}

impl<T: Copy + Default, const N: usize> CircularBuffer<T, N> {
    /// Creates a ring with every slot set to `T::default()`
    pub fn new() -> Self {
        Self {
            slots: [T::default(); N],
            cursor: 0,
            len: 0,
        }
    }

    /// Writes at the cursor and advances it, overwriting the oldest value
    /// once the ring is full
    pub fn push(&mut self, value: T) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// All N slots, oldest to newest by cursor position
    ///
    /// Before the first wrap the leading entries are unwritten defaults.
    pub fn snapshot(&self) -> [T; N] {
        core::array::from_fn(|i| self.slots[(self.cursor + i) % N])
    }

    /// All N slots in storage order
    ///
    /// Cheaper than [`snapshot`](Self::snapshot) for order-independent
    /// computations like histograms and maxima.
    pub fn slots(&self) -> &[T; N] {
        &self.slots
    }

    /// Most recently pushed value
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.cursor == 0 { N - 1 } else { self.cursor - 1 };
        Some(&self.slots[idx])
    }

    /// Iterates written values from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Number of slots written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot has been written at least once
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Ring capacity
    pub fn capacity(&self) -> usize {
        N
    }

    /// Next write position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maps a logical index (0 = oldest written) to its slot
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]  (cursor = 2, full)
    /// Logical:   [A, B, C, D, E]
    /// logical[0] = physical[(2 + 0) % 5]
    /// ```
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            // Not wrapped yet, data starts at 0
            index
        } else {
            (self.cursor + index) % N
        };

        Some(&self.slots[actual_index])
    }
}

impl<T: Copy + Default + Ord, const N: usize> CircularBuffer<T, N> {
    /// Largest value across all N slots, unwritten defaults included
    pub fn max(&self) -> T {
        self.slots.iter().copied().max().unwrap_or_default()
    }
}

/// Iterator over written ring contents, oldest first
pub struct CircularBufferIter<'a, T, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy + Default, const N: usize> Iterator for CircularBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

impl<T: Copy + Default, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<u16, 5> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
        assert_eq!(buffer.snapshot(), [0; 5]);
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = CircularBuffer::<u16, 3>::new();

        for i in 0..5 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());
        assert_eq!(buffer.cursor(), 2);

        // 0 and 1 were overwritten
        assert_eq!(buffer.snapshot(), [2, 3, 4]);
        assert_eq!(buffer.slots(), &[3, 4, 2]);
    }

    #[test]
    fn partial_fill_snapshot_leads_with_defaults() {
        let mut buffer = CircularBuffer::<u16, 4>::new();
        buffer.push(7);
        buffer.push(8);

        assert_eq!(buffer.snapshot(), [0, 0, 7, 8]);
        assert_eq!(buffer.last(), Some(&8));
    }

    #[test]
    fn iterator_order() {
        let mut buffer = CircularBuffer::<u32, 4>::new();

        for i in 0..6 {
            buffer.push(i * 10);
        }

        let mut it = buffer.iter();
        assert_eq!(it.next(), Some(&20));
        assert_eq!(it.next(), Some(&30));
        assert_eq!(it.next(), Some(&40));
        assert_eq!(it.next(), Some(&50));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn max_covers_every_slot() {
        let mut buffer = CircularBuffer::<u32, 3>::new();
        assert_eq!(buffer.max(), 0);

        buffer.push(4);
        buffer.push(9);
        buffer.push(2);
        assert_eq!(buffer.max(), 9);

        // 4 and 9 roll out
        buffer.push(1);
        buffer.push(1);
        assert_eq!(buffer.max(), 2);
    }
}
