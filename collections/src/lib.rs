#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fixed-capacity collections for tracking recent values.

/// A circular buffer holding the last `capacity` elements pushed into it.
///
/// Useful for keeping a sliding window over changes to a value. The window
/// starts empty and grows with each push until it reaches capacity, after
/// which every push evicts the oldest element.
#[derive(Clone, Debug)]
pub struct Window<T> {
    buffer: Vec<T>,
    capacity: usize,
    cursor: usize,
}

impl<T> Window<T> {
    /// Creates an empty window that retains the last `capacity` elements.
    ///
    /// A zero capacity is a caller bug and panics.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be greater than zero");
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Pushes a new element, evicting the oldest one once the window is full.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() < self.capacity {
            self.buffer.push(value);
        } else {
            self.buffer[self.cursor] = value;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Number of elements currently held, in `0..=capacity`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Reports whether nothing has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Maximum number of elements the window retains.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the retained elements from oldest to newest.
    ///
    /// Each call starts a fresh traversal of the window as it stands at call
    /// time. The iterator is index-based and allocates nothing.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        // Once full, the slot the cursor points at is the oldest element.
        let start = if self.buffer.len() == self.capacity {
            self.cursor
        } else {
            0
        };
        (0..self.buffer.len()).map(move |offset| &self.buffer[(start + offset) % self.capacity])
    }
}
