//! Fixed-Size Circular Buffer for Direction Samples
//!
//! ## Overview
//!
//! A ring buffer with a compile-time capacity that overwrites its oldest
//! element when full. The wind core keeps the last few vane angles in one of
//! these and averages them every calculation cycle, but the container itself
//! is generic over any `Copy` element.
//!
//! ## Why Overwrite?
//!
//! Direction samples lose value quickly: after a tack, the three-turn-old
//! reading is wrong, the newest one is right. Dropping the oldest sample on
//! insert is exactly the behaviour we want and it never fails, so there is no
//! error path to handle in the periodic task.
//!
//! ## Memory Layout
//!
//! ```text
//! CircularBuffer<u16, 3> after pushing 10, 20, 30, 40:
//! ┌─────┬─────┬─────┐
//! │ 40  │ 20  │ 30  │  ← physical slots
//! └─────┴─────┴─────┘
//!          ↑
//!          └── write_pos = 1 (oldest element, next overwrite)
//!
//! Logical view (oldest first): [20, 30, 40]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use windvane_core::buffer::CircularBuffer;
//!
//! let mut angles: CircularBuffer<u16, 3> = CircularBuffer::new();
//! for angle in [10, 20, 30, 40] {
//!     angles.push(angle);
//! }
//!
//! assert_eq!(angles.len(), 3);
//! assert_eq!(angles.get(0), Some(&20));
//! assert_eq!(angles.last(), Some(&40));
//! ```

/// Fixed-capacity ring buffer, oldest element evicted first
///
/// ## Type Parameters
///
/// - `T`: element type, `Copy` so empty slots can be initialised in `const`
/// - `N`: capacity, at least 1 (checked at compile time)
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - Logical index 0 is always the oldest stored element
///
/// ## Thread Safety
///
/// Not synchronised. The wind core only touches it from the periodic task.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Storage, `None` until a slot is first written
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid elements
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    const NON_EMPTY: () = assert!(N >= 1, "CircularBuffer capacity must be at least 1");

    /// Creates a new empty buffer
    ///
    /// Usable in `static` initialisers.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Appends an element, overwriting the oldest one when full
    pub fn push(&mut self, value: T) {
        self.data[self.write_pos] = Some(value);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of stored elements
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recently pushed element
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        self.data[idx].as_ref()
    }

    /// Element by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the buffer is full the oldest element sits at `write_pos`:
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical:   [A, B, C, D, E]
    /// logical[i] = physical[(write_pos + i) % N]
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            buffer: self,
            index: 0,
        }
    }

    /// Drop all elements
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }
}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over buffer contents, oldest first
pub struct Iter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a CircularBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
