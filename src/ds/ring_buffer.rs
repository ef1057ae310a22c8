#![allow(clippy::len_without_is_empty)]
use std::ops::Index;

/// A fixed-capacity ringbuffer
///
/// Fills up to `capacity` and then overwrites the oldest element on each push.
#[derive(Debug, Default, Clone)]
pub struct RingBuffer<T> {
    buffer: Vec<T>,
    ix: usize,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::<T>::with_capacity(capacity),
            ix: 0,
            capacity,
        }
    }

    /// Constructs a new `RingBuffer` at capacity from a provided `Vec`
    pub fn from(data: Vec<T>) -> Self {
        let capacity = data.len();
        Self {
            buffer: data,
            ix: 0,
            capacity,
        }
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert an element into the buffer, overwriting the oldest element once full
    pub fn push(&mut self, item: T) {
        if self.ix >= self.len() {
            self.buffer.push(item);
        } else {
            self.buffer[self.ix] = item;
        }
        self.ix = (self.ix + 1) % self.capacity;
    }

    /// Get a slice view of the live elements
    pub fn view(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ringbuffer_functional() {
        let mut buf = RingBuffer::new(4);
        assert_eq!(buf.len(), 0, "initialized empty");
        assert_eq!(buf.capacity(), 4, "capacity as given");

        for i in 0..4 {
            buf.push(i * 2);
        }

        assert_eq!(buf.len(), 4, "length correct");
        assert_eq!(buf.view(), [0, 2, 4, 6], "contents correct");

        buf.push(1);
        buf.push(3);
        assert_eq!(buf.len(), 4, "length unchanged");
        assert_eq!(buf.view(), [1, 3, 4, 6], "oldest elements overwritten");
        assert_eq!(buf[1], 3, "indexing works");
    }
}
