//! Fixed-capacity sliding window of samples.
//!
//! Samples live in a preallocated ring; `head` points at the oldest sample.
//! Once the ring is full every push overwrites the oldest slot, so the
//! window always holds the `capacity` most recent samples in FIFO order.

/// Ring buffer holding the most recent samples of one signal.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    slots: Vec<f64>,
    head: usize,
    len: usize,
}

impl WindowBuffer {
    /// Create an empty window. A zero capacity window accepts pushes and
    /// discards them immediately.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a sample. Returns the evicted oldest sample when the window
    /// was already full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let cap = self.capacity();
        if cap == 0 {
            return Some(value);
        }
        if self.len < cap {
            let tail = (self.head + self.len) % cap;
            self.slots[tail] = value;
            self.len += 1;
            None
        } else {
            let evicted = std::mem::replace(&mut self.slots[self.head], value);
            self.head = (self.head + 1) % cap;
            Some(evicted)
        }
    }

    /// Sample at logical position `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        Some(self.slots[(self.head + index) % self.capacity()])
    }

    pub fn oldest(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn latest(&self) -> Option<f64> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % self.slots.len()])
    }

    /// Copy the window out in chronological order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Smallest and largest sample, ignoring NaN. `None` when empty or all NaN.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
