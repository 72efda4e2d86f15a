use std::fmt::Display;

/// Number of executed instructions kept for post-mortem dumps.
pub const TRACE_DEPTH: usize = 256;

/// Fixed-size ring of the most recent CPU trace entries.
///
/// Entries are stored raw and only formatted when dumped, so recording stays
/// cheap on the hot path.
pub struct TraceRing<T> {
    entries: Box<[T; TRACE_DEPTH]>,
    next: usize,
    len: usize,
}

impl<T: Copy + Default> Default for TraceRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> TraceRing<T> {
    pub fn new() -> Self {
        Self {
            entries: Box::new([T::default(); TRACE_DEPTH]),
            next: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, entry: T) {
        self.entries[self.next] = entry;
        self.next = (self.next + 1) % TRACE_DEPTH;
        self.len = (self.len + 1).min(TRACE_DEPTH);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let start = (self.next + TRACE_DEPTH - self.len) % TRACE_DEPTH;
        (0..self.len).map(move |i| &self.entries[(start + i) % TRACE_DEPTH])
    }

    pub fn last(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(&self.entries[(self.next + TRACE_DEPTH - 1) % TRACE_DEPTH])
        }
    }
}

impl<T: Copy + Default + Display> TraceRing<T> {
    pub fn dump(&self) -> Vec<String> {
        self.iter().map(|entry| entry.to_string()).collect()
    }
}
