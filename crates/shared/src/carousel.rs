/// Position within a fixed-length frame carousel.
///
/// Stepping wraps modulo the frame count in both directions, so the carousel
/// has no ends. Values are cheap to copy; `next`/`previous` return the new
/// position rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    index: usize,
    len: usize,
}

impl FrameCycle {
    /// A cycle over `len` frames, starting at frame 0. A zero length is
    /// clamped to 1 so stepping never divides by zero.
    pub fn new(len: usize) -> FrameCycle {
        FrameCycle {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&self) -> FrameCycle {
        FrameCycle {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    pub fn previous(&self) -> FrameCycle {
        FrameCycle {
            index: (self.index + self.len - 1) % self.len,
            len: self.len,
        }
    }
}
