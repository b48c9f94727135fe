/// Single-slot register for a visual update waiting on the next display
/// refresh. Scheduling over an unexecuted value replaces it: last write wins
/// per frame, nothing queues up.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSlot<T> {
    pending: Option<T>,
    superseded: u64,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            superseded: 0,
        }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for the next frame, returning the update it replaced.
    pub fn schedule(&mut self, value: T) -> Option<T> {
        let prev = self.pending.replace(value);
        if prev.is_some() {
            self.superseded += 1;
        }
        prev
    }

    /// Hand out the pending update, if any, emptying the slot.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending update without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Updates discarded because a newer one arrived first.
    #[inline]
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}
