/// A single-slot, last-writer-wins mailbox, drained at most once per frame.
///
/// Hosts call [`FrameCoalescer::schedule`] from their event handlers and [`FrameCoalescer::take`]
/// from their frame callback (e.g. `requestAnimationFrame`, a vsync tick, or a TUI redraw). If
/// several values arrive within one frame, only the most recent survives, so the final resting
/// position is never dropped while intermediate values are.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `value` for the next frame. Returns the value it superseded, if any.
    pub fn schedule(&mut self, value: T) -> Option<T> {
        self.pending.replace(value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Drains the pending value. Call once per frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Discards the pending value without applying it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::FrameCoalescer;

    #[test]
    fn last_value_wins_within_a_frame() {
        let mut c = FrameCoalescer::new();
        assert_eq!(c.schedule(1), None);
        assert_eq!(c.schedule(2), Some(1));
        assert_eq!(c.schedule(3), Some(2));
        assert_eq!(c.peek(), Some(&3));

        assert_eq!(c.take(), Some(3));
        assert_eq!(c.take(), None);
        assert!(!c.is_pending());
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut c = FrameCoalescer::new();
        c.schedule("a");
        assert_eq!(c.cancel(), Some("a"));
        assert_eq!(c.take(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn pending_scroll_is_serializable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<FrameCoalescer<carousel::ScrollEvent>>();
    }
}
