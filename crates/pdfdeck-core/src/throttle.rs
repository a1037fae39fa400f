//! Trailing-edge throttle for bursty events.
//!
//! The throttle does not own a timer. Callers pass the current time in
//! milliseconds and schedule a wake-up at the deadline it returns, which
//! keeps it usable from any event loop and testable without one.

/// Coalesces a burst of values into at most one emission per window.
///
/// The first value offered while idle opens a window and returns its
/// deadline. Later values within the window replace the pending one. Calling
/// [`fire`](Self::fire) at or after the deadline emits the latest value and
/// closes the window.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window_ms: f64,
    pending: Option<T>,
    deadline: Option<f64>,
}

impl<T> Throttle<T> {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            pending: None,
            deadline: None,
        }
    }

    /// Offer a value at `now_ms`.
    ///
    /// Returns the deadline if this call opened a new window; the caller must
    /// arrange for [`fire`](Self::fire) to run then. Returns `None` when a
    /// window is already open.
    pub fn offer(&mut self, now_ms: f64, value: T) -> Option<f64> {
        self.pending = Some(value);
        match self.deadline {
            Some(_) => None,
            None => {
                let deadline = now_ms + self.window_ms;
                self.deadline = Some(deadline);
                Some(deadline)
            }
        }
    }

    /// Emit the pending value if the window has elapsed.
    ///
    /// A call before the deadline leaves the window open and returns `None`.
    pub fn fire(&mut self, now_ms: f64) -> Option<T> {
        let deadline = self.deadline?;
        if now_ms < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Drop the pending value and close the window.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}
