use std::time::Duration;

/// Debounced idle countdown driven by elapsed frame time.
///
/// Every `restart` replaces the pending countdown, so a burst of pointer
/// events yields a single expiry `delay` after the last one.
#[derive(Clone, Debug)]
pub struct IdleTimer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl IdleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn restart(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Advance by `dt`; returns true exactly once, on the step that expires.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(left) if dt >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}
