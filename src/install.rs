use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot installation latch that only closes once installation succeeds.
pub struct InstallOnce {
    done: AtomicBool,
}

impl InstallOnce {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    /// Run `install` unless an earlier run succeeded.
    ///
    /// Returns `Ok(false)` when skipped. A failed run leaves the latch open so
    /// a later trigger can retry.
    pub fn run<E>(&self, install: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if self.is_done() {
            return Ok(false);
        }
        install()?;
        self.done.store(true, Ordering::SeqCst);
        Ok(true)
    }
}

impl Default for InstallOnce {
    fn default() -> Self {
        Self::new()
    }
}
