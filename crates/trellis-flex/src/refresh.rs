//! Refresh requests raised by layout mutations
//!
//! Controllers and modifiers never recalculate on their own. Each mutation
//! bumps a shared counter and the frame driver polls it once per update
//! cycle, deciding when to run `recalculate`.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct RefreshSignal {
    pending: Rc<Cell<u64>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.set(self.pending.get() + 1);
    }

    /// Number of requests since the last [`take`](Self::take)
    pub fn pending(&self) -> u64 {
        self.pending.get()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get() > 0
    }

    /// Consume outstanding requests, returning whether there were any
    pub fn take(&self) -> bool {
        self.pending.replace(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_requests() {
        let signal = RefreshSignal::new();
        let driver = signal.clone();

        signal.request();
        signal.request();

        assert_eq!(driver.pending(), 2);
        assert!(driver.take());
        assert!(!signal.is_pending());
        assert!(!driver.take());
    }
}
