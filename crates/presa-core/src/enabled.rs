use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The process-wide enable switch for the drag engine.
///
/// Written from the control surface, read by the event loop before every
/// event. This is the only datum the engine shares across threads, so it
/// carries its own synchronization; `SeqCst` keeps the contract simple
/// and the read is nowhere near hot enough to care.
///
/// Disabling does not cancel an in-progress drag: the event loop stops
/// delivering events, which freezes the session in place until the next
/// release arrives after re-enabling.
#[derive(Debug, Clone, Default)]
pub struct EnabledFlag(Arc<AtomicBool>);

impl EnabledFlag {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_flag() {
        let flag = EnabledFlag::new(true);
        let other = flag.clone();

        other.set(false);
        assert!(!flag.get());

        flag.set(true);
        assert!(other.get());
    }
}
