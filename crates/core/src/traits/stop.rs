//! Shutdown signal abstraction

/// External stop condition, polled once per tick
pub trait StopSignal {
    /// Returns `true` once shutdown has been requested
    fn stop_requested(&mut self) -> bool;
}

/// Stop signal that fires after a fixed number of polls
///
/// `MockStop::after(0)` requests shutdown on the very first poll;
/// `MockStop::never()` never does.
#[derive(Debug, Clone, Copy)]
pub struct MockStop {
    remaining: Option<u32>,
    polls: u32,
}

impl MockStop {
    /// Fires once `polls` polls have returned `false`
    pub fn after(polls: u32) -> Self {
        Self {
            remaining: Some(polls),
            polls: 0,
        }
    }

    /// Never fires
    pub fn never() -> Self {
        Self {
            remaining: None,
            polls: 0,
        }
    }

    /// Number of times `stop_requested` has been called
    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl StopSignal for MockStop {
    fn stop_requested(&mut self) -> bool {
        self.polls += 1;
        match self.remaining.as_mut() {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_stop_after_two_polls() {
        let mut stop = MockStop::after(2);
        assert!(!stop.stop_requested());
        assert!(!stop.stop_requested());
        assert!(stop.stop_requested());
        assert!(stop.stop_requested());
        assert_eq!(stop.polls(), 4);
    }

    #[test]
    fn mock_stop_never_fires() {
        let mut stop = MockStop::never();
        for _ in 0..100 {
            assert!(!stop.stop_requested());
        }
    }
}
