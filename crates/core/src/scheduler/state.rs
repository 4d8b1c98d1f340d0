//! Scheduler lifecycle state

/// Lifecycle of the haptic scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// Constructed, handles not yet confirmed
    #[default]
    Idle,
    /// Ticking
    Running,
    /// Motors zeroed; terminal
    ShuttingDown,
}

impl SchedulerState {
    /// State name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerState::Idle => "idle",
            SchedulerState::Running => "running",
            SchedulerState::ShuttingDown => "shutting down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SchedulerState::default(), SchedulerState::Idle);
        assert_eq!(SchedulerState::ShuttingDown.as_str(), "shutting down");
    }
}
