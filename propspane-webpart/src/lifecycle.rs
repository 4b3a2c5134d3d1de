//! Initialization state of a hosted web part.

use std::fmt;

/// `Uninitialized -> Ready | Failed`, one transition per initialization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    Ready,
    /// Initialization failed with the given reason. Re-initializing may recover.
    Failed(String),
}

impl LifecycleState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LifecycleState::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LifecycleState::Failed(_))
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Uninitialized => f.write_str("uninitialized"),
            LifecycleState::Ready => f.write_str("ready"),
            LifecycleState::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
