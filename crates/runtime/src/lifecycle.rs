use crate::error::RuntimeError;

/// Renderer lifecycle.
///
/// ```text
/// Uninitialized -> Sizing -> Running <-> Sizing
///        \            \        \
///         `-----------`--------`--> Disposed
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    Sizing,
    Running,
    Disposed,
}

impl LifecycleState {
    pub fn can_transition_to(self, to: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, to),
            (Uninitialized, Sizing)
                | (Uninitialized, Disposed)
                | (Sizing, Running)
                | (Sizing, Disposed)
                | (Running, Sizing)
                | (Running, Disposed)
        )
    }
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn is_disposed(&self) -> bool {
        self.state == LifecycleState::Disposed
    }

    pub fn transition(&mut self, to: LifecycleState) -> Result<(), RuntimeError> {
        if !self.state.can_transition_to(to) {
            return Err(RuntimeError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        log::debug!("lifecycle: {:?} -> {:?}", self.state, to);
        self.state = to;
        Ok(())
    }

    /// Move to `Disposed` from any state.
    ///
    /// Returns `false` if already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.is_disposed() {
            return false;
        }
        log::debug!("lifecycle: {:?} -> Disposed", self.state);
        self.state = LifecycleState::Disposed;
        true
    }
}
