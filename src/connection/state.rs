//! Connection handle state machine

use crate::{Error, Result};

/// Handle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Session established and usable
    Open,

    /// Released (terminal)
    Closed,
}

impl ConnectionState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, next: ConnectionState) -> bool {
        use ConnectionState::*;

        matches!((self, next), (Open, Closed))
    }

    /// Transition to new state
    pub fn transition(&mut self, next: ConnectionState) -> Result<()> {
        if !self.can_transition_to(next) {
            return Err(Error::InvalidState {
                expected: format!("valid transition from {}", self),
                actual: next.to_string(),
            });
        }
        *self = next;
        Ok(())
    }

    /// Whether the handle may still be used
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_to_closed() {
        let mut state = ConnectionState::Open;
        assert!(state.transition(ConnectionState::Closed).is_ok());
        assert_eq!(state, ConnectionState::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn test_double_close_rejected() {
        let mut state = ConnectionState::Open;
        state.transition(ConnectionState::Closed).unwrap();

        let err = state.transition(ConnectionState::Closed).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
        assert_eq!(state, ConnectionState::Closed);
    }

    #[test]
    fn test_closed_cannot_reopen() {
        let mut state = ConnectionState::Closed;
        assert!(state.transition(ConnectionState::Open).is_err());
    }

    #[test]
    fn test_open_to_open_rejected() {
        let mut state = ConnectionState::Open;
        assert!(state.transition(ConnectionState::Open).is_err());
        assert!(state.is_open());
    }
}
