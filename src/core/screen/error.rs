//=========================================================================
// Screen Errors
//=========================================================================
//
// Contract violations rejected by the director and transition controller.
// None of these are runtime failures; each one means the caller asked for
// something the state machine has no defined behavior for.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::ScreenId;

//=== ScreenError =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    /// The `Unknown` sentinel was used as a navigation target.
    UnknownScreen,

    /// No screen is registered under this id.
    Unregistered(ScreenId),

    /// A fade is already running; overlapping transitions are not supported.
    TransitionInFlight {
        from: ScreenId,
        to: ScreenId,
        requested: ScreenId,
    },
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownScreen => write!(f, "Cannot navigate to the unknown screen"),
            Self::Unregistered(id) => write!(f, "Screen {} is not registered", id),
            Self::TransitionInFlight { from, to, requested } => write!(
                f,
                "Transition {} -> {} still running, rejected request for {}",
                from, to, requested
            ),
        }
    }
}

impl std::error::Error for ScreenError {}

//=== Tests ===============================================================
