//=========================================================================
// Input Event Types
//
// Platform-independent representation of keyboard and mouse input.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputState (per-frame snapshot)
//         ↓
//    Screen::update()
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons, macro keys.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Covers the keys screens react to. Additional keys can be added as
/// needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Navigation -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Letters ----------------------------------------------------------
    KeyO,
    KeyP,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Key reported by the platform that isn't mapped above.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// - **KeyDown/KeyUp**, **MouseButtonDown/MouseButtonUp**: discrete,
///   order significant
/// - **MouseMoved**: continuous, coalesced per frame (last position wins)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),

    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Returns `true` for events whose ordering matters within a frame.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_button_events_are_discrete() {
        assert!(InputEvent::KeyDown(KeyCode::Enter).is_discrete());
        assert!(InputEvent::KeyUp(KeyCode::Enter).is_discrete());
        assert!(InputEvent::MouseButtonDown(MouseButton::Left).is_discrete());
        assert!(InputEvent::MouseButtonUp(MouseButton::Other).is_discrete());
    }

    #[test]
    fn mouse_motion_is_continuous() {
        assert!(!InputEvent::MouseMoved { x: 1.0, y: 2.0 }.is_discrete());
    }

    #[test]
    fn key_down_and_up_differ() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyUp(KeyCode::Space)
        );
    }
}
