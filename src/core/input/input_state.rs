//=========================================================================
// Input State
//=========================================================================
//
// Per-frame input snapshot handed to screens.
//
// Architecture:
//   InputEvent → begin_frame() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: begin_frame(events) → Screen::update() queries.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== InputState ==========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
#[derive(Debug, Default)]
pub struct InputState {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset by begin_frame) -----------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
}

impl InputState {
    /// Creates a new state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Starts a new frame: drops last frame's deltas, then applies `events`
    /// in order.
    pub fn begin_frame(&mut self, events: &[InputEvent]) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();

        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                // Held keys auto-repeat on most platforms; only the first counts
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown(button) => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp(button) => {
                self.buttons_down.remove(&button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` if key transitioned UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Mouse position in window pixels.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Returns `true` if Enter or the primary mouse button was pressed this
    /// frame, the "confirm" gesture screens advance on.
    pub fn confirm_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::Enter) || self.is_button_pressed(MouseButton::Left)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_lasts_one_frame() {
        let mut state = InputState::new();
        state.begin_frame(&[InputEvent::KeyDown(KeyCode::Enter)]);
        assert!(state.is_key_pressed(KeyCode::Enter));
        assert!(state.is_key_down(KeyCode::Enter));

        state.begin_frame(&[]);
        assert!(!state.is_key_pressed(KeyCode::Enter));
        assert!(state.is_key_down(KeyCode::Enter), "Key is still held");
    }

    #[test]
    fn repeated_key_down_is_not_a_new_press() {
        let mut state = InputState::new();
        state.begin_frame(&[InputEvent::KeyDown(KeyCode::Space)]);
        state.begin_frame(&[InputEvent::KeyDown(KeyCode::Space)]);
        assert!(!state.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn release_only_counts_if_held() {
        let mut state = InputState::new();
        state.begin_frame(&[InputEvent::KeyUp(KeyCode::Tab)]);
        assert!(!state.is_key_released(KeyCode::Tab));

        state.begin_frame(&[
            InputEvent::KeyDown(KeyCode::Tab),
            InputEvent::KeyUp(KeyCode::Tab),
        ]);
        assert!(state.is_key_pressed(KeyCode::Tab));
        assert!(state.is_key_released(KeyCode::Tab));
        assert!(!state.is_key_down(KeyCode::Tab));
    }

    #[test]
    fn mouse_position_keeps_last_move() {
        let mut state = InputState::new();
        state.begin_frame(&[
            InputEvent::MouseMoved { x: 1.0, y: 1.0 },
            InputEvent::MouseMoved { x: 40.0, y: 12.5 },
        ]);
        assert_eq!(state.mouse_position(), (40.0, 12.5));

        state.begin_frame(&[]);
        assert_eq!(state.mouse_position(), (40.0, 12.5));
    }

    #[test]
    fn confirm_accepts_enter_or_click() {
        let mut state = InputState::new();
        state.begin_frame(&[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert!(state.confirm_pressed());
        assert!(state.is_button_down(MouseButton::Left));

        state.begin_frame(&[
            InputEvent::MouseButtonUp(MouseButton::Left),
            InputEvent::KeyDown(KeyCode::Enter),
        ]);
        assert!(state.confirm_pressed());

        state.begin_frame(&[]);
        assert!(!state.confirm_pressed());
    }
}
