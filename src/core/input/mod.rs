//=========================================================================
// Input
//
// Portable input types and the per-frame snapshot screens query.
//
// Notes:
// The platform layer converts OS events into `InputEvent`s, buffers them
// until the frame boundary and feeds them to `InputState::begin_frame`.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod event;
mod input_state;

//=== Public API ==========================================================
pub use event::{InputEvent, KeyCode, MouseButton};
pub use input_state::InputState;
