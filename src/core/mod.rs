//=========================================================================
// Core Systems
//
// Platform-independent logic driven once per frame by the platform layer.
//
// Responsibilities:
// - Screen lifecycle and finish-code routing (`screen`)
// - Fade transition timing between screens (`screen::transition`)
// - Per-frame input snapshot handed to screens (`input`)
// - Drawing seam shared by screens and the overlay (`render`)
//
// Notes:
// Everything here is single-threaded and frame-stepped. No call blocks
// and nothing depends on winit, so the whole state machine can be driven
// from tests with a fake canvas and a hand-built `InputState`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod render;
pub mod screen;

//=== Public API ==========================================================

pub use input::{InputEvent, InputState, KeyCode, MouseButton};
pub use render::{Canvas, Color, FrameBuffer};
pub use screen::{
    Director, DirectorEvent, FadePhase, FrameContext, Screen, ScreenError, ScreenId,
    TransitionConfig, TransitionController,
};
