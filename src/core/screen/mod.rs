//=========================================================================
// Screen System
//=========================================================================
//
// Screen lifecycle, finish-code routing and fade transitions.
//
// Architecture:
//   Director
//     ├─ screens: HashMap<ScreenId, Box<dyn Screen>>
//     ├─ current: ScreenId
//     └─ transition: TransitionController
//
// Flow:
//   tick()   → Screen::update() → Screen::finish() → successor() → fade
//   render() → clear → Screen::draw() → fade overlay
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputState;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod director;
mod error;
mod events;
mod screen_id;
mod transition;

//=== Public API ==========================================================

pub use director::Director;
pub use error::ScreenError;
pub use events::DirectorEvent;
pub use screen_id::{successor, ScreenId};
pub use transition::{
    FadePhase, TransitionConfig, TransitionController, TransitionStep, FADE_IN_STEP,
    FADE_OUT_STEP,
};

//=== FrameContext ========================================================

/// Per-frame data passed to [`Screen::update`].
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Input snapshot for this frame.
    pub input: &'a InputState,

    /// Frames elapsed since the engine started.
    pub frame: u64,
}

impl<'a> FrameContext<'a> {
    pub fn new(input: &'a InputState, frame: u64) -> Self {
        Self { input, frame }
    }
}

//=== Screen Trait ========================================================

/// One self-contained application mode (logo, title menu, gameplay, ...).
///
/// Screens are registered with the [`Director`] under a [`ScreenId`] and
/// only ever driven by it: `init` when they become current, `update` and
/// `draw` every frame while current, `unload` when replaced or at shutdown.
///
/// # Minimal Implementation
///
/// ```rust
/// # use screenflow::prelude::*;
/// struct Splash { frames: u32 }
///
/// impl Screen for Splash {
///     fn init(&mut self) { self.frames = 0; }
///     fn update(&mut self, _ctx: &FrameContext<'_>) { self.frames += 1; }
///     fn draw(&self, canvas: &mut dyn Canvas) {
///         let (w, h) = canvas.size();
///         canvas.fill_rect(0, 0, w, h, Color::GOLD);
///     }
///     fn unload(&mut self) {}
///     fn finish(&self) -> i32 { i32::from(self.frames > 120) }
/// }
/// ```
pub trait Screen {
    /// Loads screen-local resources and resets screen state.
    fn init(&mut self);

    /// Advances one frame of screen-local logic.
    fn update(&mut self, ctx: &FrameContext<'_>);

    /// Draws the screen into the current frame.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Releases screen-local resources.
    fn unload(&mut self);

    /// `0` while the screen keeps running; a nonzero code asks the director
    /// to move on, the value selecting which screen follows.
    fn finish(&self) -> i32;
}
