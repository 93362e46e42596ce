//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use screenflow::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Screen system
pub use crate::core::screen::{
    Director, DirectorEvent, FadePhase, FrameContext, Screen, ScreenError, ScreenId,
    TransitionConfig,
};

// Input
pub use crate::core::input::{InputState, KeyCode, MouseButton};

// Drawing
pub use crate::core::render::{Canvas, Color};
