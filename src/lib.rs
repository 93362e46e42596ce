//=========================================================================
// screenflow: Library Root
//
// Screen director with fade transitions for frame-stepped games.
//
// Responsibilities:
// - Expose the screen state machine (`core::screen::Director`)
// - Expose the engine facade that opens a window and drives it
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use screenflow::prelude::*;
// # struct Logo;
// # impl Screen for Logo {
// #     fn init(&mut self) {}
// #     fn update(&mut self, _ctx: &FrameContext<'_>) {}
// #     fn draw(&self, _canvas: &mut dyn Canvas) {}
// #     fn unload(&mut self) {}
// #     fn finish(&self) -> i32 { 0 }
// # }
//
// EngineBuilder::new()
//     .build()
//     .init(|director| director.register_screen(ScreenId::Logo, Logo))
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the screen director, transitions, input snapshot and the
// drawing seam. It has no platform dependencies.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop and the pixels surface.
// `engine` configures and launches it.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
