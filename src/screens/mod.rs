//=========================================================================
// Demo Screens
//
// The five screens the binary registers with the director. Each one is a
// small frame-counted animation drawn with filled rectangles and reports
// its outcome through `finish()`:
//
//   Logo      auto-finishes once its animation ends        -> 1
//   Title     Enter / click -> 2 (Gameplay), O -> 1 (Options)
//   Options   Backspace / Enter / click                    -> 1
//   Gameplay  Enter / click                                -> 1
//   Ending    Enter / click                                -> 1
//
//=========================================================================

mod ending;
mod gameplay;
mod logo;
mod options;
mod title;

pub use ending::EndingScreen;
pub use gameplay::GameplayScreen;
pub use logo::LogoScreen;
pub use options::OptionsScreen;
pub use title::TitleScreen;

use screenflow::prelude::*;

//=== Helpers =============================================================

/// Fills the whole canvas with `color`.
pub(crate) fn fill_background(canvas: &mut dyn Canvas, color: Color) {
    let (width, height) = canvas.size();
    canvas.fill_rect(0, 0, width, height, color);
}

/// Draws a `w`x`h` rectangle centered on the canvas.
pub(crate) fn fill_centered(canvas: &mut dyn Canvas, w: u32, h: u32, color: Color) {
    let (width, height) = canvas.size();
    let x = (width as i32 - w as i32) / 2;
    let y = (height as i32 - h as i32) / 2;
    canvas.fill_rect(x, y, w, h, color);
}

//=========================================================================
// Test Support
//=========================================================================
