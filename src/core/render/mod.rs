//=========================================================================
// Render Seam
//=========================================================================
//
// Minimal drawing surface shared by screens and the transition overlay.
//
// Architecture:
//   Director::render() → Canvas::clear() → Screen::draw() → overlay
//
// The core never talks to a GPU. It draws into anything implementing
// `Canvas`; the platform layer presents a `FrameBuffer` each frame.
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_buffer;

//=== Public API ==========================================================

pub use frame_buffer::FrameBuffer;

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const DARKGREEN: Color = Color::rgb(0, 117, 44);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const SKYBLUE: Color = Color::rgb(102, 191, 255);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const DARKBLUE: Color = Color::rgb(0, 82, 172);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    pub const MAROON: Color = Color::rgb(190, 33, 55);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const GOLD: Color = Color::rgb(255, 203, 0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with opacity `alpha` (clamped to `[0, 1]`).
    ///
    /// The existing alpha channel is replaced, not multiplied.
    pub fn fade(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            a: (alpha * 255.0).round() as u8,
            ..self
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

//=== Canvas Trait ========================================================

/// Drawing target for a single frame.
///
/// Coordinates are in pixels with a top-left origin. Implementations clip
/// anything outside `size()` and blend non-opaque colors over existing
/// content.
pub trait Canvas {
    /// Viewport size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fills the whole viewport with `color`, ignoring alpha.
    fn clear(&mut self, color: Color);

    /// Fills an axis-aligned rectangle, alpha-blended over the frame.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
}

//=== Tests ===============================================================
