//=========================================================================
// Frame Buffer
//=========================================================================
//
// Software RGBA8 canvas. Rows are tightly packed, top row first, which is
// the layout `pixels::Pixels::frame_mut()` expects.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Canvas, Color};

//=== FrameBuffer =========================================================

/// CPU-side RGBA8 pixel buffer implementing [`Canvas`].
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    //--- Construction -----------------------------------------------------

    /// Creates a buffer cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; Self::byte_len(width, height)],
        }
    }

    /// Resizes the buffer, discarding its contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(Self::byte_len(width, height), 0);
    }

    //--- Access -----------------------------------------------------------

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.pixels[i..i + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    //--- Internal Helpers -------------------------------------------------

    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        if color.a == 0 {
            return;
        }

        // Clip to the viewport in i64 so large rectangles cannot overflow
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(width)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let src_a = u32::from(color.a);
        let inv_a = 255 - src_a;
        let blend = |src: u8, dst: u8| -> u8 {
            ((u32::from(src) * src_a + u32::from(dst) * inv_a + 127) / 255) as u8
        };

        for row in y0..y1 {
            let start = self.offset(x0 as u32, row as u32);
            let end = self.offset(x1 as u32 - 1, row as u32) + 4;
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px[0] = blend(color.r, px[0]);
                px[1] = blend(color.g, px[1]);
                px[2] = blend(color.b, px[2]);
                px[3] = 255;
            }
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_has_expected_size() {
        let fb = FrameBuffer::new(8, 4);
        assert_eq!(fb.size(), (8, 4));
        assert_eq!(fb.as_bytes().len(), 8 * 4 * 4);
    }

    #[test]
    fn clear_fills_every_pixel_opaque() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.clear(Color::RAYWHITE.fade(0.2));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(fb.pixel(x, y), Some(Color::RAYWHITE));
            }
        }
    }

    #[test]
    fn opaque_rect_overwrites_inside_only() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear(Color::WHITE);
        fb.fill_rect(1, 1, 2, 2, Color::MAROON);

        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(1, 1), Some(Color::MAROON));
        assert_eq!(fb.pixel(2, 2), Some(Color::MAROON));
        assert_eq!(fb.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn half_transparent_black_darkens_white() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.clear(Color::WHITE);
        fb.fill_rect(0, 0, 1, 1, Color::BLACK.fade(0.5));

        let px = fb.pixel(0, 0).unwrap();
        assert_eq!((px.r, px.g, px.b, px.a), (127, 127, 127, 255));
    }

    #[test]
    fn fully_transparent_rect_is_noop() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.clear(Color::GOLD);
        fb.fill_rect(0, 0, 2, 2, Color::BLACK.fade(0.0));
        assert_eq!(fb.pixel(1, 1), Some(Color::GOLD));
    }

    #[test]
    fn rect_is_clipped_to_viewport() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear(Color::WHITE);
        fb.fill_rect(-2, -2, 4, 4, Color::BLUE);
        fb.fill_rect(3, 3, 100, 100, Color::GREEN);
        fb.fill_rect(10, 10, 2, 2, Color::GOLD);

        assert_eq!(fb.pixel(0, 0), Some(Color::BLUE));
        assert_eq!(fb.pixel(1, 1), Some(Color::BLUE));
        assert_eq!(fb.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(fb.pixel(3, 3), Some(Color::GREEN));
        assert_eq!(fb.pixel(4, 4), None);
    }

    #[test]
    fn resize_discards_contents() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.clear(Color::WHITE);
        fb.resize(3, 1);
        assert_eq!(fb.size(), (3, 1));
        assert_eq!(fb.pixel(0, 0), Some(Color::rgba(0, 0, 0, 0)));
    }
}
