//=========================================================================
// Ending Screen
//
// Shown after a round. Enter or a click goes back to the title.
//
//=========================================================================

use screenflow::prelude::*;

use super::{fill_background, fill_centered};

pub struct EndingScreen {
    frames: u32,
    done: bool,
}

impl EndingScreen {
    pub fn new() -> Self {
        Self {
            frames: 0,
            done: false,
        }
    }
}

impl Screen for EndingScreen {
    fn init(&mut self) {
        self.frames = 0;
        self.done = false;
    }

    fn update(&mut self, ctx: &FrameContext<'_>) {
        self.frames = self.frames.saturating_add(1);

        if ctx.input.confirm_pressed() {
            self.done = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        fill_background(canvas, Color::BLUE);

        // banner slides in over the first second
        let width = (self.frames.min(60) * 8).max(8);
        fill_centered(canvas, width, 48, Color::DARKBLUE);
    }

    fn unload(&mut self) {}

    fn finish(&self) -> i32 {
        i32::from(self.done)
    }
}
