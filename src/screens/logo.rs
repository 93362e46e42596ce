//=========================================================================
// Logo Screen
//
// Animated splash: a blinking square grows into a frame, holds, then
// fades out. Finishes on its own; input is ignored.
//
//=========================================================================

use log::debug;
use screenflow::prelude::*;

use super::{fill_background, fill_centered};

//=== Timing ==============================================================

const BLINK_FRAMES: u32 = 80;
const GROW_FRAMES: u32 = 60;
const HOLD_FRAMES: u32 = 90;
const FADE_FRAMES: u32 = 40;

const SIZE: u32 = 256;
const THICKNESS: u32 = 16;

//=== LogoScreen ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Blink,
    Grow,
    Hold,
    Fade,
    Done,
}

pub struct LogoScreen {
    stage: Stage,
    counter: u32,
}

impl LogoScreen {
    pub fn new() -> Self {
        Self {
            stage: Stage::Blink,
            counter: 0,
        }
    }

    /// Fraction of the current stage already elapsed.
    fn progress(&self, frames: u32) -> f32 {
        (self.counter as f32 / frames as f32).min(1.0)
    }
}

impl Screen for LogoScreen {
    fn init(&mut self) {
        self.stage = Stage::Blink;
        self.counter = 0;
    }

    fn update(&mut self, _ctx: &FrameContext<'_>) {
        self.counter += 1;

        let next = match self.stage {
            Stage::Blink if self.counter >= BLINK_FRAMES => Stage::Grow,
            Stage::Grow if self.counter >= GROW_FRAMES => Stage::Hold,
            Stage::Hold if self.counter >= HOLD_FRAMES => Stage::Fade,
            Stage::Fade if self.counter >= FADE_FRAMES => Stage::Done,
            stage => stage,
        };

        if next != self.stage {
            debug!(target: "screens::logo", "{:?} -> {:?}", self.stage, next);
            self.stage = next;
            self.counter = 0;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        fill_background(canvas, Color::RAYWHITE);

        let (width, height) = canvas.size();
        let left = (width as i32 - SIZE as i32) / 2;
        let top = (height as i32 - SIZE as i32) / 2;

        match self.stage {
            Stage::Blink => {
                if (self.counter / 15) % 2 == 0 {
                    canvas.fill_rect(left, top, THICKNESS, THICKNESS, Color::BLACK);
                }
            }
            Stage::Grow => {
                let grown = THICKNESS.max((SIZE as f32 * self.progress(GROW_FRAMES)) as u32);
                canvas.fill_rect(left, top, grown, THICKNESS, Color::BLACK);
                canvas.fill_rect(left, top, THICKNESS, grown, Color::BLACK);
            }
            Stage::Hold | Stage::Fade => {
                let alpha = if self.stage == Stage::Fade {
                    1.0 - self.progress(FADE_FRAMES)
                } else {
                    1.0
                };
                let ink = Color::BLACK.fade(alpha);
                let edge = (SIZE - THICKNESS) as i32;

                canvas.fill_rect(left, top, SIZE, THICKNESS, ink);
                canvas.fill_rect(left, top + THICKNESS as i32, THICKNESS, SIZE - 2 * THICKNESS, ink);
                canvas.fill_rect(left + edge, top + THICKNESS as i32, THICKNESS, SIZE - 2 * THICKNESS, ink);
                canvas.fill_rect(left, top + edge, SIZE, THICKNESS, ink);
                fill_centered(canvas, SIZE / 2, SIZE / 2, Color::MAROON.fade(alpha));
            }
            Stage::Done => {}
        }
    }

    fn unload(&mut self) {}

    fn finish(&self) -> i32 {
        i32::from(self.stage == Stage::Done)
    }
}

//=========================================================================
// Tests
//=========================================================================
