//=========================================================================
// Gameplay Screen
//
// Arrow keys move a player box inside the play field. Enter or a click
// ends the round.
//
//=========================================================================

use log::debug;
use screenflow::prelude::*;

use super::fill_background;

const PLAYER_SIZE: u32 = 32;
const PLAYER_SPEED: i32 = 4;

pub struct GameplayScreen {
    position: (i32, i32),
    bounds: (u32, u32),
    done: bool,
}

impl GameplayScreen {
    /// Creates the screen for a `width`x`height` play field.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: (0, 0),
            bounds: (width, height),
            done: false,
        }
    }

    fn center(&self) -> (i32, i32) {
        (
            (self.bounds.0 as i32 - PLAYER_SIZE as i32) / 2,
            (self.bounds.1 as i32 - PLAYER_SIZE as i32) / 2,
        )
    }
}

impl Screen for GameplayScreen {
    fn init(&mut self) {
        self.position = self.center();
        self.done = false;
        debug!(target: "screens::gameplay", "Round started at {:?}", self.position);
    }

    fn update(&mut self, ctx: &FrameContext<'_>) {
        let input = ctx.input;
        let (mut x, mut y) = self.position;

        if input.is_key_down(KeyCode::ArrowLeft) {
            x -= PLAYER_SPEED;
        }
        if input.is_key_down(KeyCode::ArrowRight) {
            x += PLAYER_SPEED;
        }
        if input.is_key_down(KeyCode::ArrowUp) {
            y -= PLAYER_SPEED;
        }
        if input.is_key_down(KeyCode::ArrowDown) {
            y += PLAYER_SPEED;
        }

        let max_x = self.bounds.0.saturating_sub(PLAYER_SIZE) as i32;
        let max_y = self.bounds.1.saturating_sub(PLAYER_SIZE) as i32;
        self.position = (x.clamp(0, max_x), y.clamp(0, max_y));

        if input.confirm_pressed() {
            self.done = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        fill_background(canvas, Color::PURPLE);

        let (x, y) = self.position;
        canvas.fill_rect(x, y, PLAYER_SIZE, PLAYER_SIZE, Color::GOLD);
    }

    fn unload(&mut self) {}

    fn finish(&self) -> i32 {
        i32::from(self.done)
    }
}
