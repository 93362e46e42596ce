//=========================================================================
// Options Screen
//
// Placeholder settings page. Up/Down moves the highlighted row; Backspace,
// Enter or a click returns to the title.
//
//=========================================================================

use screenflow::prelude::*;

use super::fill_background;

const ROWS: usize = 3;
const ROW_HEIGHT: u32 = 40;

pub struct OptionsScreen {
    selected: usize,
    done: bool,
}

impl OptionsScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            done: false,
        }
    }
}

impl Screen for OptionsScreen {
    fn init(&mut self) {
        self.done = false;
    }

    fn update(&mut self, ctx: &FrameContext<'_>) {
        let input = ctx.input;

        if input.is_key_pressed(KeyCode::ArrowDown) {
            self.selected = (self.selected + 1) % ROWS;
        }
        if input.is_key_pressed(KeyCode::ArrowUp) {
            self.selected = (self.selected + ROWS - 1) % ROWS;
        }

        if input.is_key_pressed(KeyCode::Backspace) || input.confirm_pressed() {
            self.done = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        fill_background(canvas, Color::SKYBLUE);

        let (width, _) = canvas.size();
        for row in 0..ROWS {
            let color = if row == self.selected {
                Color::DARKBLUE
            } else {
                Color::BLUE
            };
            let y = 80 + (row as u32 * (ROW_HEIGHT + 10)) as i32;
            canvas.fill_rect(40, y, width.saturating_sub(80), ROW_HEIGHT, color);
        }
    }

    fn unload(&mut self) {}

    fn finish(&self) -> i32 {
        i32::from(self.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{update_with, CountingCanvas};
    use screenflow::core::input::InputEvent;

    #[test]
    fn backspace_returns() {
        let mut options = OptionsScreen::new();
        let mut input = InputState::new();

        update_with(&mut options, &mut input, 0, &[InputEvent::KeyDown(KeyCode::Backspace)]);
        assert_eq!(options.finish(), 1);
    }

    #[test]
    fn selection_wraps() {
        let mut options = OptionsScreen::new();
        let mut input = InputState::new();

        update_with(&mut options, &mut input, 0, &[InputEvent::KeyDown(KeyCode::ArrowUp)]);
        assert_eq!(options.selected, ROWS - 1);

        update_with(&mut options, &mut input, 1, &[InputEvent::KeyUp(KeyCode::ArrowUp)]);
        update_with(&mut options, &mut input, 2, &[InputEvent::KeyDown(KeyCode::ArrowDown)]);
        assert_eq!(options.selected, 0);
        assert_eq!(options.finish(), 0);
    }

    #[test]
    fn selection_survives_reentry() {
        let mut options = OptionsScreen::new();
        let mut input = InputState::new();
        update_with(&mut options, &mut input, 0, &[InputEvent::KeyDown(KeyCode::ArrowDown)]);

        options.init();
        assert_eq!(options.selected, 1);
        assert_eq!(options.finish(), 0);
    }

    #[test]
    fn draws_every_row() {
        let options = OptionsScreen::new();
        let mut canvas = CountingCanvas::default();
        options.draw(&mut canvas);
        assert_eq!(canvas.rects, 1 + ROWS);
    }
}
