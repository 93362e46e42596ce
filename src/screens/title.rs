//=========================================================================
// Title Screen
//
// Enter or left click starts the game, O opens the options.
//
//=========================================================================

use screenflow::prelude::*;

use super::{fill_background, fill_centered};

/// Finish code routed to the options screen.
const TO_OPTIONS: i32 = 1;
/// Finish code routed to the gameplay screen.
const TO_GAMEPLAY: i32 = 2;

pub struct TitleScreen {
    frames: u64,
    result: i32,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self { frames: 0, result: 0 }
    }
}

impl Screen for TitleScreen {
    fn init(&mut self) {
        self.frames = 0;
        self.result = 0;
    }

    fn update(&mut self, ctx: &FrameContext<'_>) {
        self.frames += 1;

        if ctx.input.confirm_pressed() {
            self.result = TO_GAMEPLAY;
        } else if ctx.input.is_key_pressed(KeyCode::KeyO) {
            self.result = TO_OPTIONS;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        fill_background(canvas, Color::GREEN);

        let (width, _) = canvas.size();
        canvas.fill_rect(20, 20, width.saturating_sub(40), 60, Color::DARKGREEN);

        // "press enter" prompt pulses once a second
        if (self.frames / 30) % 2 == 0 {
            fill_centered(canvas, 240, 24, Color::DARKGREEN);
        }
    }

    fn unload(&mut self) {}

    fn finish(&self) -> i32 {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::update_with;
    use screenflow::core::input::InputEvent;

    #[test]
    fn enter_selects_gameplay() {
        let mut title = TitleScreen::new();
        let mut input = InputState::new();
        title.init();

        update_with(&mut title, &mut input, 0, &[InputEvent::KeyDown(KeyCode::Enter)]);
        assert_eq!(title.finish(), TO_GAMEPLAY);
    }

    #[test]
    fn click_selects_gameplay() {
        let mut title = TitleScreen::new();
        let mut input = InputState::new();

        update_with(&mut title, &mut input, 0, &[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert_eq!(title.finish(), TO_GAMEPLAY);
    }

    #[test]
    fn o_selects_options() {
        let mut title = TitleScreen::new();
        let mut input = InputState::new();

        update_with(&mut title, &mut input, 0, &[InputEvent::KeyDown(KeyCode::KeyO)]);
        assert_eq!(title.finish(), TO_OPTIONS);
    }

    #[test]
    fn idle_until_input() {
        let mut title = TitleScreen::new();
        let mut input = InputState::new();
        for frame in 0..120 {
            update_with(&mut title, &mut input, frame, &[]);
        }
        assert_eq!(title.finish(), 0);
    }

    #[test]
    fn init_clears_choice() {
        let mut title = TitleScreen::new();
        let mut input = InputState::new();
        update_with(&mut title, &mut input, 0, &[InputEvent::KeyDown(KeyCode::KeyO)]);

        title.init();
        assert_eq!(title.finish(), 0);
    }
}
