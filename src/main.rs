//=========================================================================
// screenflow Demo
//
// Opens a window and runs the five demo screens:
//
//   Logo -> Title -> (Options <-> Title) -> Gameplay -> Ending -> Title
//
// Logging: `RUST_LOG=director=debug,transition=trace screenflow`
//
//=========================================================================

mod screens;

use std::thread;

use log::info;
use screenflow::prelude::*;

use screens::{EndingScreen, GameplayScreen, LogoScreen, OptionsScreen, TitleScreen};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 450;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = EngineBuilder::new()
        .with_title("screenflow demo")
        .with_size(WIDTH, HEIGHT)
        .with_target_fps(60.0)
        .build()
        .init(|director| {
            director.register_screen(ScreenId::Logo, LogoScreen::new());
            director.register_screen(ScreenId::Title, TitleScreen::new());
            director.register_screen(ScreenId::Options, OptionsScreen::new());
            director.register_screen(ScreenId::Gameplay, GameplayScreen::new(WIDTH, HEIGHT));
            director.register_screen(ScreenId::Ending, EndingScreen::new());
        });

    //--- Event log --------------------------------------------------------
    //
    // The receiver disconnects when the director is dropped at the end of
    // `run()`, which ends this thread.
    //
    let events = engine.subscribe();
    let logger = thread::spawn(move || {
        for event in events {
            info!(target: "screenflow", "{:?}", event);
        }
    });

    engine.run();

    if logger.join().is_err() {
        log::error!("Event log thread panicked");
    }
}
