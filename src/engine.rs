//=========================================================================
// screenflow Engine
//
// Main entry point: configuration, screen registration, execution.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  Engine  ──run()──>  [Frame Loop]
//         │                          │                                         │
//         ├─ with_title()            └─ owns Director                          ├─ jump to initial screen
//         ├─ with_size()                                                       ├─ winit event loop
//         ├─ with_target_fps()                                                 └─ Director::shutdown()
//         ├─ with_clear_color()
//         ├─ with_initial_screen()
//         └─ with_transition()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::render::Color;
use crate::core::screen::{Director, DirectorEvent, ScreenId, TransitionConfig};
use crate::platform::{Platform, PlatformConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "screenflow"
/// - **Size**: 800x450
/// - **Target FPS**: 60.0
/// - **Clear color**: [`Color::RAYWHITE`]
/// - **Initial screen**: [`ScreenId::Logo`]
/// - **Transition**: [`TransitionConfig::default`] (0.05 in, 0.02 out, black)
///
/// # Examples
///
/// ```no_run
/// use screenflow::prelude::*;
///
/// EngineBuilder::new()
///     .with_title("my game")
///     .with_size(1280, 720)
///     .with_transition(TransitionConfig::new().with_fade_out_step(0.05))
///     .build()
///     .init(|_director| {
///         // _director.register_screen(ScreenId::Logo, LogoScreen::new());
///     })
///     .run();
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    target_fps: f64,
    clear_color: Color,
    initial_screen: ScreenId,
    transition: TransitionConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: String::from("screenflow"),
            width: 800,
            height: 450,
            target_fps: 60.0,
            clear_color: Color::RAYWHITE,
            initial_screen: ScreenId::Logo,
            transition: TransitionConfig::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical window size, which is also the frame buffer size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the target frame rate. One director tick runs per frame, so
    /// fade durations scale with this value.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "Target FPS must be positive, got {}", fps);
        self.target_fps = fps;
        self
    }

    /// Sets the background color each frame is cleared to.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Sets the screen activated (without a fade) when the engine starts.
    ///
    /// # Panics
    ///
    /// Panics if `screen` is [`ScreenId::Unknown`].
    pub fn with_initial_screen(mut self, screen: ScreenId) -> Self {
        assert!(screen.is_known(), "Initial screen must not be the unknown screen");
        self.initial_screen = screen;
        self
    }

    /// Sets fade timing and overlay color.
    pub fn with_transition(mut self, config: TransitionConfig) -> Self {
        self.transition = config;
        self
    }

    /// Builds the engine. Register screens with [`Engine::init`] before
    /// calling [`Engine::run`].
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({}x{} @ {} fps, initial screen: {})",
            self.width, self.height, self.target_fps, self.initial_screen
        );

        Engine {
            director: Director::new(self.transition).with_clear_color(self.clear_color),
            initial_screen: self.initial_screen,
            platform: PlatformConfig {
                title: self.title,
                width: self.width,
                height: self.height,
                target_fps: self.target_fps,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// screenflow runtime.
///
/// Owns the [`Director`] until [`run`](Self::run) hands it to the
/// platform frame loop.
pub struct Engine {
    director: Director,
    initial_screen: ScreenId,
    platform: PlatformConfig,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Gives mutable access to the [`Director`] to register screens.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut Director),
    {
        info!("Initializing screens");
        init_fn(&mut self.director);
        self
    }

    /// Returns a receiver for the director's screen and transition events.
    pub fn subscribe(&mut self) -> Receiver<DirectorEvent> {
        self.director.subscribe()
    }

    //--- Execution --------------------------------------------------------

    /// Activates the initial screen and runs the frame loop until the
    /// window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. `jump_to_screen(initial)`: no fade for the first screen
    /// 2. Platform event loop: one `tick` + `render` per frame (blocks here)
    /// 3. On close: `Director::shutdown()` unloads the current screen
    ///
    /// Startup and platform failures are logged; the method then returns.
    pub fn run(mut self) {
        info!("Starting engine runtime (target: {} fps)", self.platform.target_fps);

        //--- 1. Activate the first screen --------------------------------
        if let Err(e) = self.director.jump_to_screen(self.initial_screen) {
            error!("Cannot start on screen {}: {}", self.initial_screen, e);
            return;
        }

        //--- 2. Run the frame loop ----------------------------------------
        let platform = Platform::new(self.platform, self.director);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Engine shutdown complete");
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn director(&self) -> &Director {
        &self.director
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "screenflow");
        assert_eq!((builder.width, builder.height), (800, 450));
        assert_eq!(builder.target_fps, 60.0);
        assert_eq!(builder.clear_color, Color::RAYWHITE);
        assert_eq!(builder.initial_screen, ScreenId::Logo);
        assert_eq!(builder.transition, TransitionConfig::default());
    }

    #[test]
    fn builder_with_target_fps() {
        let builder = EngineBuilder::new().with_target_fps(120.0);
        assert_eq!(builder.target_fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "Target FPS must be positive")]
    fn builder_with_target_fps_panics_on_zero() {
        EngineBuilder::new().with_target_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "Target FPS must be positive")]
    fn builder_with_target_fps_panics_on_negative() {
        EngineBuilder::new().with_target_fps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_size_panics_on_zero() {
        EngineBuilder::new().with_size(0, 450);
    }

    #[test]
    #[should_panic(expected = "Initial screen must not be the unknown screen")]
    fn builder_rejects_unknown_initial_screen() {
        EngineBuilder::new().with_initial_screen(ScreenId::Unknown);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("demo")
            .with_size(320, 240)
            .with_target_fps(30.0)
            .with_clear_color(Color::BLACK)
            .with_initial_screen(ScreenId::Title)
            .build();

        assert_eq!(engine.platform.title, "demo");
        assert_eq!((engine.platform.width, engine.platform.height), (320, 240));
        assert_eq!(engine.platform.target_fps, 30.0);
        assert_eq!(engine.initial_screen, ScreenId::Title);
        assert_eq!(engine.director().clear_color(), Color::BLACK);
    }

    #[test]
    fn build_does_not_activate_a_screen() {
        let engine = EngineBuilder::new().build();
        assert_eq!(engine.director().current_screen(), ScreenId::Unknown);
    }

    #[test]
    fn init_runs_against_the_director() {
        let engine = EngineBuilder::new().build().init(|director| {
            assert!(!director.is_registered(ScreenId::Logo));
        });
        assert!(!engine.director().is_transitioning());
    }
}
