//=========================================================================
// Platform Subsystem
//
// Frame driver: Winit window + pixels surface around the Director.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌─────────────────────────────────────────────┐
//  │  Winit Event Loop (ControlFlow::WaitUntil)  │
//  │   ↓                                         │
//  │  input_processor  (Winit → InputEvent)      │
//  │   ↓                                         │
//  │  InputBuffer      (until frame boundary)    │
//  │   ↓                                         │
//  │  RedrawRequested  (frame boundary)          │
//  │   ├─ InputState::begin_frame(drained)       │
//  │   ├─ Director::tick(ctx)                    │
//  │   ├─ Director::render(FrameBuffer)          │
//  │   └─ Pixels::render()                       │
//  └─────────────────────────────────────────────┘
// ```
//
// Pacing: one director tick per `1 / target_fps` seconds. Redraws that
// arrive early (expose, resize) present the last frame without ticking,
// so fade speed never depends on how often the OS asks for a redraw.
//
// Shutdown: window close or Escape calls `Director::shutdown()` once and
// exits the loop.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::{InputEvent, InputState, KeyCode};
use crate::core::render::FrameBuffer;
use crate::core::screen::{Director, FrameContext};
use input_buffer::InputBuffer;

//=== PlatformConfig ======================================================

/// Window and pacing settings, filled in by `EngineBuilder`.
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: f64,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the engine cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window owner and frame pump.
///
/// # Fields
///
/// - `window` / `surface`: created lazily in `resumed()`
/// - `frame`: CPU frame buffer the director renders into
/// - `buffer`: input accumulated since the last frame
/// - `input`: snapshot handed to screens
pub(crate) struct Platform {
    config: PlatformConfig,
    director: Director,

    window: Option<Arc<Window>>,
    surface: Option<Pixels<'static>>,
    frame: FrameBuffer,

    buffer: InputBuffer,
    input: InputState,

    frame_count: u64,
    frame_duration: Duration,
    next_frame: Instant,
    shut_down: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform around an already started director.
    ///
    /// Does not create the window yet; that happens in `resumed()`.
    pub fn new(config: PlatformConfig, director: Director) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            frame: FrameBuffer::new(config.width, config.height),
            frame_duration: Duration::from_secs_f64(1.0 / config.target_fps),
            next_frame: Instant::now(),
            config,
            director,
            window: None,
            surface: None,
            buffer: InputBuffer::new(),
            input: InputState::new(),
            frame_count: 0,
            shut_down: false,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running. The director is shut down in every case.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let result = EventLoop::new()
            .map_err(PlatformError::EventLoopCreation)
            .and_then(|event_loop| {
                event_loop
                    .run_app(&mut self)
                    .map_err(PlatformError::EventLoopExecution)
            });

        self.shutdown();
        result
    }

    //--- Frame Step -------------------------------------------------------

    /// Advances one frame: flush input, tick the director, render.
    fn step_frame(&mut self) {
        if !self.buffer.is_empty() {
            trace!(target: "platform::input", "Flushing {} events", self.buffer.len());
        }
        let events = self.buffer.drain();
        self.input.begin_frame(&events);

        let ctx = FrameContext::new(&self.input, self.frame_count);
        self.director.tick(&ctx);
        self.director.render(&mut self.frame);

        self.frame_count += 1;
    }

    /// Schedules the next tick, skipping ahead if we fell behind.
    fn advance_deadline(&mut self, now: Instant) {
        self.next_frame += self.frame_duration;
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
    }

    /// Uploads the frame buffer and presents it.
    fn present(&mut self) -> Result<(), pixels::Error> {
        if let Some(surface) = self.surface.as_mut() {
            surface.frame_mut().copy_from_slice(self.frame.as_bytes());
            surface.render()?;
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.shut_down {
            self.director.shutdown();
            self.shut_down = true;
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown();
        event_loop.exit();
    }

    fn create_surface(&self, window: &Arc<Window>) -> Result<Pixels<'static>, pixels::Error> {
        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(window));
        Pixels::new(self.config.width, self.config.height, texture)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window and its pixel surface if they don't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.close(event_loop);
                return;
            }
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        match self.create_surface(&window) {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => {
                error!(target: "platform", "Surface creation failed: {}", e);
                self.close(event_loop);
                return;
            }
        }

        self.next_frame = Instant::now();
        window.request_redraw();
        self.window = Some(window);
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(surface) = self.surface.as_mut() {
                    if let Err(e) = surface.resize_surface(size.width, size.height) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                        self.close(event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.buffer.push(input_processor::process_mouse_move(position.x, position.y));
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(&key_event) {
                    Some(InputEvent::KeyDown(KeyCode::Escape)) => {
                        info!(target: "platform", "Escape pressed, closing");
                        self.close(event_loop);
                    }
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.buffer.push(input_processor::process_mouse_button(button, state));
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if now >= self.next_frame {
                    self.step_frame();
                    self.advance_deadline(now);
                }

                if let Err(e) = self.present() {
                    error!(target: "platform", "Present failed: {}", e);
                    self.close(event_loop);
                }
            }

            _ => {
                // Ignore: Focused, Moved, etc.
            }
        }
    }

    /// Requests a redraw once the next tick is due.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shut_down {
            return;
        }

        if Instant::now() >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
