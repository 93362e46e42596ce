//=========================================================================
// Screen Director
//=========================================================================
//
// Owns the registered screens, the current screen and the fade between
// them.
//
// Screens are stored in a HashMap by id. Exactly one of them is current
// and initialized; swaps happen either immediately (`jump_to_screen`) or
// at the midpoint of a fade (`request_transition`).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::Receiver;
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::events::EventFanout;
use super::{
    successor, DirectorEvent, FrameContext, Screen, ScreenError, ScreenId, TransitionConfig,
    TransitionController, TransitionStep,
};
use crate::core::render::{Canvas, Color};

//=== Director ============================================================

/// Drives screen lifecycle and fade transitions, one frame at a time.
///
/// # Lifecycle
///
/// 1. Register every screen with [`register_screen`](Self::register_screen)
/// 2. Activate the first one with [`jump_to_screen`](Self::jump_to_screen)
/// 3. Each frame call [`tick`](Self::tick) then [`render`](Self::render)
/// 4. Call [`shutdown`](Self::shutdown) once at exit
///
/// Screens never change the current screen themselves. They report a
/// finish code and the director routes it through [`successor`].
pub struct Director {
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    current: ScreenId,
    transition: TransitionController,
    clear_color: Color,
    events: EventFanout,
}

impl Director {
    //--- Construction -----------------------------------------------------

    /// Creates a director with no screens and no current screen.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            screens: HashMap::new(),
            current: ScreenId::Unknown,
            transition: TransitionController::new(config),
            clear_color: Color::RAYWHITE,
            events: EventFanout::default(),
        }
    }

    /// Sets the background color each frame is cleared to.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    //--- Registration -----------------------------------------------------

    /// Registers a screen under `id`. The screen is boxed for storage.
    ///
    /// Registering over an existing id replaces (and drops) the old screen
    /// without unloading it. The `Unknown` sentinel cannot be registered.
    pub fn register_screen<T>(&mut self, id: ScreenId, screen: T)
    where
        T: Screen + 'static,
    {
        if !id.is_known() {
            warn!(target: "director", "Ignoring registration under the unknown screen id");
            return;
        }

        if self.screens.insert(id, Box::new(screen)).is_some() {
            warn!(target: "director", "Screen {} was already registered and has been replaced", id);
        } else {
            debug!(target: "director", "Registered screen {}", id);
        }
    }

    /// Returns a receiver for [`DirectorEvent`]s published from now on.
    pub fn subscribe(&mut self) -> Receiver<DirectorEvent> {
        self.events.subscribe()
    }

    //--- Navigation -------------------------------------------------------

    /// Switches to `id` immediately, without a fade.
    ///
    /// Unloads the current screen (if any), initializes `id` and makes it
    /// current. Intended for activating the first screen.
    ///
    /// # Errors
    ///
    /// Rejects the `Unknown` sentinel, unregistered ids and calls made
    /// while a fade is running. Nothing is unloaded on error.
    pub fn jump_to_screen(&mut self, id: ScreenId) -> Result<(), ScreenError> {
        self.validate_target(id)?;

        if self.transition.is_active() {
            warn!(target: "director", "Rejected jump to {} during a fade", id);
            return Err(ScreenError::TransitionInFlight {
                from: self.transition.from(),
                to: self.transition.to(),
                requested: id,
            });
        }

        debug!(target: "director", "Jumping {} -> {}", self.current, id);
        self.unload_internal(self.current);
        self.init_internal(id);
        self.current = id;
        Ok(())
    }

    /// Starts a fade from the current screen to `id`.
    ///
    /// Nothing is unloaded or initialized here; the swap happens at the
    /// fade's midpoint inside [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Rejects the `Unknown` sentinel, unregistered ids and requests made
    /// while another fade is running. A rejected request leaves the running
    /// fade untouched.
    pub fn request_transition(&mut self, id: ScreenId) -> Result<(), ScreenError> {
        self.validate_target(id)?;
        self.transition.begin(self.current, id)?;

        self.events.publish(DirectorEvent::TransitionStarted {
            from: self.current,
            to: id,
        });
        Ok(())
    }

    //--- Frame Loop -------------------------------------------------------

    /// Advances one frame.
    ///
    /// While a fade runs only the fade advances; the current screen's
    /// `update` is not called. Otherwise the current screen updates and its
    /// finish code may start a fade to its successor.
    pub fn tick(&mut self, ctx: &FrameContext<'_>) {
        if self.transition.is_active() {
            self.tick_transition();
            return;
        }

        let Some(screen) = self.screens.get_mut(&self.current) else {
            trace!(target: "director", "No current screen to update");
            return;
        };

        screen.update(ctx);
        let code = screen.finish();

        if let Some(next) = successor(self.current, code) {
            debug!(target: "director", "Screen {} finished with code {}, next {}", self.current, code, next);
            if let Err(e) = self.request_transition(next) {
                warn!(target: "director", "Cannot leave {}: {}", self.current, e);
            }
        }
    }

    /// Draws the frame: background, current screen, then the fade overlay.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(self.clear_color);

        if let Some(screen) = self.screens.get(&self.current) {
            screen.draw(canvas);
        }

        if self.transition.is_active() {
            let (width, height) = canvas.size();
            self.transition.render_overlay(canvas, width, height);
        }
    }

    /// Unloads the current screen. Later calls are no-ops.
    pub fn shutdown(&mut self) {
        if !self.current.is_known() {
            return;
        }

        info!(target: "director", "Shutting down, unloading {}", self.current);
        self.unload_internal(self.current);
        self.current = ScreenId::Unknown;
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    pub fn is_registered(&self, id: ScreenId) -> bool {
        self.screens.contains_key(&id)
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    //--- Internal Helpers -------------------------------------------------

    fn validate_target(&self, id: ScreenId) -> Result<(), ScreenError> {
        if !id.is_known() {
            warn!(target: "director", "Rejected navigation to the unknown screen");
            return Err(ScreenError::UnknownScreen);
        }
        if !self.screens.contains_key(&id) {
            warn!(target: "director", "Rejected navigation to unregistered screen {}", id);
            return Err(ScreenError::Unregistered(id));
        }
        Ok(())
    }

    fn tick_transition(&mut self) {
        match self.transition.tick() {
            TransitionStep::Swap { from, to } => {
                // Unload and init both happen on the tick that crosses full opacity
                self.unload_internal(from);
                self.init_internal(to);
                self.current = to;
                self.events.publish(DirectorEvent::TransitionMidpoint { from, to });
            }
            TransitionStep::Finished(to) => {
                self.events.publish(DirectorEvent::TransitionFinished(to));
            }
            TransitionStep::Fading | TransitionStep::Idle => {}
        }
    }

    fn unload_internal(&mut self, id: ScreenId) {
        if let Some(screen) = self.screens.get_mut(&id) {
            debug!(target: "director", "Unloading screen {}", id);
            screen.unload();
            self.events.publish(DirectorEvent::ScreenExited(id));
        }
    }

    fn init_internal(&mut self, id: ScreenId) {
        if let Some(screen) = self.screens.get_mut(&id) {
            debug!(target: "director", "Initializing screen {}", id);
            screen.init();
            self.events.publish(DirectorEvent::ScreenEntered(id));
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

//=== Tests ===============================================================
