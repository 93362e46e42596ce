//=========================================================================
// Transition Controller
//=========================================================================
//
// Two-phase opacity ramp masking a screen swap.
//
// Timeline (reference steps, one tick per frame):
// ```text
//   begin ──► FadingIn  alpha += 0.05 ──► alpha > 1.01 ──► Swap
//                                                            │
//   idle  ◄── Finished ◄── alpha < -0.01 ◄── alpha -= 0.02 ◄─┘ FadingOut
// ```
//
// The controller only tracks timing. It reports the swap point through
// `TransitionStep::Swap`; the director unloads and initializes screens in
// the same tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{ScreenError, ScreenId};
use crate::core::render::{Canvas, Color};

//=== Constants ===========================================================

/// Reference fade-in rate per frame (~0.33s to opaque at 60 fps).
pub const FADE_IN_STEP: f32 = 0.05;

/// Reference fade-out rate per frame (~0.5s back to clear at 60 fps).
pub const FADE_OUT_STEP: f32 = 0.02;

/// Slack past each ramp end. Accumulated float steps rarely land exactly
/// on 1.0 or 0.0, so both thresholds sit this far outside the range.
const ALPHA_EPSILON: f32 = 0.01;

//=== FadePhase ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Overlay ramping up to opaque; old screen still current.
    FadingIn,

    /// Overlay ramping back to clear; new screen already current.
    FadingOut,
}

//=== TransitionStep ======================================================

/// Outcome of one [`TransitionController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// No transition in flight.
    Idle,

    /// Ramp advanced, no boundary crossed.
    Fading,

    /// Fade-in completed this tick: `from` must be unloaded and `to`
    /// initialized now.
    Swap { from: ScreenId, to: ScreenId },

    /// Fade-out completed this tick; the controller is idle again.
    Finished(ScreenId),
}

//=== TransitionConfig ====================================================

/// Fade timing and overlay appearance.
///
/// # Default Values
///
/// - **Fade-in step**: 0.05 per tick
/// - **Fade-out step**: 0.02 per tick
/// - **Overlay color**: black
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    fade_in_step: f32,
    fade_out_step: f32,
    overlay_color: Color,
}

impl TransitionConfig {
    pub fn new() -> Self {
        Self {
            fade_in_step: FADE_IN_STEP,
            fade_out_step: FADE_OUT_STEP,
            overlay_color: Color::BLACK,
        }
    }

    /// Sets the per-tick alpha increase while fading in.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 < step <= 1.0`.
    pub fn with_fade_in_step(mut self, step: f32) -> Self {
        assert!(step > 0.0 && step <= 1.0, "Fade-in step must be in (0, 1], got {}", step);
        self.fade_in_step = step;
        self
    }

    /// Sets the per-tick alpha decrease while fading out.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 < step <= 1.0`.
    pub fn with_fade_out_step(mut self, step: f32) -> Self {
        assert!(step > 0.0 && step <= 1.0, "Fade-out step must be in (0, 1], got {}", step);
        self.fade_out_step = step;
        self
    }

    /// Sets the overlay color. Its alpha channel is ignored.
    pub fn with_overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    pub fn fade_in_step(&self) -> f32 {
        self.fade_in_step
    }

    pub fn fade_out_step(&self) -> f32 {
        self.fade_out_step
    }

    pub fn overlay_color(&self) -> Color {
        self.overlay_color
    }

    /// Upper bound on ticks from `begin` to the swap.
    pub fn fade_in_ticks(&self) -> u32 {
        ((1.0 + ALPHA_EPSILON) / self.fade_in_step).ceil() as u32
    }

    /// Upper bound on ticks from the swap to the end of the transition.
    pub fn fade_out_ticks(&self) -> u32 {
        ((1.0 + ALPHA_EPSILON) / self.fade_out_step).ceil() as u32
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=== TransitionController ================================================

#[derive(Debug, Clone, Copy)]
struct Flight {
    phase: FadePhase,
    from: ScreenId,
    to: ScreenId,
}

/// Drives the fade ramp. At most one transition is in flight.
///
/// Idle invariant: `alpha() == 0.0` and `from() == to() == ScreenId::Unknown`.
#[derive(Debug)]
pub struct TransitionController {
    config: TransitionConfig,
    alpha: f32,
    flight: Option<Flight>,
}

impl TransitionController {
    //--- Construction -----------------------------------------------------

    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            alpha: 0.0,
            flight: None,
        }
    }

    //--- Control ----------------------------------------------------------

    /// Arms a fade from `from` to `to`, starting fully transparent.
    ///
    /// # Errors
    ///
    /// - [`ScreenError::TransitionInFlight`] if a fade is already running;
    ///   the running fade is left untouched.
    /// - [`ScreenError::UnknownScreen`] if `to` is the sentinel.
    pub fn begin(&mut self, from: ScreenId, to: ScreenId) -> Result<(), ScreenError> {
        if let Some(flight) = self.flight {
            warn!(
                target: "transition",
                "Rejected fade to {} while {} -> {} is running",
                to,
                flight.from,
                flight.to
            );
            return Err(ScreenError::TransitionInFlight {
                from: flight.from,
                to: flight.to,
                requested: to,
            });
        }

        if !to.is_known() {
            warn!(target: "transition", "Rejected fade from {} to the unknown screen", from);
            return Err(ScreenError::UnknownScreen);
        }

        debug!(target: "transition", "Fading {} -> {}", from, to);
        self.alpha = 0.0;
        self.flight = Some(Flight {
            phase: FadePhase::FadingIn,
            from,
            to,
        });
        Ok(())
    }

    /// Advances the ramp by one frame.
    pub fn tick(&mut self) -> TransitionStep {
        let Some(flight) = self.flight.as_mut() else {
            return TransitionStep::Idle;
        };

        match flight.phase {
            FadePhase::FadingIn => {
                self.alpha += self.config.fade_in_step;

                if self.alpha > 1.0 + ALPHA_EPSILON {
                    self.alpha = 1.0;
                    flight.phase = FadePhase::FadingOut;
                    trace!(target: "transition", "Fade-in complete, swapping {} -> {}", flight.from, flight.to);
                    return TransitionStep::Swap {
                        from: flight.from,
                        to: flight.to,
                    };
                }
            }
            FadePhase::FadingOut => {
                self.alpha -= self.config.fade_out_step;

                if self.alpha < -ALPHA_EPSILON {
                    let to = flight.to;
                    self.alpha = 0.0;
                    self.flight = None;
                    debug!(target: "transition", "Fade into {} complete", to);
                    return TransitionStep::Finished(to);
                }
            }
        }

        TransitionStep::Fading
    }

    //--- Rendering --------------------------------------------------------

    /// Covers the viewport with the overlay color at the current opacity.
    pub fn render_overlay(&self, canvas: &mut dyn Canvas, width: u32, height: u32) {
        if self.flight.is_none() {
            return;
        }
        canvas.fill_rect(0, 0, width, height, self.config.overlay_color.fade(self.alpha));
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_active(&self) -> bool {
        self.flight.is_some()
    }

    /// Current phase, `None` while idle.
    pub fn phase(&self) -> Option<FadePhase> {
        self.flight.map(|f| f.phase)
    }

    /// Overlay opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }

    pub fn from(&self) -> ScreenId {
        self.flight.map_or(ScreenId::Unknown, |f| f.from)
    }

    pub fn to(&self) -> ScreenId {
        self.flight.map_or(ScreenId::Unknown, |f| f.to)
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Records fill_rect calls only
    #[derive(Default)]
    struct RectLog {
        rects: Vec<(i32, i32, u32, u32, Color)>,
    }

    impl Canvas for RectLog {
        fn size(&self) -> (u32, u32) {
            (800, 450)
        }
        fn clear(&mut self, _color: Color) {}
        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
            self.rects.push((x, y, width, height, color));
        }
    }

    fn started() -> TransitionController {
        let mut controller = TransitionController::default();
        controller.begin(ScreenId::Logo, ScreenId::Title).unwrap();
        controller
    }

    /// Ticks until `stop` matches, returning how many ticks it took.
    fn ticks_until(controller: &mut TransitionController, stop: fn(TransitionStep) -> bool) -> u32 {
        for n in 1..=1000 {
            if stop(controller.tick()) {
                return n;
            }
        }
        panic!("Transition did not terminate");
    }

    //--- Config Tests -----------------------------------------------------

    #[test]
    fn config_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.fade_in_step(), 0.05);
        assert_eq!(config.fade_out_step(), 0.02);
        assert_eq!(config.overlay_color(), Color::BLACK);
    }

    #[test]
    fn config_tick_bounds_for_reference_steps() {
        let config = TransitionConfig::default();
        assert_eq!(config.fade_in_ticks(), 21);
        assert_eq!(config.fade_out_ticks(), 51);
    }

    #[test]
    #[should_panic(expected = "Fade-in step must be in (0, 1]")]
    fn config_rejects_zero_fade_in() {
        TransitionConfig::new().with_fade_in_step(0.0);
    }

    #[test]
    #[should_panic(expected = "Fade-out step must be in (0, 1]")]
    fn config_rejects_oversized_fade_out() {
        TransitionConfig::new().with_fade_out_step(1.5);
    }

    //--- Lifecycle Tests --------------------------------------------------

    #[test]
    fn idle_controller_is_cleared() {
        let mut controller = TransitionController::default();
        assert!(!controller.is_active());
        assert_eq!(controller.alpha(), 0.0);
        assert_eq!(controller.from(), ScreenId::Unknown);
        assert_eq!(controller.to(), ScreenId::Unknown);
        assert_eq!(controller.phase(), None);
        assert_eq!(controller.tick(), TransitionStep::Idle);
    }

    #[test]
    fn begin_starts_transparent_fade_in() {
        let controller = started();
        assert!(controller.is_active());
        assert_eq!(controller.phase(), Some(FadePhase::FadingIn));
        assert_eq!(controller.alpha(), 0.0);
        assert_eq!(controller.from(), ScreenId::Logo);
        assert_eq!(controller.to(), ScreenId::Title);
    }

    #[test]
    fn fade_in_swaps_on_tick_21() {
        let mut controller = started();
        let ticks = ticks_until(&mut controller, |s| matches!(s, TransitionStep::Swap { .. }));
        assert_eq!(ticks, 21);
        assert_eq!(controller.alpha(), 1.0);
        assert_eq!(controller.phase(), Some(FadePhase::FadingOut));
    }

    #[test]
    fn swap_reports_endpoints() {
        let mut controller = started();
        let mut swap = None;
        for _ in 0..21 {
            if let TransitionStep::Swap { from, to } = controller.tick() {
                swap = Some((from, to));
            }
        }
        assert_eq!(swap, Some((ScreenId::Logo, ScreenId::Title)));
    }

    #[test]
    fn fade_out_finishes_51_ticks_after_swap() {
        let mut controller = started();
        ticks_until(&mut controller, |s| matches!(s, TransitionStep::Swap { .. }));

        let ticks = ticks_until(&mut controller, |s| matches!(s, TransitionStep::Finished(_)));
        assert_eq!(ticks, 51);

        assert!(!controller.is_active());
        assert_eq!(controller.alpha(), 0.0);
        assert_eq!(controller.from(), ScreenId::Unknown);
        assert_eq!(controller.to(), ScreenId::Unknown);
    }

    #[test]
    fn alpha_is_monotonic_within_each_phase() {
        let mut controller = started();
        let mut last = controller.alpha();

        loop {
            let step = controller.tick();
            let alpha = controller.alpha();
            match controller.phase() {
                Some(FadePhase::FadingIn) => assert!(alpha >= last, "fade-in went down"),
                Some(FadePhase::FadingOut) if matches!(step, TransitionStep::Swap { .. }) => {
                    assert_eq!(alpha, 1.0);
                }
                Some(FadePhase::FadingOut) => assert!(alpha <= last, "fade-out went up"),
                None => {
                    assert_eq!(step, TransitionStep::Finished(ScreenId::Title));
                    assert_eq!(alpha, 0.0);
                    break;
                }
            }
            last = alpha;
        }
    }

    #[test]
    fn custom_steps_follow_their_bounds() {
        let config = TransitionConfig::new()
            .with_fade_in_step(0.25)
            .with_fade_out_step(0.5);
        let mut controller = TransitionController::new(config);
        controller.begin(ScreenId::Title, ScreenId::Options).unwrap();

        let fade_in = ticks_until(&mut controller, |s| matches!(s, TransitionStep::Swap { .. }));
        let fade_out = ticks_until(&mut controller, |s| matches!(s, TransitionStep::Finished(_)));

        assert_eq!(fade_in, 5);
        assert_eq!(fade_out, 3);
        assert!(fade_in <= config.fade_in_ticks());
        assert!(fade_out <= config.fade_out_ticks());
    }

    //--- Rejection Tests --------------------------------------------------

    #[test]
    fn begin_while_active_is_rejected_without_corruption() {
        let mut controller = started();
        for _ in 0..5 {
            controller.tick();
        }
        let alpha = controller.alpha();

        let err = controller.begin(ScreenId::Title, ScreenId::Ending).unwrap_err();
        assert_eq!(
            err,
            ScreenError::TransitionInFlight {
                from: ScreenId::Logo,
                to: ScreenId::Title,
                requested: ScreenId::Ending,
            }
        );
        assert_eq!(controller.from(), ScreenId::Logo);
        assert_eq!(controller.to(), ScreenId::Title);
        assert_eq!(controller.alpha(), alpha);
        assert_eq!(controller.phase(), Some(FadePhase::FadingIn));
    }

    #[test]
    fn begin_to_unknown_is_rejected() {
        let mut controller = TransitionController::default();
        assert_eq!(
            controller.begin(ScreenId::Logo, ScreenId::Unknown),
            Err(ScreenError::UnknownScreen)
        );
        assert!(!controller.is_active());
    }

    #[test]
    fn can_begin_again_after_finishing() {
        let mut controller = started();
        ticks_until(&mut controller, |s| matches!(s, TransitionStep::Finished(_)));
        assert!(controller.begin(ScreenId::Title, ScreenId::Gameplay).is_ok());
    }

    //--- Overlay Tests ----------------------------------------------------

    #[test]
    fn overlay_covers_viewport_at_current_alpha() {
        let mut controller = started();
        for _ in 0..10 {
            controller.tick();
        }

        let mut canvas = RectLog::default();
        controller.render_overlay(&mut canvas, 800, 450);

        assert_eq!(canvas.rects.len(), 1);
        let (x, y, w, h, color) = canvas.rects[0];
        assert_eq!((x, y, w, h), (0, 0, 800, 450));
        assert_eq!(color, Color::BLACK.fade(controller.alpha()));
    }

    #[test]
    fn overlay_uses_configured_color() {
        let config = TransitionConfig::new().with_overlay_color(Color::WHITE);
        let mut controller = TransitionController::new(config);
        controller.begin(ScreenId::Logo, ScreenId::Title).unwrap();
        controller.tick();

        let mut canvas = RectLog::default();
        controller.render_overlay(&mut canvas, 10, 10);
        let color = canvas.rects[0].4;
        assert_eq!((color.r, color.g, color.b), (255, 255, 255));
    }

    #[test]
    fn idle_overlay_draws_nothing() {
        let controller = TransitionController::default();
        let mut canvas = RectLog::default();
        controller.render_overlay(&mut canvas, 800, 450);
        assert!(canvas.rects.is_empty());
    }
}
