//! Viewport controller.
//!
//! Holds two view slots: the *default* view, derived from the stage and the
//! image size, and the *live* view that zoom, pan and reset mutate. The live
//! view is seeded from the default view the first time an image size is
//! known and then evolves on its own. It is re-seeded only by [`reset`] or
//! when a different image size arrives.
//!
//! Construction validates the config; after that every operation is
//! synchronous and infallible. When their preconditions
//! are not met (no image yet, no pointer, modifier not held) they leave the
//! state untouched and report that nothing changed.
//!
//! [`reset`]: ViewportController::reset

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{ViewerConfig, ZoomConfig};
use crate::consts::EPSILON;
use crate::debounce::{DebounceToken, Debouncer};
use crate::error::Result;
use crate::geometry::{Dimensions, Point};
use crate::input::{InputEvent, WheelDirection};
use crate::view::ViewState;

/// Interaction phase, orthogonal to the view values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    #[default]
    Idle,
    /// Scroll-driven pan in progress; the surface hides its scrollbars.
    Panning,
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewPhase::Idle => write!(f, "Idle"),
            ViewPhase::Panning => write!(f, "Panning"),
        }
    }
}

/// What [`ViewportController::on_image_resolved`] did with a reported size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// First usable size: default and live views established.
    Seeded,
    /// Size changed: default view recomputed and live view re-seeded.
    Reseeded,
    /// Same size as before: nothing touched.
    Unchanged,
    /// Degenerate size: still awaiting a usable image.
    Deferred,
}

#[derive(Clone, Debug)]
pub struct ViewportController {
    stage: Dimensions,
    zoom: ZoomConfig,
    image: Option<Dimensions>,
    default_view: Option<ViewState>,
    live: Option<ViewState>,
    phase: ViewPhase,
    quiescence: Debouncer,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::from_valid(&ViewerConfig::default())
    }
}

impl ViewportController {
    /// Build a controller for `config`. Configs that fail
    /// [`ViewerConfig::validate`] are rejected, since inverted zoom bounds or
    /// an empty stage would yield a non-positive scale.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &ViewerConfig) -> Self {
        Self {
            stage: config.stage.dimensions(),
            zoom: config.zoom.clone(),
            image: None,
            default_view: None,
            live: None,
            phase: ViewPhase::Idle,
            quiescence: Debouncer::new(config.pan.quiescence()),
        }
    }

    pub fn stage(&self) -> Dimensions {
        self.stage
    }

    /// The live view, or `None` while awaiting an image.
    pub fn view(&self) -> Option<ViewState> {
        self.live
    }

    pub fn default_view(&self) -> Option<ViewState> {
        self.default_view
    }

    pub fn image_dimensions(&self) -> Option<Dimensions> {
        self.image
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_awaiting_image(&self) -> bool {
        self.live.is_none()
    }

    /// Live scale as a percentage of the fit scale.
    pub fn zoom_percent(&self) -> Option<f64> {
        match (self.live, self.default_view) {
            (Some(live), Some(default)) => Some(live.scale / default.scale * 100.0),
            _ => None,
        }
    }

    /// Time until the panning phase clears, if a pan is pending.
    pub fn pan_remaining(&self, now: Instant) -> Option<Duration> {
        if self.phase == ViewPhase::Panning {
            self.quiescence.remaining(now)
        } else {
            None
        }
    }

    /// Reconcile with a reported image size.
    ///
    /// Repeating the current size is a no-op so redraw-driven callbacks
    /// cannot clobber the user's zoom and pan.
    pub fn on_image_resolved(&mut self, image: Dimensions) -> ResolveOutcome {
        if !image.is_renderable() {
            warn!(
                width = image.width,
                height = image.height,
                "Ignoring degenerate image size, still awaiting image"
            );
            return ResolveOutcome::Deferred;
        }
        if self.image == Some(image) {
            return ResolveOutcome::Unchanged;
        }

        let outcome = if self.image.is_some() {
            ResolveOutcome::Reseeded
        } else {
            ResolveOutcome::Seeded
        };
        let fitted = ViewState::fitted(self.stage, image);
        self.image = Some(image);
        self.default_view = Some(fitted);
        self.live = Some(fitted);
        self.end_pan();

        info!(
            width = image.width,
            height = image.height,
            scale = fitted.scale,
            x = fitted.offset.x,
            y = fitted.offset.y,
            ?outcome,
            "Default view established"
        );
        outcome
    }

    /// The image went away; return to the awaiting state.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.default_view = None;
        self.live = None;
        self.end_pan();
        debug!("Image cleared");
    }

    /// One pointer-anchored zoom step. Returns whether the live view changed.
    pub fn zoom(
        &mut self,
        pointer: Option<Point>,
        direction: WheelDirection,
        modifier: bool,
    ) -> bool {
        if self.zoom.require_modifier && !modifier {
            return false;
        }
        let Some(pointer) = pointer.filter(|p| self.contains(*p)) else {
            return false;
        };
        let (Some(live), Some(default)) = (self.live, self.default_view) else {
            return false;
        };

        let target = match direction {
            WheelDirection::Up => live.scale * self.zoom.step_factor,
            WheelDirection::Down => live.scale / self.zoom.step_factor,
        };
        let new_scale = target.clamp(
            default.scale * self.zoom.min_relative,
            default.scale * self.zoom.max_relative,
        );
        if (new_scale - live.scale).abs() <= EPSILON * live.scale {
            return false;
        }

        let next = live.zoomed_about(pointer, new_scale);
        debug!(
            scale = next.scale,
            x = next.offset.x,
            y = next.offset.y,
            "Zoom"
        );
        self.live = Some(next);
        true
    }

    /// Mirror the offset reported by the scroll source and (re)arm the
    /// quiescence timer. Returns the timer token for hosts that schedule
    /// their own callback, or `None` when there is no image.
    pub fn pan(&mut self, offset: Point, now: Instant) -> Option<DebounceToken> {
        let live = self.live.as_mut()?;
        live.offset = offset;
        self.phase = ViewPhase::Panning;
        debug!(x = offset.x, y = offset.y, "Pan");
        Some(self.quiescence.arm(now))
    }

    /// Restore the default view. Returns false while awaiting an image.
    pub fn reset(&mut self) -> bool {
        let Some(default) = self.default_view else {
            return false;
        };
        self.live = Some(default);
        self.end_pan();
        debug!(scale = default.scale, "View reset");
        true
    }

    /// Poll the quiescence timer. True on the single Panning to Idle
    /// transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase == ViewPhase::Panning && self.quiescence.poll(now) {
            self.phase = ViewPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Timer-callback form of [`tick`](Self::tick). Stale tokens are ignored.
    pub fn settle_pan(&mut self, token: DebounceToken) -> bool {
        if self.phase == ViewPhase::Panning && self.quiescence.fire(token) {
            self.phase = ViewPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Dispatch a raw input event. Returns whether the live view changed.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Wheel {
                pointer,
                direction,
                modifier,
            } => self.zoom(pointer, direction, modifier),
            InputEvent::Scroll { offset } => self.pan(offset, now).is_some(),
            InputEvent::Reset => self.reset(),
        }
    }

    fn contains(&self, p: Point) -> bool {
        (0.0..=self.stage.width).contains(&p.x) && (0.0..=self.stage.height).contains(&p.y)
    }

    fn end_pan(&mut self) {
        self.quiescence.cancel();
        self.phase = ViewPhase::Idle;
    }
}
