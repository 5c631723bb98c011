//! The scroller session engine.
//!
//! A [`Scroller`] owns all mutable state of one scrollytelling session
//! and reacts to four external events: mount, scroll, resize, and the
//! player's ready/complete notifications. Everything else is derived
//! from those through the pure solvers in [`layout`](crate::layout),
//! [`timeline`](crate::timeline), [`scroll`](crate::scroll) and
//! [`driver`](crate::driver).

use std::time::{Duration, Instant};

use tracing::debug;

use crate::driver::frame::frame_for_progress;
use crate::driver::player::FramePlayer;
use crate::engine::config::{DEFAULT_TOTAL_FRAMES, ScrollerConfig};
use crate::engine::debounce::Debouncer;
use crate::engine::host::{ViewportHost, is_touch_handset};
use crate::foundation::core::{FrameIndex, Size, is_measurable};
use crate::foundation::error::ScrollyResult;
use crate::layout::sizer::LayoutState;
use crate::narrative::markup::{MarkdownMarkup, MarkupRenderer};
use crate::narrative::model::Narrative;
use crate::scroll::tracker::{ScrollState, scroll_progress};
use crate::timeline::overlay::TimelineScale;
use crate::view::scene::{Blurb, Scene, SurfaceView, TriggerView};

/// Lifecycle phase of a session. One-way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for a measurable viewport.
    Initializing,
    /// Live; scroll drives the story.
    Ready,
    /// The story finished. Terminal.
    Completed,
}

type CompletionCallback = Box<dyn FnOnce()>;

/// Scroll-driven story session over a host viewport.
///
/// Built with a host, a config, and a narrative; a player, a markup
/// renderer, and completion callbacks attach through the builder
/// methods. The host then feeds events in and reads [`Scroller::scene`]
/// back out.
pub struct Scroller<H: ViewportHost> {
    host: H,
    config: ScrollerConfig,
    narrative: Narrative,
    markup: Box<dyn MarkupRenderer>,
    player: Option<Box<dyn FramePlayer>>,
    on_complete: Option<CompletionCallback>,
    on_scroll_complete: Option<CompletionCallback>,

    phase: Phase,
    layout: LayoutState,
    playback_constant: f64,
    duration_frames: f64,
    total_frames: Option<u64>,
    progress: f64,
    current_frame: FrameIndex,
    trigger_height_px: f64,
    debouncer: Debouncer,
}

impl<H: ViewportHost> Scroller<H> {
    /// Session over `host` telling `narrative`, tuned by `config`.
    ///
    /// Fails if the config does not validate. The session starts
    /// [`Phase::Initializing`]; call [`Scroller::mount`] once the host
    /// can be measured.
    pub fn new(host: H, config: ScrollerConfig, narrative: Narrative) -> ScrollyResult<Self> {
        config.validate()?;
        let layout = LayoutState::derive(&config.layout_options(), Size::ZERO);
        let debouncer = Debouncer::new(config.resize_settle);
        let playback_constant = config.playback_constant;
        Ok(Self {
            host,
            config,
            narrative,
            markup: Box::new(MarkdownMarkup),
            player: None,
            on_complete: None,
            on_scroll_complete: None,
            phase: Phase::Initializing,
            layout,
            playback_constant,
            duration_frames: DEFAULT_TOTAL_FRAMES as f64,
            total_frames: None,
            progress: 0.0,
            current_frame: FrameIndex(0),
            trigger_height_px: 0.0,
            debouncer,
        })
    }

    /// Attach the frame player this session drives.
    pub fn with_player(mut self, player: impl FramePlayer + 'static) -> Self {
        self.player = Some(Box::new(player));
        self
    }

    /// Replace the markup renderer for blurb text.
    pub fn with_markup(mut self, markup: impl MarkupRenderer + 'static) -> Self {
        self.markup = Box::new(markup);
        self
    }

    /// Run `callback` once when the player finishes playing naturally.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Run `callback` once when the story completes.
    pub fn on_scroll_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_scroll_complete = Some(Box::new(callback));
        self
    }

    #[tracing::instrument(skip(self))]
    /// Measure the host and go live.
    ///
    /// Derives the layout, the live playback constant, and the opening
    /// trigger extent, then computes initial progress. A host whose
    /// viewport cannot be measured yet leaves the session initializing;
    /// a later applied resize promotes it.
    pub fn mount(&mut self) {
        let viewport = self.host.viewport();
        self.playback_constant = self.config.playback_constant_for(viewport.width);
        if !is_measurable(viewport) {
            debug!("mount deferred, viewport not measurable");
            return;
        }
        self.layout = LayoutState::derive(&self.config.layout_options(), viewport);
        self.phase = Phase::Ready;
        self.trigger_height_px = self.timeline_scale().trigger_extent_px(viewport.height);
        debug!(
            width = viewport.width,
            height = viewport.height,
            trigger_height = self.trigger_height_px,
            "mounted"
        );
        self.handle_scroll();
    }

    /// React to a host scroll event.
    ///
    /// Recomputes progress from the measured trigger bounds, drives the
    /// player to the matching frame, and hands off to completion the
    /// first time progress reaches one. Ignored while initializing or
    /// while the host reports an unlaid-out trigger; after completion it
    /// keeps the visible frame in step without re-running side effects.
    pub fn handle_scroll(&mut self) {
        if self.phase == Phase::Initializing {
            return;
        }
        let bounds = self.host.trigger_bounds();
        if bounds.height <= 0.0 {
            return;
        }
        let viewport_height = self.host.viewport().height;
        self.progress = scroll_progress(self.host.scroll_y(), bounds, viewport_height);
        self.drive_frame();
        if self.progress >= 1.0 {
            self.enter_completed();
        }
    }

    /// Note a host resize event now.
    pub fn handle_resize(&mut self) {
        self.handle_resize_at(Instant::now());
    }

    /// Note a host resize event observed at `now`.
    ///
    /// Resizes coalesce; nothing is applied until a tick finds the burst
    /// settled.
    pub fn handle_resize_at(&mut self, now: Instant) {
        self.debouncer.note_at(now);
    }

    /// Poll the resize debouncer against the current time.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Poll the resize debouncer at `now`, applying a settled burst.
    pub fn tick_at(&mut self, now: Instant) {
        if self.debouncer.poll_at(now) {
            self.apply_resize();
        }
    }

    /// Whether a resize burst is waiting to settle.
    pub fn resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time left until a pending resize burst settles, at `now`.
    pub fn time_until_resize(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_settle(now)
    }

    #[tracing::instrument(skip(self))]
    /// React to the player reporting its timeline loaded.
    ///
    /// Samples the frame count, substituting the default length for a
    /// missing or empty report, parks the player on frame zero, and
    /// re-derives the trigger extent and the held frame. No-op without
    /// an attached player.
    pub fn on_player_ready(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let total = player
            .total_frames()
            .filter(|&frames| frames > 0)
            .unwrap_or(DEFAULT_TOTAL_FRAMES);
        self.total_frames = Some(total);
        self.duration_frames = total as f64;
        player.seek_and_hold(FrameIndex(0));
        self.current_frame = FrameIndex(0);
        if self.phase == Phase::Ready {
            let viewport_height = self.host.viewport().height;
            self.trigger_height_px = self.timeline_scale().trigger_extent_px(viewport_height);
        }
        debug!(total_frames = total, "player ready");
        self.drive_frame();
    }

    /// React to the player finishing playback on its own.
    ///
    /// Pins the last frame, fires the natural-completion callback, and
    /// completes a live story. Distinct from scroll completion: it can
    /// arrive at any scroll position.
    pub fn on_player_complete(&mut self) {
        if self.player.is_none() {
            return;
        }
        debug!("player completed");
        self.pin_last_frame();
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        if self.phase == Phase::Ready {
            self.enter_completed();
        }
    }

    /// Snapshot the session for rendering.
    pub fn scene(&self) -> Scene {
        let surface = SurfaceView {
            width: self.layout.render.width,
            height: self.layout.render.height,
            has_animation: self.player.is_some(),
            completed: self.phase == Phase::Completed,
        };
        let trigger = (self.phase != Phase::Initializing).then(|| {
            let scale = self.timeline_scale();
            let count = self.narrative.len();
            let blurbs = self
                .narrative
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| Blurb {
                    top: scale.blurb_offset_px(index, step, count),
                    markup: self.markup.render(&step.text),
                })
                .collect();
            TriggerView {
                height: self.trigger_height_px,
                settling: self.phase == Phase::Completed,
                blurbs,
            }
        });
        Scene {
            aria_description: self.config.aria_description.clone(),
            surface,
            trigger,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of the scroll-driven state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            progress: self.progress,
            current_frame: self.current_frame,
            has_completed: self.has_completed(),
            trigger_height_px: self.trigger_height_px,
        }
    }

    /// Whether the story has completed.
    pub fn has_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Latest computed progress, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Frame most recently commanded, `FrameIndex(0)` before any drive.
    pub fn current_frame(&self) -> FrameIndex {
        self.current_frame
    }

    /// Trigger height the engine wants, in pixels.
    pub fn trigger_height_px(&self) -> f64 {
        self.trigger_height_px
    }

    /// Layout derived from the last viewport measurement.
    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    /// Live scroll pace, in pixels per frame.
    pub fn playback_constant(&self) -> f64 {
        self.playback_constant
    }

    /// Frame count the player reported, `None` until ready.
    pub fn total_frames(&self) -> Option<u64> {
        self.total_frames
    }

    fn timeline_scale(&self) -> TimelineScale {
        TimelineScale::new(self.duration_frames, self.playback_constant)
    }

    fn drive_frame(&mut self) {
        let Some(total) = self.total_frames else {
            return;
        };
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let frame = frame_for_progress(self.progress, total);
        self.current_frame = frame;
        player.seek_and_hold(frame);
    }

    fn pin_last_frame(&mut self) {
        let Some(total) = self.total_frames else {
            return;
        };
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let last = FrameIndex(total.saturating_sub(1));
        self.current_frame = last;
        player.seek_and_hold(last);
    }

    fn enter_completed(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Completed;
        self.pin_last_frame();
        let viewport_height = self.host.viewport().height;
        if let Some(settled) = self
            .timeline_scale()
            .settle_extent_px(&self.narrative, viewport_height)
        {
            self.trigger_height_px = settled;
        }
        debug!(trigger_height = self.trigger_height_px, "story completed");
        if let Some(callback) = self.on_scroll_complete.take() {
            callback();
        }
    }

    fn apply_resize(&mut self) {
        let user_agent = self.host.user_agent();
        if is_touch_handset(&user_agent) {
            debug!("resize suppressed for touch handset");
            return;
        }
        let viewport = self.host.viewport();
        self.playback_constant = self.config.playback_constant_for(viewport.width);
        if !is_measurable(viewport) {
            return;
        }
        self.layout = LayoutState::derive(&self.config.layout_options(), viewport);
        let promoted = self.phase == Phase::Initializing;
        if promoted {
            self.phase = Phase::Ready;
        }
        if self.phase == Phase::Ready {
            self.trigger_height_px = self.timeline_scale().trigger_extent_px(viewport.height);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            playback_constant = self.playback_constant,
            "resize applied"
        );
        if promoted {
            self.handle_scroll();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scroller.rs"]
mod tests;
