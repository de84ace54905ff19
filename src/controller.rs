//! The event-handler core. Every media or pointer event maps onto exactly one
//! method here; each method mutates at most the playback state and a single
//! view fragment through the `ControlSurface` seam. The controller never
//! touches the DOM directly, so the full state machine runs under native
//! tests with fake backends.

use crate::config::PlayerConfig;
use crate::format::seconds_to_display;
use crate::state::PlaybackState;
use crate::timeline::{buffered_percent, elapsed_percent, percent_width, seek_target, TimeRange};

/// Label shown in place of a duration the formatter cannot express, e.g. the
/// infinite duration of a live stream.
pub const DURATION_FALLBACK: &str = "Not Applicable";

/// Commands and reads against the external media resource. The widget never
/// owns the resource; the platform and the user keep driving it
/// independently, and its fields are re-read on every event.
pub trait Media {
    fn play(&self);
    fn pause(&self);
    fn seek(&self, seconds: f64);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn buffered(&self) -> Vec<TimeRange>;
}

/// Glyph shown on the play/pause control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

/// Targeted mutations of individual view fragments. Implementations write
/// each value in place; none of them rebuild anything.
pub trait ControlSurface {
    fn set_play_glyph(&mut self, glyph: Glyph);
    /// Marks or unmarks the play control as a replay affordance after the
    /// media ended.
    fn set_replay_hint(&mut self, on: bool);
    fn set_elapsed_text(&mut self, text: &str);
    /// Writes the duration label, creating its fragment on first use.
    fn set_duration_text(&mut self, text: &str);
    fn set_played_width(&mut self, width: &str);
    fn set_buffered_width(&mut self, width: &str);
    fn set_fullscreen(&mut self, on: bool);
    fn set_toolbar_active(&mut self, on: bool);
}

pub struct Controller<M, S> {
    config: PlayerConfig,
    state: PlaybackState,
    media: M,
    surface: S,
}

impl<M: Media, S: ControlSurface> Controller<M, S> {
    pub fn new(media: M, surface: S, config: PlayerConfig) -> Self {
        let state = PlaybackState::seed(config.autoplay);
        Self {
            config,
            state,
            media,
            surface,
        }
    }

    /// Completes construction: pins the toolbar visible when animation is
    /// off, then runs the one unconditional toggle that realizes the
    /// autoplay flag (see [`PlaybackState::seed`]).
    pub fn start(&mut self) {
        if !self.config.animate.toolbar {
            self.surface.set_toolbar_active(true);
        }
        self.play_pause();
    }

    /// The only place `state.playing` decides whether to command the media.
    pub fn play_pause(&mut self) {
        if self.state.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        self.media.play();
        self.surface.set_replay_hint(false);
        self.surface.set_play_glyph(Glyph::Pause);
        self.state.playing = true;
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.surface.set_replay_hint(false);
        self.surface.set_play_glyph(Glyph::Play);
        self.state.playing = false;
    }

    /// Cosmetic layout toggle only; no platform fullscreen request is made.
    pub fn full_screen(&mut self) {
        self.state.full_screen = !self.state.full_screen;
        self.surface.set_fullscreen(self.state.full_screen);
    }

    pub fn pointer_enter(&mut self) {
        self.surface.set_toolbar_active(true);
    }

    pub fn pointer_leave(&mut self) {
        self.surface.set_toolbar_active(false);
    }

    /// Time-update handler. Fires at whatever irregular rate the platform
    /// chooses; repeated calls with unchanged media fields write the same
    /// values again.
    pub fn time_update(&mut self) {
        if self.config.display.progress_bar {
            let percent = elapsed_percent(self.media.current_time(), self.media.duration());
            self.surface.set_played_width(&percent_width(percent));
        }
        if self.config.display.times {
            self.surface
                .set_elapsed_text(&seconds_to_display(self.media.current_time()));
        }
    }

    /// Buffering-progress handler. Leaves the fill untouched when no range
    /// has reached the playback position yet.
    pub fn media_progress(&mut self) {
        if !self.config.display.progress_bar {
            return;
        }
        let ranges = self.media.buffered();
        if let Some(percent) =
            buffered_percent(&ranges, self.media.current_time(), self.media.duration())
        {
            self.surface.set_buffered_width(&percent_width(percent));
        }
    }

    /// Duration-known handler; also re-runs when the platform revises the
    /// duration.
    pub fn duration_change(&mut self) {
        if !self.config.display.times {
            return;
        }
        let text = seconds_to_display(self.media.duration());
        if text.is_empty() {
            self.surface.set_duration_text(DURATION_FALLBACK);
        } else {
            self.surface.set_duration_text(&text);
        }
    }

    /// End-of-media handler: forces `Paused`, resets the glyph, and marks the
    /// control as a replay affordance until the next explicit play or pause.
    pub fn media_ended(&mut self) {
        self.state.playing = false;
        self.surface.set_play_glyph(Glyph::Play);
        self.surface.set_replay_hint(true);
    }

    /// Click-to-seek within the progress track. A degenerate ratio (zero
    /// track width, unknown duration) passes through unclamped; the media
    /// element discards targets it cannot honor.
    pub fn seek_click(&mut self, offset_x: f64, track_width: f64) {
        self.media
            .seek(seek_target(offset_x, track_width, self.media.duration()));
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
