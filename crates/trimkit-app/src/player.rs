//! Simulated player driven by trimmer notifications.
//!
//! Stands in for a real decoder: it advances a clock one frame at a time and
//! loops inside the selected range.

use tracing::{debug, info};
use trimkit_core::{FrameRate, RationalTime, TimeRange};
use trimkit_ui::{dispatch_all, AssetPreview, Trimmer, TrimmerEvent, TrimmerListener};

pub struct Player {
    frame_rate: FrameRate,
    position: RationalTime,
    range: TimeRange,
    playing: bool,
    /// A handle or the filmstrip is moving; playback is held.
    scrubbing: bool,
    /// Wall time not yet consumed by whole frames, in seconds.
    pending: f64,
}

impl Player {
    pub fn new(frame_rate: FrameRate, duration: RationalTime) -> Self {
        Self {
            frame_rate,
            position: RationalTime::ZERO,
            range: TimeRange::new(RationalTime::ZERO, duration),
            playing: false,
            scrubbing: false,
            pending: 0.0,
        }
    }

    pub fn position(&self) -> RationalTime {
        self.position
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing != self.playing {
            info!(playing, position = %self.position, "Playback toggled");
        }
        self.playing = playing;
        self.pending = 0.0;
    }

    /// Start over with a new media duration.
    pub fn load(&mut self, duration: RationalTime) {
        self.range = TimeRange::new(RationalTime::ZERO, duration);
        self.position = RationalTime::ZERO;
        self.pending = 0.0;
    }

    /// Advance the clock by `dt` seconds. Returns `true` when the position moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.playing || self.scrubbing || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        if self.range.duration.is_zero() || self.range.duration.is_negative() {
            return false;
        }
        self.pending += dt;
        let frame_secs = 1.0 / self.frame_rate.to_fps_f64();
        let mut moved = false;
        while self.pending >= frame_secs {
            self.pending -= frame_secs;
            self.position = self.position + self.frame_rate.frame_duration();
            if self.position >= self.range.end() {
                debug!(start = %self.range.start, "Looping to range start");
                self.position = self.range.start;
            }
            moved = true;
        }
        moved
    }

    /// Adopt the trimmer's selection, pulling the position inside it.
    pub fn sync_range(&mut self, range: Option<TimeRange>) {
        let Some(range) = range else { return };
        if range != self.range {
            debug!(%range, "Range synced from trimmer");
            self.range = range;
        }
        self.position = self.range.clamp(self.position);
    }

    /// Apply one frame of trimmer output.
    ///
    /// Scrolling the filmstrip moves the selection without a range event, so
    /// the range is re-read from the trimmer whenever the position settles.
    pub fn follow<P: AssetPreview>(&mut self, trimmer: &Trimmer<P>, events: &[TrimmerEvent]) {
        let settled = events
            .iter()
            .any(|e| matches!(e, TrimmerEvent::PositionSettled(_)));
        if settled {
            self.sync_range(trimmer.selected_range());
        }
        dispatch_all(events, self);
    }

    fn seek(&mut self, time: RationalTime) {
        self.position = time;
        self.pending = 0.0;
    }
}

impl TrimmerListener for Player {
    fn position_changed(&mut self, time: RationalTime) {
        self.scrubbing = true;
        self.seek(time);
    }

    fn position_settled(&mut self, time: RationalTime) {
        debug!(%time, "Trimmer position settled");
        self.scrubbing = false;
        self.seek(self.range.clamp(time));
    }

    fn handle_range_changed(&mut self, start: RationalTime, end: RationalTime) {
        self.range = TimeRange::from_start_end(start, end);
        debug!(range = %self.range, "Selected range changed");
    }

    fn drag_started(&mut self) {
        self.scrubbing = true;
    }
}
