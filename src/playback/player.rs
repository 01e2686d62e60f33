// Player - playback control with a polled playhead
// Rebuilds the flattened event list on every start; polls the transport
// clock on a fixed cadence while playing

use std::time::Duration;

use log::debug;

use crate::model::{Instrument, Project};
use crate::playback::scheduler::flatten;
use crate::playback::transport::AudioTransport;
use crate::timeline::seconds_to_ticks;

/// Cadence at which the playhead is refreshed from the transport clock. The
/// displayed position can lag real time by at most this much.
pub const PLAYHEAD_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wall-clock length of a pitch-row preview note.
const PREVIEW_SECONDS: f64 = 0.1;

/// Drives the audio transport from project snapshots and tracks the
/// playhead by polling.
#[derive(Debug)]
pub struct Player<T: AudioTransport> {
    transport: T,
    playhead_tick: i64,
    playing: bool,
}

impl<T: AudioTransport> Player<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, playhead_tick: 0, playing: false }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn playhead_tick(&self) -> i64 {
        self.playhead_tick
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Start playback from the current playhead.
    ///
    /// The full event list is rebuilt from the project snapshot and handed to
    /// the transport in one piece; nothing is patched incrementally. The
    /// transport's tick cursor is seeded from the playhead so resuming after
    /// a seek lines up with the event list exactly. Starting while already
    /// playing is a no-op.
    pub fn play(&mut self, project: &Project) {
        if self.playing {
            return;
        }
        let events = flatten(project);
        debug!("starting playback: {} events at tick {}", events.len(), self.playhead_tick);

        self.transport.schedule(&events);
        self.transport.set_bpm(project.bpm);
        self.transport
            .set_time_signature(project.time_signature.numerator, project.time_signature.denominator);
        self.transport.set_ticks(self.playhead_tick);
        self.transport.start();
        self.playing = true;
    }

    /// Leave the playing state. Runs unconditionally whatever caused the
    /// transition: every sounding note is released and the transport clock
    /// stopped, even when already stopped. The playhead keeps its position.
    pub fn stop(&mut self) {
        debug!("stopping playback at tick {}", self.playhead_tick);
        self.transport.release_all();
        self.transport.stop();
        self.playing = false;
    }

    /// Refresh the playhead from the transport clock. Call on a
    /// [`PLAYHEAD_POLL_INTERVAL`] cadence while playing; outside playback the
    /// playhead is owned by seeks and left alone.
    pub fn poll(&mut self) -> i64 {
        if self.playing {
            self.playhead_tick = self.transport.ticks();
        }
        self.playhead_tick
    }

    /// Move the playhead, clamped at the origin. Forwarded to the transport
    /// cursor while playing so the audible position follows.
    pub fn seek(&mut self, tick: i64) {
        self.playhead_tick = tick.max(0);
        if self.playing {
            self.transport.set_ticks(self.playhead_tick);
        }
    }

    /// One-shot preview of a pitch row, 0.1 s at the project tempo.
    pub fn preview(&mut self, instrument: Instrument, pitch: &str, bpm: f64) {
        let duration = seconds_to_ticks(PREVIEW_SECONDS, bpm);
        self.transport.trigger_attack_release(instrument, pitch, duration);
    }
}
