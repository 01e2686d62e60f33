// Transport boundary - the external audio engine as the sequencer sees it
// Implementations wrap a real synth/sampler backend; the engine only talks
// through this trait

use crate::model::Instrument;
use crate::playback::scheduler::ScheduledNote;

/// The audio transport collaborator: a tick clock plus a note scheduler.
///
/// The engine pushes tempo, meter and a full event list before starting, and
/// polls `ticks` for the playhead while running. Everything here is
/// fire-and-forget from the engine's point of view.
pub trait AudioTransport {
    fn set_bpm(&mut self, bpm: f64);
    fn set_time_signature(&mut self, numerator: u32, denominator: u32);

    /// Move the transport's tick cursor (seek).
    fn set_ticks(&mut self, ticks: i64);

    /// Current tick cursor position.
    fn ticks(&self) -> i64;

    /// Replace the scheduled event list with a freshly flattened one.
    fn schedule(&mut self, events: &[ScheduledNote]);

    fn start(&mut self);
    fn stop(&mut self);

    /// One-shot note, used for previewing a pitch row.
    fn trigger_attack_release(&mut self, instrument: Instrument, pitch: &str, duration_ticks: i64);

    /// Silence every sounding note on every instrument.
    fn release_all(&mut self);
}

/// A transport that keeps the clock bookkeeping but produces no sound.
/// Useful headless and as the base for tests.
#[derive(Debug, Default)]
pub struct NullTransport {
    ticks: i64,
    running: bool,
    bpm: f64,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the clock manually, standing in for real time passing.
    pub fn advance(&mut self, ticks: i64) {
        if self.running {
            self.ticks += ticks;
        }
    }
}

impl AudioTransport for NullTransport {
    fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm;
    }

    fn set_time_signature(&mut self, _numerator: u32, _denominator: u32) {}

    fn set_ticks(&mut self, ticks: i64) {
        self.ticks = ticks;
    }

    fn ticks(&self) -> i64 {
        self.ticks
    }

    fn schedule(&mut self, _events: &[ScheduledNote]) {}

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn trigger_attack_release(
        &mut self,
        _instrument: Instrument,
        _pitch: &str,
        _duration_ticks: i64,
    ) {
    }

    fn release_all(&mut self) {}
}
