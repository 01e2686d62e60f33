// Tick conversions - pure functions mapping ticks to pixels, beats, bars and clock time
// All functions are stateless; the view window is described by a Zoom value

use crate::model::TimeSignature;
use crate::timeline::grid::marker_tick_step;
use crate::timeline::zoom::Zoom;

/// Ticks per quarter note (PPQN). Standard MIDI resolution.
pub const PPQ: i64 = 480;

/// Left edge of the timeline area on screen, in pixels. Everything to the
/// left of this is the track/pitch label column.
pub const TIMELINE_LEFT_OFFSET: f64 = 256.0;

/// Convert ticks to a pixel position within the current view window.
pub fn ticks_to_pixel(ticks: i64, zoom: &Zoom) -> f64 {
    (ticks as f64 - zoom.start_tick) / zoom.ticks_per_pixel
}

/// Convert a pixel position within the view window back to ticks.
///
/// Inverse of [`ticks_to_pixel`] up to integer rounding.
pub fn pixel_to_ticks(pixels: f64, zoom: &Zoom) -> i64 {
    (pixels * zoom.ticks_per_pixel + zoom.start_tick).round() as i64
}

/// Convert an on-screen x position to ticks, accounting for the timeline's
/// left offset. When `snap` is set the result is rounded to the nearest
/// multiple of the current grid step, so snapping stays consistent with the
/// rendered markers at every zoom level.
///
/// `snap` is turned off while a modifier key is held; every call site that
/// reads a pointer position threads it through here.
pub fn x_pos_to_ticks(x: f64, zoom: &Zoom, time_signature: TimeSignature, snap: bool) -> i64 {
    let mut ticks = pixel_to_ticks(x - TIMELINE_LEFT_OFFSET, zoom);
    if snap {
        let step = marker_tick_step(zoom, time_signature);
        ticks = ((ticks as f64 / step).round() * step).round() as i64;
    }
    ticks
}

/// Convert absolute ticks to a beat count under the given time signature.
///
/// PPQ is the tick count of one beat in 4/4; scaling by the denominator makes
/// a beat worth fewer ticks in higher signatures, matching conventional meter.
pub fn ticks_to_beat(ticks: f64, time_signature: TimeSignature) -> f64 {
    ticks / (PPQ as f64 * 4.0 / time_signature.denominator as f64)
}

/// Convert a beat count to ticks. Exact inverse of [`ticks_to_beat`].
pub fn beat_to_ticks(beats: f64, time_signature: TimeSignature) -> f64 {
    beats * (PPQ as f64 * 4.0 / time_signature.denominator as f64)
}

/// Convert ticks to seconds of wall-clock time at the given tempo.
pub fn ticks_to_seconds(ticks: i64, bpm: f64) -> f64 {
    ticks as f64 / PPQ as f64 / bpm * 60.0
}

/// Convert seconds of wall-clock time to ticks at the given tempo.
pub fn seconds_to_ticks(seconds: f64, bpm: f64) -> i64 {
    (seconds * bpm / 60.0 * PPQ as f64).round() as i64
}

/// Format ticks as "bar.beat" under the given time signature.
///
/// The beat index is truncated to an integer, so positions inside a beat
/// display as the beat they fall in. Tick 0 formats as "0.0".
pub fn format_bars_beats(ticks: i64, time_signature: TimeSignature) -> String {
    let beat = ticks_to_beat(ticks as f64, time_signature).floor() as i64;
    let bar = beat.div_euclid(time_signature.numerator as i64);
    format!("{}.{}", bar, beat.rem_euclid(time_signature.numerator as i64))
}

/// Format ticks as "minutes:seconds.millis" clock time at the given tempo,
/// with seconds zero-padded to two digits.
pub fn format_clock_time(ticks: i64, bpm: f64) -> String {
    let minutes = ticks as f64 / PPQ as f64 / bpm;
    let seconds = (minutes * 60.0) % 60.0;
    format!("{}:{:06.3}", minutes.floor() as i64, seconds)
}
