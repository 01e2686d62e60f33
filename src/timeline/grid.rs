// Grid - adaptive marker spacing for the timeline ruler
// Step sizes are always a power of two beats so the grid never jitters while zooming

use crate::model::TimeSignature;
use crate::timeline::convert::{beat_to_ticks, ticks_to_beat};
use crate::timeline::zoom::Zoom;

/// Minimum on-screen spacing between two markers, in pixels.
pub const MIN_MARKER_SPACING: f64 = 16.0 / 1.5;

/// Smallest grid step ever produced, in beats (a sixteenth in 4/4).
pub const MIN_BEAT_STEP: f64 = 0.25;

/// One marker of the timeline ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Tick position of this marker. Fractional for signatures whose beat
    /// length does not divide the step evenly.
    pub tick: f64,
    /// Beat count at this marker.
    pub beat: f64,
    /// Bar count at this marker (fractional between bar lines).
    pub bar: f64,
    /// Whether this marker carries a time label (every four bars worth of steps).
    pub labeled: bool,
    /// Pixel offset of the marker from the left edge of the timeline area.
    pub x: f64,
}

impl Marker {
    pub fn on_bar(&self) -> bool {
        self.bar.fract() == 0.0
    }

    pub fn on_beat(&self) -> bool {
        self.beat.fract() == 0.0
    }
}

/// Tick distance between adjacent grid markers at the given zoom.
///
/// Beats-per-pixel scaled by the minimum marker spacing gives the smallest
/// tolerable beat step; rounding that up to the next power of two keeps the
/// step stable across zoom levels instead of sliding continuously.
pub fn marker_tick_step(zoom: &Zoom, time_signature: TimeSignature) -> f64 {
    marker_tick_step_with(zoom, time_signature, MIN_BEAT_STEP)
}

pub fn marker_tick_step_with(
    zoom: &Zoom,
    time_signature: TimeSignature,
    min_beat_step: f64,
) -> f64 {
    let beats_per_pixel = ticks_to_beat(zoom.ticks_per_pixel, time_signature);
    let min_step = (beats_per_pixel * MIN_MARKER_SPACING).max(min_beat_step);

    let mut beat_step = 2f64.powf(min_step.log2().ceil());
    if !beat_step.is_finite() || beat_step == 0.0 {
        beat_step = 1.0;
    }
    beat_to_ticks(beat_step, time_signature)
}

/// Duration given to a freshly created part: eight grid steps at the current
/// zoom, so new parts land at a workable size no matter the zoom level.
pub fn default_part_duration(zoom: &Zoom, time_signature: TimeSignature) -> i64 {
    (marker_tick_step(zoom, time_signature) * 8.0).round() as i64
}

/// Enumerate the ruler markers visible in a viewport `width` pixels wide.
///
/// Markers start on the next step boundary at or after the window's start
/// tick; the first marker carries the pixel offset between the window start
/// and that boundary.
pub fn markers(zoom: &Zoom, time_signature: TimeSignature, width: f64) -> Vec<Marker> {
    let step = marker_tick_step(zoom, time_signature);
    let marker_width = step / zoom.ticks_per_pixel;
    let snapped_start = (zoom.start_tick / step).ceil() * step;

    let count = (width / marker_width).ceil().max(0.0) as usize;
    (0..count)
        .map(|i| {
            let tick = i as f64 * step + snapped_start;
            let beat = ticks_to_beat(tick, time_signature);
            let bar = beat / time_signature.numerator as f64;
            // Label every (numerator * 4) steps from the origin
            let labeled = (tick / step) % (time_signature.numerator as f64 * 4.0) == 0.0;
            let x = (tick - zoom.start_tick) / zoom.ticks_per_pixel;
            Marker { tick, beat, bar, labeled, x }
        })
        .collect()
}
