// Timeline - musical time geometry
// Converts between ticks, screen pixels, beats/bars and clock time under a zoom

pub mod convert;
pub mod grid;
pub mod zoom;

pub use convert::{
    PPQ, TIMELINE_LEFT_OFFSET, beat_to_ticks, format_bars_beats, format_clock_time,
    pixel_to_ticks, seconds_to_ticks, ticks_to_beat, ticks_to_pixel, ticks_to_seconds,
    x_pos_to_ticks,
};
pub use grid::{MIN_MARKER_SPACING, Marker, default_part_duration, marker_tick_step, markers};
pub use zoom::{WheelInput, Zoom};
