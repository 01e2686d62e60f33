// Zoom - the visible window onto the timeline
// Mutable view state updated from wheel input; everything else reads it

/// A view window over the timeline: the leftmost visible tick and how many
/// ticks one pixel covers. Larger `ticks_per_pixel` means zoomed further out.
///
/// `start_tick` is kept as a float because panning accumulates fractional
/// increments; tick values handed to the model are always integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    pub start_tick: f64,
    pub ticks_per_pixel: f64,
}

/// A normalized wheel/scroll event. `pan_modifier` is the shift key,
/// `zoom_modifier` is the ctrl key.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub pan_modifier: bool,
    pub zoom_modifier: bool,
}

impl Zoom {
    pub const MIN_TICKS_PER_PIXEL: f64 = 0.2;
    pub const MAX_TICKS_PER_PIXEL: f64 = 1000.0;

    pub fn new(start_tick: f64, ticks_per_pixel: f64) -> Self {
        Self {
            start_tick: start_tick.max(0.0),
            ticks_per_pixel: ticks_per_pixel
                .clamp(Self::MIN_TICKS_PER_PIXEL, Self::MAX_TICKS_PER_PIXEL),
        }
    }

    /// A window sized so that `duration_ticks` starting at `start_tick` fills
    /// `viewport_width` pixels. Used when opening a piano roll on a part.
    pub fn fit(start_tick: i64, duration_ticks: i64, viewport_width: f64) -> Self {
        Self::new(start_tick as f64, duration_ticks as f64 / viewport_width.max(1.0))
    }

    /// Compute the window that results from a wheel event. This is the single
    /// zoom-update entry point; it has no side effects and a no-op event
    /// returns the window unchanged.
    ///
    /// Horizontal scroll (or vertical with the pan modifier) pans, scaled by
    /// the zoom level so the on-screen speed stays constant. Vertical scroll
    /// with the zoom modifier zooms; the delta is reciprocated when scrolling
    /// toward zoom-in so the response is roughly logarithmic.
    pub fn wheel(&self, input: &WheelInput) -> Self {
        if input.delta_x != 0.0 || input.pan_modifier {
            let delta = if input.delta_x != 0.0 { input.delta_x } else { input.delta_y };
            let start_tick = (self.start_tick + delta * (self.ticks_per_pixel / 5.0)).max(0.0);
            Self { start_tick, ..*self }
        } else if input.zoom_modifier && input.delta_y != 0.0 {
            let mut delta = -input.delta_y / 100.0;
            if delta > 0.0 {
                delta = 1.0 / delta;
            }
            let ticks_per_pixel = (self.ticks_per_pixel * delta.abs())
                .clamp(Self::MIN_TICKS_PER_PIXEL, Self::MAX_TICKS_PER_PIXEL);
            Self { ticks_per_pixel, ..*self }
        } else {
            *self
        }
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self { start_tick: 0.0, ticks_per_pixel: 10.0 }
    }
}
