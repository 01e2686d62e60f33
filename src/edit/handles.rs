// Handles - the three value-computation strategies of a draggable timed object
// Left edge resizes the start, the body moves, the right edge resizes the end

use crate::model::{MIN_DURATION, TickSpan, TimeSignature};
use crate::timeline::{Zoom, x_pos_to_ticks};
use crate::edit::drag::Pointer;

/// Left-edge resize: the start follows the (snapped) pointer, clamped at
/// zero, and the duration is adjusted so the right edge stays fixed. The
/// duration never drops below [`MIN_DURATION`], so dragging past the right
/// edge pins the object at its minimum width.
pub fn resize_left(
    span: TickSpan,
    pointer: Pointer,
    zoom: &Zoom,
    time_signature: TimeSignature,
) -> TickSpan {
    let start_tick = x_pos_to_ticks(pointer.x, zoom, time_signature, pointer.snap).max(0);
    let delta = span.start_tick - start_tick;
    TickSpan {
        start_tick,
        duration_ticks: (span.duration_ticks + delta).max(MIN_DURATION),
    }
}

/// Body move: the start follows the pointer offset by where inside the object
/// it was grabbed, clamped at zero. Duration is preserved.
pub fn move_span(
    span: TickSpan,
    pointer: Pointer,
    grab_offset: f64,
    zoom: &Zoom,
    time_signature: TimeSignature,
) -> TickSpan {
    let x = pointer.x - grab_offset;
    TickSpan {
        start_tick: x_pos_to_ticks(x, zoom, time_signature, pointer.snap).max(0),
        ..span
    }
}

/// Right-edge resize: the duration follows the (snapped) pointer relative to
/// the fixed start, floored at [`MIN_DURATION`]. Also the strategy behind
/// drawing a new note, which starts from a zero-length span under the press.
pub fn resize_right(
    span: TickSpan,
    pointer: Pointer,
    zoom: &Zoom,
    time_signature: TimeSignature,
) -> TickSpan {
    let ticks = x_pos_to_ticks(pointer.x, zoom, time_signature, pointer.snap);
    TickSpan {
        duration_ticks: (ticks - span.start_tick).max(MIN_DURATION),
        ..span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TIMELINE_LEFT_OFFSET;

    fn ts() -> TimeSignature {
        TimeSignature::default()
    }

    /// Unit zoom puts tick N at pixel TIMELINE_LEFT_OFFSET + N.
    fn unit_zoom() -> Zoom {
        Zoom::new(0.0, 1.0)
    }

    fn at_tick(tick: i64) -> f64 {
        TIMELINE_LEFT_OFFSET + tick as f64
    }

    #[test]
    fn test_resize_left_keeps_right_edge_fixed() {
        let span = TickSpan::new(400, 200);
        let resized = resize_left(span, Pointer::new(at_tick(300), false), &unit_zoom(), ts());

        assert_eq!(resized.start_tick, 300);
        assert_eq!(resized.duration_ticks, 300);
        assert_eq!(resized.end_tick(), span.end_tick());
    }

    #[test]
    fn test_resize_left_floors_duration() {
        let span = TickSpan::new(400, 200);
        // Drag far past the right edge
        let resized = resize_left(span, Pointer::new(at_tick(2000), false), &unit_zoom(), ts());
        assert_eq!(resized.duration_ticks, MIN_DURATION);
    }

    #[test]
    fn test_resize_left_clamps_start_at_zero() {
        let span = TickSpan::new(50, 100);
        let resized = resize_left(span, Pointer::new(at_tick(-500), false), &unit_zoom(), ts());
        assert_eq!(resized.start_tick, 0);
        assert_eq!(resized.end_tick(), 150);
    }

    #[test]
    fn test_move_span_preserves_duration_and_honors_grab_offset() {
        let span = TickSpan::new(100, 250);
        // Grabbed 40 px into the object, pointer now over tick 340
        let moved = move_span(span, Pointer::new(at_tick(340), false), 40.0, &unit_zoom(), ts());

        assert_eq!(moved.start_tick, 300);
        assert_eq!(moved.duration_ticks, 250);
    }

    #[test]
    fn test_move_span_clamps_at_zero() {
        let span = TickSpan::new(100, 250);
        let moved = move_span(span, Pointer::new(at_tick(-900), false), 0.0, &unit_zoom(), ts());
        assert_eq!(moved.start_tick, 0);
        assert_eq!(moved.duration_ticks, 250);
    }

    #[test]
    fn test_resize_right_floors_duration() {
        let span = TickSpan::new(400, 200);

        let grown = resize_right(span, Pointer::new(at_tick(900), false), &unit_zoom(), ts());
        assert_eq!(grown.start_tick, 400);
        assert_eq!(grown.duration_ticks, 500);

        // Drag left past the start: pinned at minimum width
        let shrunk = resize_right(span, Pointer::new(at_tick(100), false), &unit_zoom(), ts());
        assert_eq!(shrunk.duration_ticks, MIN_DURATION);
    }

    #[test]
    fn test_snapped_resize_lands_on_grid() {
        let zoom = Zoom::new(0.0, 10.0);
        let span = TickSpan::new(0, 100);
        // Snap is on: the new duration is a whole number of grid steps
        let resized = resize_right(
            span,
            Pointer::new(TIMELINE_LEFT_OFFSET + 37.0, true),
            &zoom,
            ts(),
        );
        assert_eq!(resized.duration_ticks % 120, 0);
    }
}
