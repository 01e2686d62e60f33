// Model - the tick-addressed entities a project is made of
// All values are immutable: edits build a new value with one subtree replaced

pub mod note;
pub mod part;
pub mod project;
pub mod track;

pub use note::{Note, pitch_name, pitch_rows};
pub use part::Part;
pub use project::{
    DEFAULT_BPM, DEFAULT_SIGNATURE_COMPONENT, PartRef, Project, TimeSignature, parse_bpm,
    parse_signature_component,
};
pub use track::{Instrument, Track};

/// Minimum duration of any timed object, in ticks. Prevents zero-width
/// notes and parts that could never be grabbed again.
pub const MIN_DURATION: i64 = 10;

/// The start/duration pair every draggable timed object reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSpan {
    pub start_tick: i64,
    pub duration_ticks: i64,
}

impl TickSpan {
    pub fn new(start_tick: i64, duration_ticks: i64) -> Self {
        Self { start_tick, duration_ticks }
    }

    pub fn end_tick(&self) -> i64 {
        self.start_tick + self.duration_ticks
    }

    /// Shift the span by `delta` ticks, keeping the start non-negative.
    pub fn shifted(&self, delta: i64) -> Self {
        Self { start_tick: (self.start_tick + delta).max(0), ..*self }
    }
}

/// Objects that occupy a tick range and can be re-placed by the drag handles.
pub trait Spanned {
    fn span(&self) -> TickSpan;
    fn with_span(&self, span: TickSpan) -> Self;
}
