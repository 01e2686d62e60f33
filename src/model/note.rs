// Note representation
// A note is a pitch with a tick position relative to its owning part

use serde::{Deserialize, Serialize};

use crate::model::{Spanned, TickSpan};

/// A musical note inside a part.
///
/// `start_tick` is relative to the owning part's start, so moving a part
/// carries its notes along. A note dragged before its part's start holds a
/// negative offset and simply never sounds until it is dragged back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Pitch name with octave, e.g. "C4" or "A#5".
    pub name: String,

    /// Start in ticks, relative to the owning part.
    pub start_tick: i64,

    /// Duration in ticks, at least [`MIN_DURATION`](crate::model::MIN_DURATION).
    pub duration_ticks: i64,
}

impl Note {
    pub fn new(name: impl Into<String>, start_tick: i64, duration_ticks: i64) -> Self {
        Self { name: name.into(), start_tick, duration_ticks }
    }

    pub fn end_tick(&self) -> i64 {
        self.start_tick + self.duration_ticks
    }

    /// A copy of this note placed at a different part-relative tick, used by
    /// clipboard paste.
    pub fn at(&self, start_tick: i64) -> Self {
        Self { start_tick, ..self.clone() }
    }

    /// Whether this pitch is a sharp (black key).
    pub fn is_sharp(&self) -> bool {
        self.name.contains('#')
    }
}

impl Spanned for Note {
    fn span(&self) -> TickSpan {
        TickSpan::new(self.start_tick, self.duration_ticks)
    }

    fn with_span(&self, span: TickSpan) -> Self {
        Self {
            start_tick: span.start_tick,
            duration_ticks: span.duration_ticks,
            ..self.clone()
        }
    }
}

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Lowest pitch row shown in the piano roll (C1).
pub const PITCH_ROW_FIRST: u8 = 24;
/// One above the highest pitch row shown (C8).
pub const PITCH_ROW_LAST: u8 = 108;

/// Pitch name for a MIDI note number, e.g. 60 -> "C4".
pub fn pitch_name(midi_note: u8) -> String {
    let octave = (midi_note / 12) as i32 - 1;
    let note_index = (midi_note % 12) as usize;
    format!("{}{}", NOTE_NAMES[note_index], octave)
}

/// All pitch rows of the piano roll, lowest first (C1 up to but not
/// including C8).
pub fn pitch_rows() -> Vec<String> {
    (PITCH_ROW_FIRST..PITCH_ROW_LAST).map(pitch_name).collect()
}
