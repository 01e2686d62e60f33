// Part - a time-bounded container of notes placed on a track

use serde::{Deserialize, Serialize};

use crate::edit::collection::edit;
use crate::model::{Note, Spanned, TickSpan};

/// A clip of notes on the track timeline.
///
/// The part owns its notes; note positions are part-relative. Sibling parts
/// keep insertion order and may overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Absolute start on the track, in ticks.
    pub start_tick: i64,

    /// Duration in ticks, at least [`MIN_DURATION`](crate::model::MIN_DURATION).
    pub duration_ticks: i64,

    pub notes: Vec<Note>,
}

impl Part {
    pub fn new(start_tick: i64, duration_ticks: i64) -> Self {
        Self { start_tick, duration_ticks, notes: Vec::new() }
    }

    pub fn with_notes(start_tick: i64, duration_ticks: i64, notes: Vec<Note>) -> Self {
        Self { start_tick, duration_ticks, notes }
    }

    pub fn end_tick(&self) -> i64 {
        self.start_tick + self.duration_ticks
    }

    /// A copy of this part placed at a different absolute tick, used by
    /// clipboard paste. Notes travel with the part untouched.
    pub fn at(&self, start_tick: i64) -> Self {
        Self { start_tick, ..self.clone() }
    }

    /// New part with the note collection edited: append, replace or remove
    /// (see [`edit`]).
    pub fn with_note(&self, index: Option<usize>, note: Option<Note>) -> Self {
        Self { notes: edit(&self.notes, index, note), ..self.clone() }
    }

    /// Whether a part-relative note position is inside this part's bounds,
    /// i.e. would sound during playback.
    pub fn contains_note_start(&self, start_tick: i64) -> bool {
        start_tick >= 0 && start_tick < self.duration_ticks
    }
}

impl Spanned for Part {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_note_appends_and_replaces() {
        let part = Part::new(0, 1000);
        let part = part.with_note(None, Some(Note::new("C4", 0, 100)));
        let part = part.with_note(None, Some(Note::new("E4", 200, 100)));
        assert_eq!(part.notes.len(), 2);

        let replaced = part.with_note(Some(0), Some(Note::new("D4", 0, 100)));
        assert_eq!(replaced.notes[0].name, "D4");
        assert_eq!(replaced.notes[1].name, "E4");
        // Source part unchanged
        assert_eq!(part.notes[0].name, "C4");

        let removed = part.with_note(Some(0), None);
        assert_eq!(removed.notes.len(), 1);
        assert_eq!(removed.notes[0].name, "E4");
    }

    #[test]
    fn test_contains_note_start() {
        let part = Part::new(480, 100);
        assert!(part.contains_note_start(0));
        assert!(part.contains_note_start(99));
        assert!(!part.contains_note_start(100));
        assert!(!part.contains_note_start(-1));
    }

    #[test]
    fn test_at_repositions_without_touching_notes() {
        let part = Part::with_notes(0, 500, vec![Note::new("C4", 10, 50)]);
        let moved = part.at(960);
        assert_eq!(moved.start_tick, 960);
        assert_eq!(moved.notes, part.notes);
    }
}
