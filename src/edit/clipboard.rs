// Clipboard - single-slot typed copy buffer
// Copies are deep: the slot never shares a subtree with the live project

use crate::model::{Note, Part};

/// A copied timed object, tagged so paste can check it fits the target
/// context.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardItem {
    Note(Note),
    Part(Part),
}

/// Holds at most one copied object. Writing takes an owned deep copy, so
/// later edits to the source are never observable through the slot.
#[derive(Debug, Default)]
pub struct Clipboard {
    slot: Option<ClipboardItem>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy_note(&mut self, note: &Note) {
        self.slot = Some(ClipboardItem::Note(note.clone()));
    }

    pub fn copy_part(&mut self, part: &Part) {
        self.slot = Some(ClipboardItem::Part(part.clone()));
    }

    pub fn contents(&self) -> Option<&ClipboardItem> {
        self.slot.as_ref()
    }

    /// Paste into a track timeline at the given absolute tick. Only a copied
    /// part fits here; anything else pastes nothing.
    pub fn paste_part(&self, start_tick: i64) -> Option<Part> {
        match &self.slot {
            Some(ClipboardItem::Part(part)) => Some(part.at(start_tick)),
            _ => None,
        }
    }

    /// Paste into a pitch row at the given part-relative tick. Only a copied
    /// note fits here; it takes the target row's pitch.
    pub fn paste_note(&self, start_tick: i64, row_pitch: &str) -> Option<Note> {
        match &self.slot {
            Some(ClipboardItem::Note(note)) => {
                let mut note = note.at(start_tick);
                note.name = row_pitch.to_string();
                Some(note)
            }
            _ => None,
        }
    }
}
