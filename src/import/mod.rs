// Import - foreign timed-note data entering the engine
// Parsing belongs to the importer; this boundary only rescales tick values
// from the source resolution to ours, exactly once

use crate::model::{MIN_DURATION, Note, Part};
use crate::timeline::PPQ;

/// Import failures leave the current project untouched; there is no partial
/// import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("source resolution of {0} ticks per quarter is unusable")]
    InvalidResolution(u32),

    #[error("import contains no notes")]
    Empty,
}

/// A note from a foreign source, in the source's own tick resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedNote {
    pub name: String,
    pub start_tick: i64,
    pub duration_ticks: i64,
}

/// One foreign track's worth of notes.
#[derive(Debug, Clone, Default)]
pub struct ImportedTrack {
    pub notes: Vec<ImportedNote>,
}

/// Already-parsed foreign timed-note data (e.g. a MIDI file after decoding),
/// still in its own ticks-per-quarter resolution.
#[derive(Debug, Clone)]
pub struct MidiImport {
    /// Ticks per quarter note of the source.
    pub ppq: u32,
    /// Total length of the source, in source ticks.
    pub duration_ticks: i64,
    pub tracks: Vec<ImportedTrack>,
}

/// Build a part at `start_tick` from foreign note data, consolidating every
/// source track into one note list and rescaling all tick values by
/// `PPQ / source_ppq`.
pub fn part_from_import(start_tick: i64, import: &MidiImport) -> Result<Part, ImportError> {
    if import.ppq == 0 {
        return Err(ImportError::InvalidResolution(import.ppq));
    }
    let scale = PPQ as f64 / import.ppq as f64;

    let notes: Vec<Note> = import
        .tracks
        .iter()
        .flat_map(|track| &track.notes)
        .map(|note| Note {
            name: note.name.clone(),
            start_tick: (note.start_tick as f64 * scale).round() as i64,
            duration_ticks: (note.duration_ticks as f64 * scale).round() as i64,
        })
        .collect();
    if notes.is_empty() {
        return Err(ImportError::Empty);
    }

    let duration = ((import.duration_ticks as f64 * scale).round() as i64).max(MIN_DURATION);
    Ok(Part::with_notes(start_tick, duration, notes))
}
