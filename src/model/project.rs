// Project - the root entity handed to the engine
// Edits swap the whole value atomically; nothing is mutated in place

use serde::{Deserialize, Serialize};

use crate::edit::collection::edit;
use crate::model::{Part, Track};

/// Fallback when a bpm text field does not parse to a positive number.
pub const DEFAULT_BPM: f64 = 120.0;
/// Fallback for an unparseable time-signature component.
pub const DEFAULT_SIGNATURE_COMPONENT: u32 = 4;

/// Musical meter, serialized as a `[numerator, denominator]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32,
}

impl TimeSignature {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self { numerator: numerator.max(1), denominator: denominator.max(1) }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl From<(u32, u32)> for TimeSignature {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl From<TimeSignature> for (u32, u32) {
    fn from(ts: TimeSignature) -> Self {
        (ts.numerator, ts.denominator)
    }
}

impl std::fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Index pair addressing a part inside a project. There are no back-pointers
/// in the model; any holder of a part keeps this pair and revalidates it
/// against current bounds before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRef {
    pub track: usize,
    pub part: usize,
}

/// A whole song: tracks of parts of notes, plus tempo and meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque identifier assigned by the store.
    pub id: String,
    pub name: String,
    pub description: String,
    pub bpm: f64,
    pub time_signature: TimeSignature,
    pub tracks: Vec<Track>,
}

impl Project {
    /// A fresh empty project. The id is assigned by the persistence layer.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "New song".to_string(),
            description: "New description".to_string(),
            bpm: DEFAULT_BPM,
            time_signature: TimeSignature::default(),
            tracks: Vec::new(),
        }
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Resolve a part reference, or `None` when the indices are stale.
    pub fn part(&self, at: PartRef) -> Option<&Part> {
        self.tracks.get(at.track)?.parts.get(at.part)
    }

    /// New project with the track collection edited: append, replace or
    /// remove (see [`edit`]).
    pub fn with_track(&self, index: Option<usize>, track: Option<Track>) -> Self {
        Self { tracks: edit(&self.tracks, index, track), ..self.clone() }
    }

    /// New project with the part at `at` replaced (or removed), applying the
    /// note re-anchoring rule of [`Track::update_part`]. Stale references
    /// leave the project unchanged.
    pub fn update_part(&self, at: PartRef, part: Option<Part>) -> Self {
        match self.track(at.track) {
            Some(track) => {
                self.with_track(Some(at.track), Some(track.update_part(at.part, part)))
            }
            None => self.clone(),
        }
    }

    pub fn with_bpm(&self, bpm: f64) -> Self {
        Self { bpm, ..self.clone() }
    }

    pub fn with_time_signature(&self, time_signature: TimeSignature) -> Self {
        Self { time_signature, ..self.clone() }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self { description: description.into(), ..self.clone() }
    }
}

/// Parse a bpm text field, falling back to [`DEFAULT_BPM`] on anything that
/// is not a positive number. Invalid input never rejects the edit.
pub fn parse_bpm(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(bpm) if bpm > 0.0 && bpm.is_finite() => bpm,
        _ => DEFAULT_BPM,
    }
}

/// Parse one time-signature component, falling back to
/// [`DEFAULT_SIGNATURE_COMPONENT`] unless the text is a positive integer.
pub fn parse_signature_component(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => DEFAULT_SIGNATURE_COMPONENT,
    }
}
