// Track - a named lane of parts bound to an instrument

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edit::collection::edit;
use crate::model::Part;

/// The fixed set of instruments a track can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Piano,
    Flute,
    Violin,
    Trumpet,
    FatSine,
    Sawtooth,
    Drums,
}

impl Instrument {
    pub const ALL: [Instrument; 7] = [
        Instrument::Piano,
        Instrument::Flute,
        Instrument::Violin,
        Instrument::Trumpet,
        Instrument::FatSine,
        Instrument::Sawtooth,
        Instrument::Drums,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Flute => "flute",
            Instrument::Violin => "violin",
            Instrument::Trumpet => "trumpet",
            Instrument::FatSine => "fatsine",
            Instrument::Sawtooth => "sawtooth",
            Instrument::Drums => "drums",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lane of parts on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub instrument: Instrument,
    pub parts: Vec<Part>,
}

impl Track {
    pub fn new(name: impl Into<String>, instrument: Instrument) -> Self {
        Self { name: name.into(), instrument, parts: Vec::new() }
    }

    /// New track with the part collection edited: append, replace or remove
    /// (see [`edit`]).
    pub fn with_part(&self, index: Option<usize>, part: Option<Part>) -> Self {
        Self { parts: edit(&self.parts, index, part), ..self.clone() }
    }

    /// Replace the part at `index`, re-anchoring its notes when the left edge
    /// was dragged.
    ///
    /// When both the start and the duration changed, the child notes shift by
    /// the start delta so they stay pinned to absolute time. A pure move
    /// (start changed, duration constant) deliberately does not re-anchor;
    /// the part carries its notes along instead.
    pub fn update_part(&self, index: usize, part: Option<Part>) -> Self {
        let Some(old) = self.parts.get(index) else {
            return self.clone();
        };

        let part = part.map(|mut part| {
            if part.start_tick != old.start_tick && part.duration_ticks != old.duration_ticks {
                let delta = old.start_tick - part.start_tick;
                for note in &mut part.notes {
                    note.start_tick += delta;
                }
            }
            part
        });
        self.with_part(Some(index), part)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new("New track", Instrument::Piano)
    }
}
