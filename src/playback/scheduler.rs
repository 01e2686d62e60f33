// Scheduler - flattens the project hierarchy into absolute-time note events
// Notes outside their part's bounds are dropped; notes crossing the part end
// are clipped

use crate::model::{Instrument, Project};

/// One note of the flattened event stream handed to the audio transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNote {
    pub instrument: Instrument,
    pub pitch: String,
    /// Absolute start in ticks: part start plus part-relative note start.
    pub start_tick: i64,
    /// Duration in ticks, clipped so the note never extends past its part.
    pub duration_ticks: i64,
}

/// Flatten every track, part and note of the project into a single event
/// list. Only notes whose part-relative start lies in `[0, part.duration)`
/// are included; durations are cut off at the part boundary.
///
/// The stream is rebuilt from a full project snapshot on every playback
/// (re)start; it is never patched incrementally.
pub fn flatten(project: &Project) -> Vec<ScheduledNote> {
    project
        .tracks
        .iter()
        .flat_map(|track| {
            track.parts.iter().flat_map(move |part| {
                part.notes
                    .iter()
                    .filter(|note| part.contains_note_start(note.start_tick))
                    .map(move |note| ScheduledNote {
                        instrument: track.instrument,
                        pitch: note.name.clone(),
                        start_tick: part.start_tick + note.start_tick,
                        duration_ticks: note
                            .duration_ticks
                            .min(part.duration_ticks - note.start_tick),
                    })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Part, Track};

    fn project_with(parts: Vec<Part>) -> Project {
        let mut track = Track::new("t", Instrument::Violin);
        track.parts = parts;
        Project::new("p").with_track(None, Some(track))
    }

    #[test]
    fn test_note_clipped_at_part_end() {
        let part = Part::with_notes(0, 100, vec![Note::new("C4", 90, 50)]);
        let events = flatten(&project_with(vec![part]));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_tick, 90);
        assert_eq!(events[0].duration_ticks, 10);
    }

    #[test]
    fn test_out_of_bounds_notes_dropped() {
        let part = Part::with_notes(
            480,
            100,
            vec![
                Note::new("C4", -10, 50),  // before the part
                Note::new("D4", 100, 50),  // at the part end
                Note::new("E4", 0, 50),    // inside
            ],
        );
        let events = flatten(&project_with(vec![part]));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].pitch, "E4");
        assert_eq!(events[0].start_tick, 480);
    }

    #[test]
    fn test_part_offset_applied_per_part() {
        let parts = vec![
            Part::with_notes(0, 960, vec![Note::new("C4", 0, 480)]),
            Part::with_notes(1920, 960, vec![Note::new("G4", 240, 480)]),
        ];
        let events = flatten(&project_with(parts));

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start_tick, 0);
        assert_eq!(events[1].start_tick, 2160);
        assert_eq!(events[1].instrument, Instrument::Violin);
    }

    #[test]
    fn test_overlapping_notes_all_scheduled() {
        // Ordering is insertion order; overlaps are allowed
        let part = Part::with_notes(
            0,
            1000,
            vec![Note::new("C4", 0, 500), Note::new("E4", 0, 500), Note::new("G4", 250, 500)],
        );
        let events = flatten(&project_with(vec![part]));
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].duration_ticks, 500);
    }

    #[test]
    fn test_empty_project_flattens_empty() {
        assert!(flatten(&Project::new("p")).is_empty());
    }
}
