// Session - the application-level state hub for one open project
// Single writer for the project snapshot; clipboard, playback and the save
// gate live here instead of as ambient globals

use log::warn;

use crate::edit::Clipboard;
use crate::model::{
    Project, TimeSignature, parse_bpm, parse_signature_component,
};
use crate::playback::{AudioTransport, Player};
use crate::storage::ProjectStore;
use crate::timeline::{TIMELINE_LEFT_OFFSET, Zoom, x_pos_to_ticks};
use crate::util::SingleFlight;

/// Outcome of the most recent background save, shown as a transient status.
/// A failure never rolls the project back; only the acknowledgement differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

/// Owns the current immutable project snapshot and everything that reacts to
/// it changing: the player, the clipboard and the coalesced save pipeline.
pub struct Session<S: ProjectStore, T: AudioTransport> {
    project: Project,
    store: S,
    player: Player<T>,
    clipboard: Clipboard,
    saves: SingleFlight<Project>,
    save_status: SaveStatus,
}

impl<S: ProjectStore, T: AudioTransport> Session<S, T> {
    pub fn new(project: Project, store: S, transport: T) -> Self {
        Self {
            project,
            store,
            player: Player::new(transport),
            clipboard: Clipboard::new(),
            saves: SingleFlight::new(),
            save_status: SaveStatus::default(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn player(&self) -> &Player<T> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<T> {
        &mut self.player
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    /// Swap in a new project snapshot. Playback is stopped (the scheduled
    /// event stream no longer matches), the reference is replaced atomically
    /// and a coalesced background save is kicked off.
    pub fn update_project(&mut self, project: Project) {
        self.player.stop();
        self.project = project.clone();
        let mut next = self.saves.submit(project);
        while let Some(snapshot) = next {
            self.run_save(&snapshot);
            next = self.saves.complete();
        }
    }

    fn run_save(&mut self, snapshot: &Project) {
        self.save_status = SaveStatus::Saving;
        self.save_status = match self.store.save(snapshot) {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                warn!("saving project {} failed: {}", snapshot.id, err);
                SaveStatus::Failed
            }
        };
    }

    /// Toggle between playing (from the current playhead) and stopped.
    pub fn toggle_playback(&mut self) {
        if self.player.is_playing() {
            self.player.stop();
        } else {
            let project = self.project.clone();
            self.player.play(&project);
        }
    }

    /// A click on the timeline background: stop playback and move the
    /// playhead to the clicked tick. Clicks left of the timeline area are
    /// ignored.
    pub fn click_timeline(&mut self, x: f64, zoom: &Zoom, snap: bool) {
        if x < TIMELINE_LEFT_OFFSET {
            return;
        }
        self.player.stop();
        let tick = x_pos_to_ticks(x, zoom, self.project.time_signature, snap);
        self.player.seek(tick);
    }

    /// Apply a bpm text field, falling back to the default on invalid input
    /// instead of rejecting the edit.
    pub fn set_bpm_text(&mut self, text: &str) {
        let project = self.project.with_bpm(parse_bpm(text));
        self.update_project(project);
    }

    /// Apply one time-signature component from a text field, with the same
    /// fallback rule.
    pub fn set_signature_text(&mut self, numerator: &str, denominator: &str) {
        let signature = TimeSignature::new(
            parse_signature_component(numerator),
            parse_signature_component(denominator),
        );
        let project = self.project.with_time_signature(signature);
        self.update_project(project);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instrument, Note, Part, Track};
    use crate::playback::NullTransport;
    use crate::storage::JsonFileStore;

    fn session() -> (tempfile::TempDir, Session<JsonFileStore, NullTransport>) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("projects.json"));
        let project = store.create().unwrap();
        (dir, Session::new(project, store, NullTransport::new()))
    }

    #[test]
    fn test_update_project_saves_and_stops_playback() {
        let (_dir, mut session) = session();

        session.toggle_playback();
        assert!(session.player().is_playing());

        let renamed = session.project().with_name("Tune");
        session.update_project(renamed);

        assert!(!session.player().is_playing());
        assert_eq!(session.project().name, "Tune");
        assert_eq!(session.save_status(), SaveStatus::Saved);
    }

    #[test]
    fn test_failed_save_keeps_edit() {
        // A store whose file path is a directory cannot be written
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let mut session =
            Session::new(Project::new("p"), store, NullTransport::new());

        let renamed = session.project().with_name("Kept");
        session.update_project(renamed);

        assert_eq!(session.save_status(), SaveStatus::Failed);
        // The in-memory project is never rolled back
        assert_eq!(session.project().name, "Kept");
    }

    #[test]
    fn test_bpm_and_signature_text_fallbacks() {
        let (_dir, mut session) = session();

        session.set_bpm_text("150");
        assert_eq!(session.project().bpm, 150.0);
        session.set_bpm_text("andante");
        assert_eq!(session.project().bpm, 120.0);

        session.set_signature_text("3", "oops");
        assert_eq!(session.project().time_signature, TimeSignature::new(3, 4));
    }

    #[test]
    fn test_click_timeline_seeks_and_ignores_label_column() {
        let (_dir, mut session) = session();
        let zoom = Zoom::new(0.0, 1.0);

        session.click_timeline(TIMELINE_LEFT_OFFSET + 500.0, &zoom, false);
        assert_eq!(session.player().playhead_tick(), 500);

        session.click_timeline(10.0, &zoom, false);
        assert_eq!(session.player().playhead_tick(), 500);
    }

    #[test]
    fn test_clipboard_round_trip_through_session() {
        let (_dir, mut session) = session();

        let part = Part::with_notes(0, 960, vec![Note::new("C4", 0, 480)]);
        let track = Track::new("lead", Instrument::Piano).with_part(None, Some(part));
        let project = session.project().with_track(None, Some(track));
        session.update_project(project);

        let source = session.project().tracks[0].parts[0].clone();
        session.clipboard_mut().copy_part(&source);
        let pasted = session.clipboard().paste_part(1920).unwrap();

        let track = session.project().tracks[0].with_part(None, Some(pasted));
        let project = session.project().with_track(Some(0), Some(track));
        session.update_project(project);

        assert_eq!(session.project().tracks[0].parts.len(), 2);
        assert_eq!(session.project().tracks[0].parts[1].start_tick, 1920);

        // And it survived the save
        let reloaded = session.store.load(&session.project().id).unwrap();
        assert_eq!(reloaded.tracks[0].parts.len(), 2);
    }
}
