// tickroll - tick-based piano-roll timeline engine
//
// The hard core of a piano-roll sequencer without its UI or audio backend:
// a coordinate system between ticks, pixels, beats and clock time under an
// adjustable zoom; an immutable tick-addressed project model; a drag state
// machine for creating, moving and resizing timed objects with grid
// snapping; and a scheduler that flattens a project into a clipped note
// stream for an external audio transport, tracked by a polling playhead.

pub mod edit;
pub mod import;
pub mod model;
pub mod playback;
pub mod session;
pub mod storage;
pub mod timeline;
pub mod util;

// Re-export commonly used types for convenience
pub use edit::{Clipboard, ClipboardItem, DragController, DragHandler, Pointer};
pub use model::{
    Instrument, MIN_DURATION, Note, Part, PartRef, Project, Spanned, TickSpan, TimeSignature,
    Track,
};
pub use playback::{AudioTransport, PLAYHEAD_POLL_INTERVAL, Player, ScheduledNote, flatten};
pub use session::{SaveStatus, Session};
pub use storage::{JsonFileStore, ProjectStore, StoreError};
pub use timeline::{PPQ, TIMELINE_LEFT_OFFSET, WheelInput, Zoom};
pub use util::SingleFlight;
