// Playback - flattening the project into a note stream and driving the
// external audio transport with a polled playhead

pub mod player;
pub mod scheduler;
pub mod transport;

pub use player::{PLAYHEAD_POLL_INTERVAL, Player};
pub use scheduler::{ScheduledNote, flatten};
pub use transport::{AudioTransport, NullTransport};
