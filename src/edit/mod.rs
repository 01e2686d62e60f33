// Edit - interactive editing: collection updates, drag state machine,
// handle strategies and the clipboard

pub mod clipboard;
pub mod collection;
pub mod drag;
pub mod handles;

pub use clipboard::{Clipboard, ClipboardItem};
pub use collection::edit;
pub use drag::{DragController, DragHandler, Pointer};
pub use handles::{move_span, resize_left, resize_right};
