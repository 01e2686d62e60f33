// Drag - the two-state machine behind every click-drag interaction
// Idle -> (pointer down) -> Dragging -> (pointer up) -> Idle

/// Pointer position for a drag event. `snap` is false while the grid-snap
/// modifier key is held.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    pub x: f64,
    pub snap: bool,
}

impl Pointer {
    pub fn new(x: f64, snap: bool) -> Self {
        Self { x, snap }
    }
}

/// Strategy driving one drag interaction: how to derive a candidate value
/// from the pointer, and what to do with previews, final commits and
/// teardown.
pub trait DragHandler {
    type Value;

    /// Derive the candidate value from the current pointer position.
    fn compute(&mut self, pointer: Pointer) -> Self::Value;

    /// Called on every pointer move while dragging (UI preview).
    fn on_drag(&mut self, value: Self::Value);

    /// Called once on pointer up, only if the pointer moved at least once
    /// since the drag started. A press-and-release without movement commits
    /// nothing.
    fn on_commit(&mut self, value: Self::Value);

    /// Called unconditionally when the drag ends, even for a zero-movement
    /// drag, and again at the start of the next drag.
    fn on_cleanup(&mut self) {}
}

/// One drag interaction's state. Each grab region (left edge, body, right
/// edge) owns its own controller; a controller tracks at most one drag at a
/// time, and move/up events are ignored outside of one.
#[derive(Debug, Default)]
pub struct DragController {
    dragging: bool,
    moved: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer down on the grab region: run cleanup and arm the drag.
    pub fn begin<H: DragHandler>(&mut self, handler: &mut H) {
        handler.on_cleanup();
        self.dragging = true;
        self.moved = false;
    }

    /// Pointer moved. Only acts while a drag is live; this is what "listeners
    /// attached only for the lifetime of the drag" means here.
    pub fn pointer_move<H: DragHandler>(&mut self, handler: &mut H, pointer: Pointer) {
        if !self.dragging {
            return;
        }
        let value = handler.compute(pointer);
        handler.on_drag(value);
        self.moved = true;
    }

    /// Pointer released. Cleanup always runs; the commit only fires when the
    /// pointer moved during the drag.
    pub fn pointer_up<H: DragHandler>(&mut self, handler: &mut H, pointer: Pointer) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        handler.on_cleanup();
        if self.moved {
            self.moved = false;
            let value = handler.compute(pointer);
            handler.on_commit(value);
        }
    }

    /// Abort a live drag without committing (the owning view went away
    /// mid-drag). Cleanup still runs.
    pub fn cancel<H: DragHandler>(&mut self, handler: &mut H) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.moved = false;
        handler.on_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every hook invocation for protocol assertions.
    #[derive(Default)]
    struct Recorder {
        previews: Vec<f64>,
        commits: Vec<f64>,
        cleanups: usize,
    }

    impl DragHandler for Recorder {
        type Value = f64;

        fn compute(&mut self, pointer: Pointer) -> f64 {
            pointer.x * 2.0
        }

        fn on_drag(&mut self, value: f64) {
            self.previews.push(value);
        }

        fn on_commit(&mut self, value: f64) {
            self.commits.push(value);
        }

        fn on_cleanup(&mut self) {
            self.cleanups += 1;
        }
    }

    #[test]
    fn test_zero_movement_drag_commits_nothing() {
        let mut drag = DragController::new();
        let mut handler = Recorder::default();

        drag.begin(&mut handler);
        drag.pointer_up(&mut handler, Pointer::new(10.0, true));

        assert!(handler.commits.is_empty());
        assert!(handler.previews.is_empty());
        // Cleanup ran on begin and again on release
        assert_eq!(handler.cleanups, 2);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_then_release_commits_final_value_once() {
        let mut drag = DragController::new();
        let mut handler = Recorder::default();

        drag.begin(&mut handler);
        drag.pointer_move(&mut handler, Pointer::new(5.0, true));
        drag.pointer_move(&mut handler, Pointer::new(7.0, true));
        drag.pointer_up(&mut handler, Pointer::new(9.0, true));

        assert_eq!(handler.previews, vec![10.0, 14.0]);
        // Exactly one commit, computed at the release position
        assert_eq!(handler.commits, vec![18.0]);
    }

    #[test]
    fn test_events_ignored_while_idle() {
        let mut drag = DragController::new();
        let mut handler = Recorder::default();

        drag.pointer_move(&mut handler, Pointer::new(5.0, true));
        drag.pointer_up(&mut handler, Pointer::new(5.0, true));

        assert!(handler.previews.is_empty());
        assert!(handler.commits.is_empty());
        assert_eq!(handler.cleanups, 0);
    }

    #[test]
    fn test_cancel_mid_drag_cleans_up_without_commit() {
        let mut drag = DragController::new();
        let mut handler = Recorder::default();

        drag.begin(&mut handler);
        drag.pointer_move(&mut handler, Pointer::new(3.0, true));
        drag.cancel(&mut handler);

        assert!(handler.commits.is_empty());
        assert_eq!(handler.cleanups, 2);
        assert!(!drag.is_dragging());

        // A later release is ignored; the machine is disarmed
        drag.pointer_up(&mut handler, Pointer::new(8.0, true));
        assert!(handler.commits.is_empty());
    }

    #[test]
    fn test_second_drag_does_not_inherit_movement() {
        let mut drag = DragController::new();
        let mut handler = Recorder::default();

        drag.begin(&mut handler);
        drag.pointer_move(&mut handler, Pointer::new(1.0, true));
        drag.pointer_up(&mut handler, Pointer::new(1.0, true));
        assert_eq!(handler.commits.len(), 1);

        // Press and release with no movement: still no second commit
        drag.begin(&mut handler);
        drag.pointer_up(&mut handler, Pointer::new(2.0, true));
        assert_eq!(handler.commits.len(), 1);
    }
}
