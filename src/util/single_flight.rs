// SingleFlight - at most one request in flight, newest request wins
// A generic gate for fire-and-forget requests such as background saves

/// Coalesces requests into a single slot: while one is in flight, newer
/// submissions overwrite each other and only the latest fires afterwards.
/// This is last-write-wins, not a queue.
///
/// The gate does not perform the request itself; `submit` and `complete`
/// hand back the value the caller should fire next, which keeps the
/// coalescing policy independent of how the request actually runs.
#[derive(Debug, Default)]
pub struct SingleFlight<T> {
    in_flight: bool,
    pending: Option<T>,
}

impl<T> SingleFlight<T> {
    pub fn new() -> Self {
        Self { in_flight: false, pending: None }
    }

    pub fn is_idle(&self) -> bool {
        !self.in_flight
    }

    /// Submit a request. When idle the gate marks itself in flight and
    /// returns the value for the caller to fire immediately; otherwise the
    /// value is parked, replacing any previously parked one.
    #[must_use]
    pub fn submit(&mut self, value: T) -> Option<T> {
        if self.in_flight {
            self.pending = Some(value);
            None
        } else {
            self.in_flight = true;
            Some(value)
        }
    }

    /// Report the in-flight request finished. Returns the parked value to
    /// fire next, keeping the gate in flight; with nothing parked the gate
    /// goes idle.
    #[must_use]
    pub fn complete(&mut self) -> Option<T> {
        match self.pending.take() {
            Some(next) => Some(next),
            None => {
                self.in_flight = false;
                None
            }
        }
    }
}
