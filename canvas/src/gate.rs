//! Single-slot gate for detector submissions.
//!
//! The animation-frame loop ticks at display rate regardless of how long
//! inference takes. The gate keeps at most one request in flight: ticks that
//! arrive while a request is outstanding are dropped, and results that arrive
//! after the slot was cancelled are recognized as stale.
//!
//! Lifecycle of a ticket:
//!
//! ```text
//! try_acquire -> Some(t)    slot held by t
//! deliver     -> Some(t)    results for t accepted (at most once)
//! release(t)                slot free again (request settled or failed)
//! ```

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Identifies one detector submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct InflightGate {
    next_id: u64,
    inflight: Option<Ticket>,
    delivered: bool,
    closed: bool,
    dropped: u64,
}

impl InflightGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for a new submission.
    ///
    /// Returns `None` when a request is already in flight (the tick is
    /// counted as dropped) or when the gate is closed.
    pub fn try_acquire(&mut self) -> Option<Ticket> {
        if self.closed {
            return None;
        }
        if self.inflight.is_some() {
            self.dropped += 1;
            return None;
        }
        self.next_id += 1;
        let ticket = Ticket(self.next_id);
        self.inflight = Some(ticket);
        self.delivered = false;
        Some(ticket)
    }

    /// Accept results for the in-flight request.
    ///
    /// Returns the owning ticket the first time results arrive for it, and
    /// `None` for duplicates or results with no outstanding request.
    pub fn deliver(&mut self) -> Option<Ticket> {
        if self.closed || self.delivered {
            return None;
        }
        let ticket = self.inflight?;
        self.delivered = true;
        Some(ticket)
    }

    /// Free the slot held by `ticket`. Returns `false` for a stale ticket.
    pub fn release(&mut self, ticket: Ticket) -> bool {
        if self.inflight != Some(ticket) {
            return false;
        }
        self.inflight = None;
        self.delivered = false;
        true
    }

    /// Forget the in-flight request; its late results become stale.
    pub fn cancel(&mut self) {
        self.inflight = None;
        self.delivered = false;
    }

    /// Cancel and refuse all further submissions.
    pub fn close(&mut self) {
        self.cancel();
        self.closed = true;
    }

    #[must_use]
    pub fn current(&self) -> Option<Ticket> {
        self.inflight
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.inflight.is_some()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Ticks dropped because a request was already in flight.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
