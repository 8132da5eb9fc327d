//! FIFO buffer for play requests between ticks.

use cue_ir::PlayRequest;

/// Unbounded FIFO of pending play requests.
///
/// No request is matched to a channel at submission time; matching happens
/// during the next drain, which keeps requests from the same tick
/// first-in-first-out fair.
#[derive(Default)]
pub struct RequestQueue {
    requests: Vec<PlayRequest>,
}

impl RequestQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request, taking ownership of it.
    pub fn submit(&mut self, request: PlayRequest) {
        self.requests.push(request);
    }

    /// Take every buffered request in submission order, leaving the queue
    /// empty.
    pub fn drain_all(&mut self) -> Vec<PlayRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Number of buffered requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
