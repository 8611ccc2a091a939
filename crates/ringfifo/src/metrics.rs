/// Optional counters for monitoring fifo traffic.
///
/// Collected only while metrics are enabled on the fifo (see
/// [`Config::enable_metrics`](crate::Config) and `with_metrics`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub enqueue_calls: u64,
    pub dequeue_calls: u64,
    pub elements_enqueued: u64,
    pub elements_dequeued: u64,
    /// Enqueues that accepted fewer elements than offered
    pub truncated_enqueues: u64,
    /// Dequeues that delivered fewer elements than requested
    pub short_dequeues: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_enqueue(&mut self, requested: usize, accepted: usize) {
        self.enqueue_calls += 1;
        self.elements_enqueued += accepted as u64;
        if accepted < requested {
            self.truncated_enqueues += 1;
        }
    }

    pub(crate) fn record_dequeue(&mut self, requested: usize, delivered: usize) {
        self.dequeue_calls += 1;
        self.elements_dequeued += delivered as u64;
        if delivered < requested {
            self.short_dequeues += 1;
        }
    }
}
