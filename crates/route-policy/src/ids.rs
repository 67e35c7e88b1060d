use std::sync::atomic::{AtomicU64, Ordering};

/// Source of process-unique identifiers such as `sel_000001`.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, prefix: &str) -> String;
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Generator drawing from one process-wide counter, so ids never repeat
/// across generators, engines, or services in the same process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceIdGenerator;

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let id = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{id:06}")
    }
}
