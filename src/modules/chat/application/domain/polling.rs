/// Backoff hint returned to chat clients.
///
/// Each consecutive poll that brought nothing new doubles the wait, up to
/// `max_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    base_ms: u64,
    max_ms: u64,
}

impl PollingPolicy {
    pub fn new(base_ms: u64, max_ms: u64) -> Self {
        Self {
            base_ms,
            max_ms: max_ms.max(base_ms),
        }
    }

    pub fn poll_after(&self, idle_polls: u32) -> u64 {
        let factor = 1u64.checked_shl(idle_polls.min(63)).unwrap_or(u64::MAX);
        self.base_ms.saturating_mul(factor).min(self.max_ms)
    }
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self::new(3_000, 30_000)
    }
}
