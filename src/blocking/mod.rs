/// Forbidden-domain matching for domain-checker
/// Builds a minimal sorted set of blocked domains and answers subdomain queries
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub mod builder;
pub mod checker;
pub mod domain;
pub mod lookup;
pub mod parser;

pub use builder::{BlocklistBuilder, BlocklistStats, load_blocklists};
pub use checker::DomainChecker;
pub use domain::Domain;
pub use parser::{BlocklistFormat, BlocklistParser};

/// Index of forbidden domains; alias kept for callers that think in terms of
/// an index rather than a checker
pub type DomainIndex = DomainChecker;

/// Counters for query outcomes. Kept outside [`DomainChecker`] so lookups
/// stay pure reads.
#[derive(Debug, Default)]
pub struct BlockingStats {
    /// Number of queries blocked
    pub queries_blocked: AtomicU64,
    /// Number of queries allowed
    pub queries_allowed: AtomicU64,
}

impl BlockingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, blocked: bool) {
        if blocked {
            self.record_blocked();
        } else {
            self.record_allowed();
        }
    }

    pub fn record_blocked(&self) {
        self.queries_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_allowed(&self) {
        self.queries_allowed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.queries_blocked.load(Ordering::Relaxed) + self.queries_allowed.load(Ordering::Relaxed)
    }

    pub fn get_block_rate(&self) -> f64 {
        let blocked = self.queries_blocked.load(Ordering::Relaxed);
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (blocked as f64 / total as f64) * 100.0
        }
    }

    /// One-line run summary
    pub fn summary(&self, elapsed: Duration) -> String {
        format!(
            "{} blocked, {} allowed ({:.1}% blocked) in {:.3}s",
            self.queries_blocked.load(Ordering::Relaxed),
            self.queries_allowed.load(Ordering::Relaxed),
            self.get_block_rate(),
            elapsed.as_secs_f64()
        )
    }
}
