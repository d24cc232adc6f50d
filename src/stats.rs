use lazy_static::lazy_static;
use metrics::{counter, gauge};
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::default();
}

/// Process wide checker lifecycle metrics.
///
/// Metric handles are resolved on every call rather than cached, so the recorder
/// in effect at creation or drop time receives them.
#[derive(Default)]
pub struct Stats {
    // The gauge is set from this atomic since some metrics exporters don't
    // support incrementing gauges (e.g. statsd)
    live_checkers: AtomicI64,
}

impl Stats {
    pub fn record_checker_creation(&self) {
        counter!("checker.creations").increment(1);
        self.update_live_checkers(1);
    }

    pub fn record_checker_deletion(&self) {
        counter!("checker.deletions").increment(1);
        self.update_live_checkers(-1);
    }

    fn update_live_checkers(&self, delta: i64) {
        let live = self.live_checkers.fetch_add(delta, Ordering::SeqCst) + delta;
        gauge!("checker.total_count").set(live as f64);
    }
}
