use crate::observability::labels::Labels;
use metrics::{counter, Counter};

/// Counters for one validator, tagged with the checker labels plus `validator=<name>`.
pub struct Metrics {
    pub checks: Counter,
    labels: Labels,
}

const VALIDATOR: &str = "validator";
const REASON: &str = "reason";

impl Metrics {
    pub fn new(labels: &Labels, validator_name: &'static str) -> Self {
        let labels = labels.with_label(VALIDATOR, validator_name);
        Metrics {
            checks: counter!("checker.checks", labels.clone()),
            labels,
        }
    }

    /// Rejection reasons are only known at check time, so this counter is resolved per call.
    pub fn record_rejection(&self, reason: &'static str) {
        counter!("checker.rejections", self.labels.with_label(REASON, reason)).increment(1);
    }
}
