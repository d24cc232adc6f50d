pub mod config;
mod metrics;

use crate::checker::config::CheckerConfig;
use crate::checker::metrics::Metrics;
use crate::secondary_validation::{SecondaryValidator, Validator};
use crate::stats::GLOBAL_STATS;
use crate::validation::{validate_identifier, IdentifierValidationError};
use tracing::debug;

const NO_MATCH: &str = "no_match";

/// Runs one configured validator and reports every outcome through metrics and logs.
///
/// The validators themselves are pure, side effects live here. Input values are never logged.
pub struct Checker {
    validator: SecondaryValidator,
    metrics: Metrics,
    // `check_identifier` works on any checker and always reports as `iin_checksum`.
    identifier_metrics: Option<Metrics>,
}

impl Checker {
    pub fn new(config: &CheckerConfig) -> Self {
        GLOBAL_STATS.record_checker_creation();

        let identifier_metrics = match config.validator {
            SecondaryValidator::IinChecksum => None,
            _ => Some(Metrics::new(
                &config.labels,
                SecondaryValidator::IinChecksum.name(),
            )),
        };
        Checker {
            validator: config.validator,
            metrics: Metrics::new(&config.labels, config.validator.name()),
            identifier_metrics,
        }
    }

    pub fn validator(&self) -> SecondaryValidator {
        self.validator
    }

    pub fn check(&self, input: &str) -> bool {
        match self.validator {
            SecondaryValidator::IinChecksum => self.check_identifier(input).is_ok(),
            validator => {
                self.metrics.checks.increment(1);
                let is_valid = validator.is_valid_match(input);
                if !is_valid {
                    reject(&self.metrics, validator, NO_MATCH);
                }
                is_valid
            }
        }
    }

    /// Validates an identifier and reports the failing stage. Metrics are recorded
    /// under `validator=iin_checksum` whatever validator this checker was configured with.
    pub fn check_identifier(&self, input: &str) -> Result<(), IdentifierValidationError> {
        let metrics = self.identifier_metrics.as_ref().unwrap_or(&self.metrics);
        metrics.checks.increment(1);
        let result = validate_identifier(input);
        if let Err(err) = result {
            reject(metrics, SecondaryValidator::IinChecksum, err.name());
        }
        result
    }
}

fn reject(metrics: &Metrics, validator: SecondaryValidator, reason: &'static str) {
    debug!(
        validator = validator.name(),
        reason, "input rejected by validator"
    );
    metrics.record_rejection(reason);
}

impl Drop for Checker {
    fn drop(&mut self) {
        GLOBAL_STATS.record_checker_deletion();
    }
}
