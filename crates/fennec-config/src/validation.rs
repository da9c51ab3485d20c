//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so one bad file
//! reports all of its issues at once.

use crate::schema::FennecConfig;
use fennec_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FennecConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_startup(&mut errors, config);
    validate_gesture(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_startup(errors: &mut Vec<String>, config: &FennecConfig) {
    if config.startup.default_uri.trim().is_empty() {
        errors.push("startup.default_uri must not be empty".into());
    }
}

fn validate_gesture(errors: &mut Vec<String>, config: &FennecConfig) {
    let threshold = config.gesture.click_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        errors.push(format!(
            "gesture.click_threshold = {threshold} must be a finite value >= 0"
        ));
    }
}
