use std::time::Duration;

use thiserror::Error;

use super::models::Config;

/// Longest simulated latency the dashboard accepts.
pub const MAX_LATENCY: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "api latency {} exceeds the maximum of {}",
        humantime::format_duration(*latency),
        humantime::format_duration(*max)
    )]
    LatencyTooHigh { latency: Duration, max: Duration },
    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.api.latency > MAX_LATENCY {
        return Err(ConfigGuardRailError::LatencyTooHigh {
            latency: config.api.latency,
            max: MAX_LATENCY,
        });
    }

    if config.logging.filter.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyLogFilter);
    }

    if config.store.id_strategy.may_reuse_ids() {
        warnings.push_with_hint(
            "id strategy count_plus_one can hand out an id that a live record still holds after a delete",
            "Use id_strategy = \"monotonic\" unless you need the legacy numbering",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbac_core::store::IdStrategy;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&Config::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn latency_ceiling_is_inclusive() {
        let mut config = Config::default();
        config.api.latency = MAX_LATENCY;
        assert!(apply_guard_rails(&config).is_ok());

        config.api.latency = MAX_LATENCY + Duration::from_millis(1);
        let err = apply_guard_rails(&config).unwrap_err();
        assert!(matches!(err, ConfigGuardRailError::LatencyTooHigh { .. }));
        assert!(err.to_string().contains("1m"));
    }

    #[test]
    fn warnings_extend_in_order() {
        let mut warnings = ConfigWarnings::default();
        warnings.push("first");

        let mut more = ConfigWarnings::default();
        more.push_with_hint("second", "do something");
        warnings.extend(more);

        let messages: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert!(warnings.items[0].hint.is_none());
    }

    #[test]
    fn legacy_ids_warn_with_hint() {
        let mut config = Config::default();
        config.store.id_strategy = IdStrategy::CountPlusOne;

        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].hint.is_some());
    }
}
