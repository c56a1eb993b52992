//! Configuration validation.
//!
//! Checks every recognised key before a command runs. Every key is optional;
//! only present values are validated.

use crate::domain::error::LeofiError;
use crate::domain::universe::parse_symbols;
use crate::ports::config_port::ConfigPort;

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), LeofiError> {
    validate_path(config, "snapshots_path")?;
    validate_path(config, "holdings_path")?;
    validate_seed(config)?;
    validate_universe(config)?;
    validate_max_message_len(config)?;
    validate_bool(config, "report", "json")?;
    Ok(())
}

/// Boolean spellings accepted in config files.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn validate_bool(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), LeofiError> {
    match config.get_string(section, key) {
        Some(s) if parse_bool(&s).is_none() => Err(LeofiError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("expected true/false, yes/no or 1/0, got '{}'", s.trim()),
        }),
        _ => Ok(()),
    }
}

fn validate_path(config: &dyn ConfigPort, key: &str) -> Result<(), LeofiError> {
    match config.get_string("data", key) {
        Some(s) if s.trim().is_empty() => Err(LeofiError::ConfigInvalid {
            section: "data".to_string(),
            key: key.to_string(),
            reason: format!("{} must not be empty", key),
        }),
        _ => Ok(()),
    }
}

/// Parses `[engine] seed` if present.
pub fn parse_seed(config: &dyn ConfigPort) -> Result<Option<u64>, LeofiError> {
    match config.get_string("engine", "seed") {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| LeofiError::ConfigInvalid {
                section: "engine".to_string(),
                key: "seed".to_string(),
                reason: format!("seed must be an unsigned integer, got '{}'", s.trim()),
            }),
    }
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), LeofiError> {
    parse_seed(config).map(|_| ())
}

fn validate_universe(config: &dyn ConfigPort) -> Result<(), LeofiError> {
    if let Some(list) = config.get_string("engine", "universe") {
        parse_symbols(&list).map_err(|e| LeofiError::ConfigInvalid {
            section: "engine".to_string(),
            key: "universe".to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Parses `[reply] max_message_len` if present.
pub fn parse_max_message_len(config: &dyn ConfigPort) -> Result<Option<usize>, LeofiError> {
    match config.get_string("reply", "max_message_len") {
        None => Ok(None),
        Some(s) => match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(LeofiError::ConfigInvalid {
                section: "reply".to_string(),
                key: "max_message_len".to_string(),
                reason: "max_message_len must be a positive integer".to_string(),
            }),
        },
    }
}

fn validate_max_message_len(config: &dyn ConfigPort) -> Result<(), LeofiError> {
    parse_max_message_len(config).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapConfig(HashMap<(String, String), String>);

    impl MapConfig {
        fn new(entries: &[(&str, &str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(s, k, v)| ((s.to_string(), k.to_string()), v.to_string()))
                    .collect(),
            )
        }
    }

    impl ConfigPort for MapConfig {
        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.0.get(&(section.to_string(), key.to_string())).cloned()
        }

        fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
            self.get_string(section, key)
                .map(|v| v == "true")
                .unwrap_or(default)
        }
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(validate_config(&MapConfig::new(&[])).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let config = MapConfig::new(&[
            ("data", "snapshots_path", "markets.csv"),
            ("engine", "seed", "42"),
            ("engine", "universe", "BTC,ETH,SOL"),
            ("reply", "max_message_len", "4096"),
        ]);
        assert!(validate_config(&config).is_ok());
        assert_eq!(parse_seed(&config).unwrap(), Some(42));
    }

    #[test]
    fn blank_path_is_rejected() {
        let config = MapConfig::new(&[("data", "holdings_path", "  ")]);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, LeofiError::ConfigInvalid { key, .. } if key == "holdings_path"));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        let config = MapConfig::new(&[("engine", "seed", "-3")]);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, LeofiError::ConfigInvalid { key, .. } if key == "seed"));
    }

    #[test]
    fn duplicate_universe_symbol_is_rejected() {
        let config = MapConfig::new(&[("engine", "universe", "BTC,ETH,BTC")]);
        let err = validate_config(&config).unwrap_err();
        assert!(
            matches!(err, LeofiError::ConfigInvalid { key, reason, .. } if key == "universe" && reason.contains("BTC"))
        );
    }

    #[test]
    fn zero_or_garbage_message_len_is_rejected() {
        for value in ["0", "-1", "many"] {
            let config = MapConfig::new(&[("reply", "max_message_len", value)]);
            let err = validate_config(&config).unwrap_err();
            assert!(
                matches!(err, LeofiError::ConfigInvalid { key, .. } if key == "max_message_len")
            );
        }
    }

    #[test]
    fn unrecognised_json_flag_is_rejected() {
        let config = MapConfig::new(&[("report", "json", "maybe")]);
        let err = validate_config(&config).unwrap_err();
        assert!(
            matches!(err, LeofiError::ConfigInvalid { section, key, .. } if section == "report" && key == "json")
        );
    }

    #[test]
    fn json_flag_spellings_are_accepted() {
        for value in ["true", "YES", "1", "false", "no", " 0 "] {
            let config = MapConfig::new(&[("report", "json", value)]);
            assert!(validate_config(&config).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn message_len_parses_when_present() {
        let config = MapConfig::new(&[("reply", "max_message_len", " 1000 ")]);
        assert_eq!(parse_max_message_len(&config).unwrap(), Some(1000));
        assert_eq!(parse_max_message_len(&MapConfig::new(&[])).unwrap(), None);
    }
}
