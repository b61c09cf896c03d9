// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{HelperError, HelperResult};

/// Opaque settings handed to a processor at construction time.
///
/// No schema is applied: keys are names, values are whatever the caller
/// supplied. A processor keeps its configuration for its whole lifetime
/// and never mutates it.
///
/// # Example
/// ```yaml
/// mode: upper
/// retries: 3
/// tags: [a, b]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(HashMap<String, serde_yaml::Value>);

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Parse a settings mapping from YAML text.
    ///
    /// Blank text yields an empty configuration. Anything that is not a
    /// mapping with string keys is rejected.
    ///
    /// # Example
    /// ```
    /// use text_helpers::config::Configuration;
    ///
    /// let cfg = Configuration::from_yaml_str("mode: upper\nretries: 3").unwrap();
    /// assert_eq!(cfg.len(), 2);
    /// assert!(cfg.contains_key("mode"));
    /// ```
    pub fn from_yaml_str(text: &str) -> HelperResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        serde_yaml::from_str::<HashMap<String, serde_yaml::Value>>(text)
            .map(Self)
            .map_err(|e| HelperError::Configuration {
                reason: format!("YAML settings must be a mapping: {}", e),
            })
    }

    /// Parse a settings object from JSON text.
    pub fn from_json_str(text: &str) -> HelperResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        serde_json::from_str::<HashMap<String, serde_yaml::Value>>(text)
            .map(Self)
            .map_err(|e| HelperError::Configuration {
                reason: format!("JSON settings must be an object: {}", e),
            })
    }

    /// Get a value by name
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.0.get(key)
    }

    /// Check if a name is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get all setting names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_yaml::Value)> {
        self.0.iter()
    }
}

impl From<HashMap<String, serde_yaml::Value>> for Configuration {
    fn from(map: HashMap<String, serde_yaml::Value>) -> Self {
        Self(map)
    }
}

impl From<Configuration> for HashMap<String, serde_yaml::Value> {
    fn from(configuration: Configuration) -> Self {
        configuration.0
    }
}

impl FromIterator<(String, serde_yaml::Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, serde_yaml::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_configuration_is_empty() {
        let cfg = Configuration::new();
        assert!(cfg.is_empty());
        assert_eq!(cfg.len(), 0);
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn test_parse_yaml_settings() {
        let yaml = r#"
mode: upper
timeout: 30
enabled: true
nested:
  inner: value
"#;

        let cfg = Configuration::from_yaml_str(yaml).unwrap();

        assert_eq!(cfg.len(), 4);
        assert_eq!(cfg.get("mode").and_then(|v| v.as_str()), Some("upper"));
        assert_eq!(cfg.get("timeout").and_then(|v| v.as_i64()), Some(30));
        assert_eq!(cfg.get("enabled").and_then(|v| v.as_bool()), Some(true));
        assert!(cfg.get("nested").map(|v| v.is_mapping()).unwrap_or(false));
    }

    #[test]
    fn test_blank_yaml_is_empty_configuration() {
        assert!(Configuration::from_yaml_str("").unwrap().is_empty());
        assert!(Configuration::from_yaml_str("   \n").unwrap().is_empty());
        assert!(Configuration::from_yaml_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_sequence_is_rejected() {
        let result = Configuration::from_yaml_str("- one\n- two\n");
        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("must be a mapping"));
    }

    #[test]
    fn test_parse_json_settings() {
        let cfg = Configuration::from_json_str(r#"{"k": 1, "name": "demo"}"#).unwrap();

        assert_eq!(cfg.len(), 2);
        assert_eq!(cfg.get("k").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(cfg.get("name").and_then(|v| v.as_str()), Some("demo"));
    }

    #[test]
    fn test_json_array_is_rejected() {
        let result = Configuration::from_json_str("[1, 2, 3]");
        assert!(matches!(result, Err(HelperError::Configuration { .. })));
    }

    #[test]
    fn test_collect_and_convert() {
        let cfg: Configuration = vec![
            ("a".to_string(), serde_yaml::Value::Bool(true)),
            ("b".to_string(), serde_yaml::Value::String("x".to_string())),
        ]
        .into_iter()
        .collect();

        let mut keys: Vec<&String> = cfg.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);

        let map: HashMap<String, serde_yaml::Value> = cfg.clone().into();
        assert_eq!(Configuration::from(map), cfg);
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let cfg = Configuration::from_yaml_str("k: 1").unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"k":1}"#);
    }
}
