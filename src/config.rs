use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_HOCS: &[&str] = &["forwardRef", "memo"];

/// Plugin options as passed by the host, e.g. `{ "hocs": ["memo"] }`.
///
/// A supplied `hocs` list replaces the defaults, it is never merged with them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hocs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hocs: DEFAULT_HOCS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_json::from_str(raw)?;
        if let Some(index) = config.hocs.iter().position(|h| h.is_empty()) {
            return Err(ConfigError::EmptyHocName { index });
        }
        Ok(config)
    }
}

/// Membership set of recognized wrapper names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HocNames(HashSet<String>);

impl HocNames {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted, for log output.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for HocNames {
    fn default() -> Self {
        Config::default().into()
    }
}

impl From<Config> for HocNames {
    fn from(config: Config) -> Self {
        Self(config.hocs.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for HocNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let names = HocNames::from(Config::from_json("").unwrap());
        assert_eq!(names.sorted(), vec!["forwardRef", "memo"]);

        let names = HocNames::from(Config::from_json("{}").unwrap());
        assert_eq!(names.sorted(), vec!["forwardRef", "memo"]);
    }

    #[test]
    fn custom_hocs_replace_defaults() {
        let config = Config::from_json(r#"{ "hocs": ["observer", "withStyles"] }"#).unwrap();
        let names = HocNames::from(config);
        assert!(names.contains("observer"));
        assert!(names.contains("withStyles"));
        assert!(!names.contains("memo"));
        assert!(!names.contains("forwardRef"));
    }

    #[test]
    fn duplicates_collapse() {
        let config = Config::from_json(r#"{ "hocs": ["memo", "memo"] }"#).unwrap();
        assert_eq!(HocNames::from(config).sorted(), vec!["memo"]);
    }

    #[test]
    fn empty_list_disables_matching() {
        let config = Config::from_json(r#"{ "hocs": [] }"#).unwrap();
        assert!(HocNames::from(config).is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::from_json(r#"{ "hocs": ["memo"], "displayName": true }"#).unwrap();
        assert_eq!(config.hocs, vec!["memo".to_string()]);
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(matches!(
            Config::from_json(r#"{ "hocs": "memo" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            Config::from_json("{ hocs: "),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "hocs": ["memo", ""] }"#),
            Err(ConfigError::EmptyHocName { index: 1 })
        ));
    }
}
