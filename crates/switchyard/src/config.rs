use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use switchyard_core::Category;

/// Switchyard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchyardConfig {
    /// Log level
    pub log_level: String,

    /// Put a tracing handler at the head of every category chain
    pub trace_categories: bool,

    /// Fixed replies keyed by category name (e.g. "Message")
    pub replies: BTreeMap<String, String>,
}

impl Default for SwitchyardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            trace_categories: true,
            replies: BTreeMap::new(),
        }
    }
}

impl SwitchyardConfig {
    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Check that every reply key names a category
    pub fn validate(&self) -> anyhow::Result<()> {
        for name in self.replies.keys() {
            if Category::from_str(name).is_err() {
                anyhow::bail!("Unknown category in replies: {}", name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: SwitchyardConfig = serde_json::from_str(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.trace_categories);
        assert!(config.replies.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "trace_categories": false, "replies": {{ "ConversationMembersAdded": "welcome" }} }}"#
        )
        .unwrap();

        let config = SwitchyardConfig::load_from_file(file.path()).unwrap();
        assert!(!config.trace_categories);
        assert_eq!(config.replies["ConversationMembersAdded"], "welcome");
    }

    #[test]
    fn test_load_rejects_unknown_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "replies": {{ "Greeting": "hi" }} }}"#).unwrap();

        let err = SwitchyardConfig::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Greeting"));
    }

    #[test]
    fn test_missing_file() {
        let result = SwitchyardConfig::load_from_file(std::path::Path::new("/nonexistent/switchyard.json"));
        assert!(result.is_err());
    }
}
