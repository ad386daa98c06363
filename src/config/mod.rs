use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Built-in defaults, used when no configuration file is available
const DEFAULT_CONFIG: &str = r#"
agent:
  name: PackPilot
  version: 0.1.0
  domain_awareness: true
  auto_configure: true
  self_audit: true
analysis:
  enabled: true
  security_checks: true
  optimization_checks: true
  compliance_checks: true
automation:
  auto_fix: false
  require_approval: true
  dry_run: true
cloud:
  providers:
    - aws
    - azure
    - gcp
  regions: []
"#;

/// Nested key-value configuration with dot-path access.
///
/// The tree is plain YAML; keys are addressed as `section.sub.key`. Reading
/// through a missing or non-mapping segment yields `None` rather than an
/// error, and writes create intermediate mappings as needed.
#[derive(Debug, Clone)]
pub struct PilotConfig {
    path: Option<PathBuf>,
    tree: Value,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            path: None,
            tree: serde_yaml::from_str(DEFAULT_CONFIG)
                .expect("built-in default configuration is valid YAML"),
        }
    }
}

impl PilotConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the built-in defaults; an empty file yields an
    /// empty tree. Malformed YAML propagates as [`ConfigError::Parse`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let content = fs::read_to_string(path)?;
        let tree = if content.trim().is_empty() {
            Value::Mapping(Mapping::new())
        } else {
            match serde_yaml::from_str::<Value>(&content)? {
                Value::Null => Value::Mapping(Mapping::new()),
                tree => tree,
            }
        };

        info!("Loaded configuration from {}", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            tree,
        })
    }

    /// Resolve a configuration: an explicit path wins, then the user-level
    /// config file, then the built-in defaults.
    pub fn discover(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let candidate = config_dir.join("packpilot").join("config.yaml");
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Get a value by dot-separated key path.
    ///
    /// Returns `None` when any segment is missing, explicitly null, or when
    /// the descent passes through a non-mapping value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut node = &self.tree;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        if node.is_null() {
            None
        } else {
            Some(node)
        }
    }

    /// Get a boolean value, falling back to `default` when absent or not a
    /// boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Whether a flag is enabled, applying YAML truthiness: missing, null,
    /// `false`, zero, and empty values all count as disabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key).map(truthy).unwrap_or(false)
    }

    /// Set a value by dot-separated key path, creating intermediate mappings
    /// as needed. A non-mapping intermediate is silently replaced.
    pub fn set(&mut self, key: &str, value: Value) {
        if !self.tree.is_mapping() {
            self.tree = Value::Mapping(Mapping::new());
        }

        let mut segments: Vec<&str> = key.split('.').collect();
        let last = match segments.pop() {
            Some(last) => last,
            None => return,
        };

        let mut current = self
            .tree
            .as_mapping_mut()
            .expect("configuration root is a mapping");

        for segment in segments {
            let entry = current
                .entry(Value::String(segment.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !entry.is_mapping() {
                *entry = Value::Mapping(Mapping::new());
            }
            current = entry
                .as_mapping_mut()
                .expect("intermediate segment is a mapping");
        }

        current.insert(Value::String(last.to_string()), value);
    }

    /// Serialize the tree back to a file. Writes to `path` when given,
    /// otherwise to the originally loaded path; a no-op when neither exists.
    pub fn save(&self, path: Option<&Path>) -> ConfigResult<()> {
        let target = match path.or(self.path.as_deref()) {
            Some(target) => target,
            None => return Ok(()),
        };

        let content = serde_yaml::to_string(&self.tree)?;
        fs::write(target, content)?;
        info!("Saved configuration to {}", target.display());
        Ok(())
    }
}

/// YAML truthiness in the spirit of dynamic configuration languages:
/// null, false, zero, empty strings, and empty containers are falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => truthy(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = PilotConfig::default();
        assert_eq!(
            config.get("agent.name").and_then(Value::as_str),
            Some("PackPilot")
        );
        assert!(config.get_bool("agent.domain_awareness", false));
        assert!(config.get_bool("analysis.enabled", false));
        assert!(config.get_bool("automation.dry_run", false));
        assert!(!config.get_bool("automation.auto_fix", true));
    }

    #[test]
    fn get_missing_returns_none() {
        let config = PilotConfig::default();
        assert!(config.get("nonexistent.key").is_none());
        assert_eq!(config.get_bool("nonexistent.key", true), true);
    }

    #[test]
    fn get_through_scalar_returns_none() {
        let config = PilotConfig::default();
        // agent.name is a string; descending past it must not panic
        assert!(config.get("agent.name.deeper").is_none());
    }

    #[test]
    fn set_get_round_trip() {
        let mut config = PilotConfig::default();
        config.set("agent.name", Value::String("Custom".into()));
        assert_eq!(
            config.get("agent.name").and_then(Value::as_str),
            Some("Custom")
        );
    }

    #[test]
    fn set_creates_intermediate_mappings() {
        let mut config = PilotConfig::default();
        config.set("custom.nested.value", Value::String("test".into()));
        assert_eq!(
            config.get("custom.nested.value").and_then(Value::as_str),
            Some("test")
        );
    }

    #[test]
    fn set_overwrites_scalar_with_tree() {
        let mut config = PilotConfig::default();
        config.set("agent.name.forced", Value::Bool(true));
        assert!(config.get_bool("agent.name.forced", false));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let mut config = PilotConfig::default();
        config.set("agent.name", Value::String("Saved".into()));
        config.save(Some(&path)).unwrap();

        let reloaded = PilotConfig::load(&path).unwrap();
        assert_eq!(
            reloaded.get("agent.name").and_then(Value::as_str),
            Some("Saved")
        );
    }

    #[test]
    fn save_without_path_is_noop() {
        let config = PilotConfig::default();
        assert!(config.save(None).is_ok());
    }

    #[test]
    fn load_empty_file_yields_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "").unwrap();

        let config = PilotConfig::load(&path).unwrap();
        assert!(config.get("agent.name").is_none());
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yml");

        let config = PilotConfig::load(&path).unwrap();
        assert!(config.get_bool("agent.domain_awareness", false));
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "agent: [unclosed").unwrap();

        assert!(matches!(
            PilotConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn truthiness() {
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&Value::Bool(false)));
        assert!(!truthy(&Value::String(String::new())));
        assert!(truthy(&Value::Bool(true)));
        assert!(truthy(&Value::String("yes".into())));
        assert!(truthy(&Value::Number(1.into())));
        assert!(!truthy(&Value::Number(0.into())));
    }
}
