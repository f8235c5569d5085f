//! Configuration loading and namespace resolution
//!
//! The configuration is a JSON object read from `layergen.json` at the project
//! root and merged shallowly over embedded defaults: a top-level key present in
//! the file wholly replaces the default, nested keys are not merged
//! individually. Values are addressed by dotted namespace paths
//! (e.g. `REPOSITORY.IGENERIC_NAME`), and every namespace the generators
//! depend on is kind-checked up front so that a broken configuration fails
//! before any file of substance is touched.

use anyhow::{bail, Context};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file expected at the project root.
pub const CONFIG_FILE_NAME: &str = "layergen.json";

/// Symbolic token resolved to the project root itself.
pub const ROOT_PATH: &str = "ROOT_PATH";
/// Symbolic tokens resolved against the four configured layer directories.
pub const LAYER_TOKENS: [&str; 4] = [
    "API_PATH",
    "APPLICATION_PATH",
    "DOMAIN_PATH",
    "INFRASTRUCTURE_PATH",
];

/// Expected kind of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    List,
    Object,
}

impl ValueKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Str => value.is_string(),
            ValueKind::List => value.is_array(),
            ValueKind::Object => value.is_object(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        }
    }
}

/// Every namespace the generators read, kind-checked before any generation.
const REQUIRED_NAMESPACES: [(&str, ValueKind); 33] = [
    ("API_PATH", ValueKind::Str),
    ("APPLICATION_PATH", ValueKind::Str),
    ("DOMAIN_PATH", ValueKind::Str),
    ("INFRASTRUCTURE_PATH", ValueKind::Str),
    ("CONTROLLERS", ValueKind::Object),
    ("CONTROLLERS.GENERIC_NAME", ValueKind::Str),
    ("CONTROLLERS.PATH", ValueKind::Str),
    ("DTO", ValueKind::Object),
    ("DTO.PATH", ValueKind::Str),
    ("DTO.LIST_PATH", ValueKind::Str),
    ("REPOSITORY", ValueKind::Object),
    ("REPOSITORY.IPATH", ValueKind::Str),
    ("REPOSITORY.PATH", ValueKind::Str),
    ("REPOSITORY.IGENERIC_NAME", ValueKind::Str),
    ("REPOSITORY.GENERIC_NAME", ValueKind::Str),
    ("REPOSITORY.REPOSITORY_VARIABLE", ValueKind::Str),
    ("REPOSITORY.LIST_PATH", ValueKind::Str),
    ("SERVICE", ValueKind::Object),
    ("SERVICE.IPATH", ValueKind::Str),
    ("SERVICE.PATH", ValueKind::Str),
    ("SERVICE.IGENERIC_NAME", ValueKind::Str),
    ("SERVICE.GENERIC_NAME", ValueKind::Str),
    ("SERVICE.SERVICE_VARIABLE", ValueKind::Str),
    ("SERVICE.LIST_PATH", ValueKind::Str),
    ("MAPPER", ValueKind::Object),
    ("MAPPER.PATH", ValueKind::Str),
    ("MAPPER.SERVICE_VARIABLE", ValueKind::Str),
    ("MAPPER.LIST_PATH", ValueKind::Str),
    ("DATA", ValueKind::Object),
    ("DATA.PATH", ValueKind::Str),
    ("MODEL", ValueKind::Object),
    ("MODEL.PATH", ValueKind::Str),
    ("MODEL.LIST", ValueKind::List),
];

fn default_config() -> Value {
    json!({
        "API_PATH": "API",
        "APPLICATION_PATH": "APPLICATION",
        "DOMAIN_PATH": "DOMAIN",
        "INFRASTRUCTURE_PATH": "INFRASTRUCTURE",
        "CONTROLLERS": {
            "GENERIC_NAME": "GenericController",
            "PATH": "API_PATH/Controllers"
        },
        "DTO": {
            "PATH": "APPLICATION_PATH/Dto",
            "LIST_PATH": "APPLICATION_PATH/AppInjector.cs"
        },
        "REPOSITORY": {
            "IPATH": "APPLICATION_PATH/IRepository",
            "PATH": "INFRASTRUCTURE_PATH/Repository",
            "IGENERIC_NAME": "IGenericRepository",
            "GENERIC_NAME": "GenericRepository",
            "REPOSITORY_VARIABLE": "services",
            "LIST_PATH": "INFRASTRUCTURE_PATH/InfraInjector.cs"
        },
        "SERVICE": {
            "IPATH": "APPLICATION_PATH/IService",
            "PATH": "INFRASTRUCTURE_PATH/Service",
            "IGENERIC_NAME": "IGenericService",
            "GENERIC_NAME": "GenericService",
            "SERVICE_VARIABLE": "services",
            "LIST_PATH": "INFRASTRUCTURE_PATH/InfraInjector.cs"
        },
        "MAPPER": {
            "PATH": "APPLICATION_PATH/Mapper",
            "SERVICE_VARIABLE": "services",
            "LIST_PATH": "APPLICATION_PATH/AppInjector.cs"
        },
        "DATA": {
            "PATH": "INFRASTRUCTURE_PATH/Data"
        },
        "MODEL": {
            "PATH": "DOMAIN_PATH/Model",
            "LIST": ["User"]
        }
    })
}

/// In-memory configuration tree.
///
/// Loaded once at process start, mutated only by model-list updates, and
/// persisted back with [`Config::persist`] at the end of a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    tree: Value,
}

impl Config {
    /// Read the configuration file and merge it over the embedded defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, is not valid JSON, or is not a JSON
    /// object at the top level.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let overlay: Value = serde_json::from_str(&contents)
            .with_context(|| format!("malformed JSON in config file: {}", path.display()))?;
        Self::from_overlay(overlay)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Build a configuration from an overlay object merged over the defaults.
    ///
    /// Merge is shallow: each top-level key in the overlay replaces the
    /// default subtree wholesale.
    pub fn from_overlay(overlay: Value) -> anyhow::Result<Self> {
        let Value::Object(overlay) = overlay else {
            bail!("top-level config value must be a JSON object");
        };
        let mut tree = default_config();
        if let Value::Object(map) = &mut tree {
            for (key, value) in overlay {
                map.insert(key, value);
            }
        }
        Ok(Self { tree })
    }

    /// Configuration built from the embedded defaults alone.
    pub fn defaults() -> Self {
        Self {
            tree: default_config(),
        }
    }

    /// Walk a dot-separated namespace path through nested objects.
    ///
    /// Emits a warning and returns `None` when a segment is absent or an
    /// intermediate value is not an object.
    pub fn get(&self, namespace: &str) -> Option<&Value> {
        let mut current = &self.tree;
        for segment in namespace.split('.') {
            let Some(map) = current.as_object() else {
                return None;
            };
            match map.get(segment) {
                Some(value) => current = value,
                None => {
                    eprintln!("⚠️  config: namespace not found: {namespace}");
                    return None;
                }
            }
        }
        Some(current)
    }

    /// String value at a namespace, which must have been validated as a string.
    pub fn get_str(&self, namespace: &str) -> anyhow::Result<&str> {
        self.get(namespace)
            .and_then(Value::as_str)
            .with_context(|| format!("config namespace is not a string: {namespace}"))
    }

    fn check_kind(&self, namespace: &str, kind: ValueKind) -> bool {
        self.get(namespace).is_some_and(|value| kind.matches(value))
    }

    /// Fail unless the value at `namespace` exists and has the given kind.
    pub fn assert_kind(&self, namespace: &str, kind: ValueKind) -> anyhow::Result<()> {
        if !self.check_kind(namespace, kind) {
            bail!(
                "invalid config namespace type: {namespace} (requires {})",
                kind.name()
            );
        }
        Ok(())
    }

    /// Kind-check every namespace the generators depend on.
    ///
    /// Called once at startup so all configuration errors surface before any
    /// substantive file I/O.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (namespace, kind) in REQUIRED_NAMESPACES {
            self.assert_kind(namespace, kind)?;
        }
        Ok(())
    }

    /// Substitute symbolic path tokens and normalize separators for the host.
    ///
    /// `ROOT_PATH` resolves to the project root; the four layer tokens resolve
    /// to the root joined with the configured layer directory.
    pub fn resolve_path(&self, template: &str, root: &Path) -> anyhow::Result<PathBuf> {
        let mut resolved = template.replace(ROOT_PATH, &root.to_string_lossy());
        for token in LAYER_TOKENS {
            let layer = self.get_str(token)?;
            let layer_dir = root.join(layer);
            resolved = resolved.replace(token, &layer_dir.to_string_lossy());
        }
        let sep = std::path::MAIN_SEPARATOR.to_string();
        resolved = resolved.replace('/', &sep).replace('\\', &sep);
        Ok(PathBuf::from(resolved))
    }

    /// Model names currently recorded under `MODEL.LIST`.
    pub fn models(&self) -> Vec<String> {
        self.get("MODEL.LIST")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append a model name to `MODEL.LIST` unless it is already present.
    pub fn push_model(&mut self, name: &str) -> anyhow::Result<()> {
        let list = self.model_list_mut()?;
        if !list.iter().any(|entry| entry.as_str() == Some(name)) {
            list.push(Value::String(name.to_string()));
        }
        Ok(())
    }

    /// Overwrite `MODEL.LIST` with a fresh directory listing (patch mode).
    pub fn set_models(&mut self, names: Vec<String>) -> anyhow::Result<()> {
        let list = self.model_list_mut()?;
        *list = names.into_iter().map(Value::String).collect();
        Ok(())
    }

    fn model_list_mut(&mut self) -> anyhow::Result<&mut Vec<Value>> {
        self.tree
            .get_mut("MODEL")
            .and_then(|model| model.get_mut("LIST"))
            .and_then(Value::as_array_mut)
            .context("config namespace is not a list: MODEL.LIST")
    }

    /// Write the configuration back out, pretty-printed.
    pub fn persist(&self, path: &Path) -> anyhow::Result<()> {
        let rendered = serde_json::to_string_pretty(&self.tree)
            .context("failed to serialize config")?;
        fs::write(path, rendered)
            .with_context(|| format!("failed to write config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_pass_validation() {
        Config::defaults().validate().unwrap();
    }

    #[test]
    fn get_walks_dotted_namespaces() {
        let cfg = Config::defaults();
        assert_eq!(
            cfg.get("REPOSITORY.IGENERIC_NAME").and_then(Value::as_str),
            Some("IGenericRepository")
        );
        assert_eq!(
            cfg.get("CONTROLLERS.PATH").and_then(Value::as_str),
            Some("API_PATH/Controllers")
        );
        assert!(cfg.get("CONTROLLERS.MISSING").is_none());
        assert!(cfg.get("API_PATH.NOT_AN_OBJECT").is_none());
    }

    #[test]
    fn overlay_replaces_top_level_keys_wholesale() {
        // Shallow merge: overriding SERVICE drops every default SERVICE key
        // that the overlay does not restate.
        let cfg = Config::from_overlay(json!({
            "SERVICE": { "PATH": "INFRASTRUCTURE_PATH/Svc" }
        }))
        .unwrap();
        assert_eq!(
            cfg.get("SERVICE.PATH").and_then(Value::as_str),
            Some("INFRASTRUCTURE_PATH/Svc")
        );
        assert!(cfg.get("SERVICE.IPATH").is_none());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("SERVICE.IPATH"));
    }

    #[test]
    fn assert_kind_names_the_namespace_and_kind() {
        let cfg = Config::defaults();
        let err = cfg.assert_kind("MODEL.LIST", ValueKind::Str).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("MODEL.LIST"));
        assert!(message.contains("string"));
        cfg.assert_kind("MODEL.LIST", ValueKind::List).unwrap();
    }

    #[test]
    fn non_object_overlay_is_rejected() {
        assert!(Config::from_overlay(json!("not an object")).is_err());
        assert!(Config::from_overlay(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn resolve_path_substitutes_tokens() {
        let cfg = Config::defaults();
        let root = Path::new("/project");
        let resolved = cfg
            .resolve_path("APPLICATION_PATH/Dto", root)
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/project/APPLICATION/Dto"));

        let resolved = cfg.resolve_path("ROOT_PATH", root).unwrap();
        assert_eq!(resolved, PathBuf::from("/project"));
    }

    #[test]
    fn resolve_path_normalizes_backslashes() {
        let cfg = Config::defaults();
        let resolved = cfg
            .resolve_path("INFRASTRUCTURE_PATH\\Service", Path::new("/p"))
            .unwrap();
        let expected: PathBuf = ["/p", "INFRASTRUCTURE", "Service"].iter().collect();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn push_model_is_deduplicating() {
        let mut cfg = Config::defaults();
        cfg.push_model("Role").unwrap();
        cfg.push_model("Role").unwrap();
        assert_eq!(cfg.models(), vec!["User".to_string(), "Role".to_string()]);
    }

    #[test]
    fn set_models_overwrites_the_list() {
        let mut cfg = Config::defaults();
        cfg.set_models(vec!["Role".into(), "Permission".into()]).unwrap();
        assert_eq!(
            cfg.models(),
            vec!["Role".to_string(), "Permission".to_string()]
        );
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut cfg = Config::defaults();
        cfg.push_model("Role").unwrap();
        cfg.persist(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        reloaded.validate().unwrap();
        assert_eq!(reloaded.models(), cfg.models());
    }

    #[test]
    fn load_fails_on_missing_or_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(Config::load(&missing).is_err());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(Config::load(&bad).is_err());
    }
}
