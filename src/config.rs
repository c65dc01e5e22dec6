//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file: TOML, tag arrays union with defaults (`!tag` removes)
//! 3. Environment variables: `TAGTREE_*` prefix

use std::collections::BTreeSet;
use std::path::Path;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::RewriteRules;

const ENV_PREFIX: &str = "TAGTREE";

/// Array keys the environment layer splits on commas.
const LIST_KEYS: [&str; 3] = [
    "rules.unwrap_tags",
    "rules.list_tags",
    "rules.emphasis_tags",
];

/// Raw rules for intermediate parsing (arrays are Option to detect "not specified").
///
/// - `None` → field not specified, inherit from base
/// - `Some([])` → explicit empty array
/// - `Some([...])` → explicit values to merge
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRules {
    pub unwrap_tags: Option<Vec<String>>,
    pub list_tags: Option<Vec<String>>,
    pub list_item_label: Option<String>,
    pub emphasis_tags: Option<Vec<String>>,
    pub trailing_punctuation: Option<String>,
    pub bold_label: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub rules: RawRules,
}

/// Merge arrays with union semantics and negation support.
///
/// - Items from overlay are added to base
/// - Items prefixed with `!` remove the corresponding item from the result
/// - Duplicates are de-duplicated, output is sorted
///
/// # Examples
/// ```ignore
/// merge_array(&["p", "b"], &["i"])        // → ["b", "i", "p"]
/// merge_array(&["p", "b"], &["!p", "i"])  // → ["b", "i"]
/// ```
pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
    let mut result: BTreeSet<String> = base.iter().cloned().collect();

    for pattern in overlay {
        if let Some(negated) = pattern.strip_prefix('!') {
            result.remove(negated);
        } else {
            result.insert(pattern.clone());
        }
    }

    result.into_iter().collect()
}

fn merge_rules(base: &RewriteRules, overlay: &RawRules) -> RewriteRules {
    let merge = |base: &[String], overlay: &Option<Vec<String>>| {
        overlay
            .as_ref()
            .map(|o| merge_array(base, o))
            .unwrap_or_else(|| base.to_vec())
    };
    RewriteRules {
        unwrap_tags: merge(&base.unwrap_tags, &overlay.unwrap_tags),
        list_tags: merge(&base.list_tags, &overlay.list_tags),
        list_item_label: overlay
            .list_item_label
            .clone()
            .unwrap_or_else(|| base.list_item_label.clone()),
        emphasis_tags: merge(&base.emphasis_tags, &overlay.emphasis_tags),
        trailing_punctuation: overlay
            .trailing_punctuation
            .clone()
            .unwrap_or_else(|| base.trailing_punctuation.clone()),
        bold_label: overlay
            .bold_label
            .clone()
            .unwrap_or_else(|| base.bold_label.clone()),
    }
}

/// Unified configuration for tagtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tag sets and punctuation used by the rewrite operations
    pub rules: RewriteRules,
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `path` - Optional TOML settings file; a missing file is an error
    ///
    /// # Array Merge Semantics
    /// - Defaults → File: UNION with negation support
    /// - Any → Env vars: REPLACE (explicit user override)
    #[instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
                message: format!("read {}: {}", path.display(), e),
            })?;
            current = current.merge_with(&parse_raw(&content)?);
            debug!(path = %path.display(), "merged settings file");
        }

        Self::apply_env_overrides(current)
    }

    /// Defaults merged with a TOML document, without consulting the environment.
    pub fn from_toml_str(content: &str) -> Result<Self, ApplicationError> {
        Ok(Self::default().merge_with(&parse_raw(content)?))
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            rules: merge_rules(&self.rules, &overlay.rules),
        }
    }

    /// Apply TAGTREE_* environment variables as explicit overrides.
    ///
    /// Env vars replace values (not merge) - they are explicit user overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let mut env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        for key in LIST_KEYS {
            env = env.with_list_parse_key(key);
        }
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        let rules = &mut settings.rules;
        if let Ok(val) = config.get::<Vec<String>>("rules.unwrap_tags") {
            rules.unwrap_tags = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("rules.list_tags") {
            rules.list_tags = val;
        }
        if let Ok(val) = config.get_string("rules.list_item_label") {
            rules.list_item_label = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("rules.emphasis_tags") {
            rules.emphasis_tags = val;
        }
        if let Ok(val) = config.get_string("rules.trailing_punctuation") {
            rules.trailing_punctuation = val;
        }
        if let Ok(val) = config.get_string("rules.bold_label") {
            rules.bold_label = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# tagtree configuration
#
# Layers (by precedence, lowest to highest):
#   Defaults: compiled in
#   File:     this file, passed to Settings::load
#   Env:      TAGTREE_* environment variables (explicit overrides),
#             e.g. TAGTREE_RULES__LIST_ITEM_LABEL=para
#
# Array Merge Semantics:
#   File arrays UNION with the defaults.
#   Use "!tag" to REMOVE an inherited item:
#     unwrap_tags = ["i", "!em"]  # adds i, no longer unwraps em

[rules]
# Tags RemoveTag unwraps in place
# unwrap_tags = ["b", "em", "p"]

# List containers RemoveTag flattens; each item is relabelled
# list_tags = ["ol", "ul"]
# list_item_label = "p"

# Tags AddTag may wrap words in
# emphasis_tags = ["b", "em"]

# Single trailing characters allowed after a matched word
# trailing_punctuation = ".?!,"

# Wrapper BoldRow inserts into each cell
# bold_label = "b"
"#
        .to_string()
    }
}

fn parse_raw(content: &str) -> Result<RawSettings, ApplicationError> {
    toml::from_str(content).map_err(|e| ApplicationError::Config {
        message: format!("parse settings: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
