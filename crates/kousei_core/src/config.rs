//! Linter configuration.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LinterError, Severity};
use crate::symbol::{Symbol, SymbolKind, SymbolTable};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for the linter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Document language.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Least severe level that still counts as a finding.
    #[serde(default)]
    pub threshold: Severity,

    /// Validators to run, in registration order.
    #[serde(default)]
    pub validators: ValidatorMap,

    /// Symbol overrides, keyed by symbol name.
    #[serde(default)]
    pub symbols: HashMap<SymbolKind, SymbolOverride>,

    /// Base directory for resolving relative paths (dictionaries, etc.).
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Config {
    /// File names probed during discovery, most specific first.
    pub const FILE_NAMES: [&'static str; 2] = [".kousei.jsonc", ".kousei.json"];

    /// Configuration with the default validator set for `lang`.
    pub fn new(lang: impl Into<String>) -> Self {
        let mut validators = ValidatorMap::default();
        for name in ["SentenceLength", "CommaNumber", "InvalidSymbol"] {
            validators.insert(name, ValidatorSetting::Enabled(true));
        }
        Self {
            lang: lang.into(),
            threshold: Severity::default(),
            validators,
            symbols: HashMap::new(),
            base_dir: None,
        }
    }

    /// Loads configuration from a file, remembering its directory for
    /// relative path resolution.
    pub fn from_file(path: &Path) -> Result<Self, LinterError> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parses configuration from a JSON or JSONC string and validates it
    /// against the embedded schema.
    pub fn from_json(source: &str) -> Result<Self, LinterError> {
        let parse_options = jsonc_parser::ParseOptions::default();
        let value = jsonc_parser::parse_to_serde_value(source, &parse_options)
            .map_err(|e| LinterError::config(format!("Failed to parse configuration: {e}")))?
            .ok_or_else(|| LinterError::config("Configuration file is empty"))?;

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });
        if let Err(e) = schema.validate(&value) {
            return Err(LinterError::config(format!("{} at {}", e, e.instance_path())));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid configuration: {e}")))
    }

    /// Looks for a configuration file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        Self::FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Symbol table for the configured language with overrides applied.
    pub fn symbol_table(&self) -> SymbolTable {
        let mut table = SymbolTable::for_language(&self.lang);
        for (kind, patch) in &self.symbols {
            table.update(*kind, |symbol| patch.apply(symbol));
        }
        table
    }
}

/// Validator settings in registration order.
///
/// A JSON object loses key order in most map types; validators run in the
/// order the file lists them, so this keeps entries as an ordered list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorMap(Vec<(String, ValidatorSetting)>);

impl ValidatorMap {
    pub fn insert(&mut self, name: impl Into<String>, setting: ValidatorSetting) {
        self.0.push((name.into(), setting));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatorSetting)> {
        self.0.iter().map(|(name, setting)| (name.as_str(), setting))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ValidatorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, setting) in &self.0 {
            map.serialize_entry(name, setting)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValidatorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ValidatorMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of validator settings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, ValidatorSetting>()? {
                    entries.push(entry);
                }
                Ok(ValidatorMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Configuration for a single validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValidatorSetting {
    /// Validator is enabled with defaults (`true`) or disabled (`false`).
    Enabled(bool),
    /// Validator is enabled with specific properties.
    Properties(ValidatorProperties),
}

impl ValidatorSetting {
    /// Returns whether the validator should run.
    pub fn is_enabled(&self) -> bool {
        match self {
            ValidatorSetting::Enabled(enabled) => *enabled,
            ValidatorSetting::Properties(_) => true,
        }
    }

    /// Severity override, when one is configured.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            ValidatorSetting::Enabled(_) => None,
            ValidatorSetting::Properties(properties) => properties.severity,
        }
    }
}

/// Property bag for one validator.
///
/// The `severity` key is interpreted by the engine; everything else is
/// validator-specific and checked during validator setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidatorProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(flatten)]
    values: serde_json::Map<String, serde_json::Value>,
}

impl ValidatorProperties {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Non-negative integer property.
    pub fn usize_value(&self, key: &str) -> Result<Option<usize>, String> {
        match self.values.get(key) {
            None => Ok(None),
            Some(serde_json::Value::Number(n)) => {
                let value = n
                    .as_u64()
                    .ok_or_else(|| format!("\"{key}\" must be a non-negative integer"))?;
                usize::try_from(value)
                    .map(Some)
                    .map_err(|_| format!("\"{key}\" is too large"))
            }
            Some(other) => Err(format!(
                "\"{key}\" must be a non-negative integer, got {other}"
            )),
        }
    }

    /// String property.
    pub fn string_value(&self, key: &str) -> Result<Option<&str>, String> {
        match self.values.get(key) {
            None => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(format!("\"{key}\" must be a string, got {other}")),
        }
    }

    /// Array-of-strings property.
    pub fn string_list_value(&self, key: &str) -> Result<Option<Vec<String>>, String> {
        match self.values.get(key) {
            None => Ok(None),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| format!("\"{key}\" must be an array of strings"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(format!("\"{key}\" must be an array of strings, got {other}")),
        }
    }
}

/// Override for one symbol table entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SymbolOverride {
    /// Replacement canonical character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<char>,

    /// Replacement set of disallowed characters, given as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_chars: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_space: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_space: Option<bool>,
}

impl SymbolOverride {
    pub fn apply(&self, symbol: &mut Symbol) {
        if let Some(value) = self.value {
            symbol.value = value;
        }
        if let Some(chars) = &self.invalid_chars {
            symbol.invalid_chars = chars.chars().collect();
        }
        if let Some(before) = self.before_space {
            symbol.before_space = before;
        }
        if let Some(after) = self.after_space {
            symbol.after_space = after;
        }
    }
}
