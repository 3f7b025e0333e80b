use std::{num::FpCategory, path::Path};

use anyhow::{anyhow, Context};
use chunk_renamer_utils::indexmap::FxIndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The one key of the configuration object that is not a chunk name.
pub const INITIAL_CHUNKS_WITH_ENTRY: &str = "initialChunksWithEntry";

/// Configuration of [`crate::ChunkRenamerPlugin`].
///
/// Deserializes from a flat object: every key is a chunk name (or id) mapped to the asset path
/// that chunk should use instead, except [`INITIAL_CHUNKS_WITH_ENTRY`].
///
/// ```json
/// { "Console": "[lc-name].js", "vendor": "vendor.js", "initialChunksWithEntry": true }
/// ```
///
/// Values are not checked up front. A non-string override only fails once a chunk with that name
/// has its path resolved.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(from = "FxIndexMap<String, Value>")]
pub struct ChunkRenamerOptions {
  overrides: FxIndexMap<String, Value>,
  initial_chunks_with_entry: bool,
}

impl ChunkRenamerOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
    serde_json::from_str(json).context("Failed to parse chunk renamer options")
  }

  pub fn from_path(path: &Path) -> anyhow::Result<Self> {
    let json = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read chunk renamer options from {}", path.display()))?;
    Self::from_json_str(&json).with_context(|| format!("Invalid options in {}", path.display()))
  }

  #[must_use]
  pub fn with_override(mut self, chunk_name: impl Into<String>, path: impl Into<String>) -> Self {
    self.overrides.insert(chunk_name.into(), Value::String(path.into()));
    self
  }

  #[must_use]
  pub fn with_initial_chunks_with_entry(mut self, value: bool) -> Self {
    self.initial_chunks_with_entry = value;
    self
  }

  pub fn initial_chunks_with_entry(&self) -> bool {
    self.initial_chunks_with_entry
  }

  pub fn overrides(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.overrides.iter().map(|(name, value)| (name.as_str(), value))
  }

  /// The path configured for `chunk_name`, if any.
  pub fn override_for(&self, chunk_name: &str) -> Option<anyhow::Result<&str>> {
    self.overrides.get(chunk_name).map(|value| match value {
      Value::String(path) => Ok(path.as_str()),
      other => Err(anyhow!(
        "The override for chunk `{chunk_name}` must be a filename template string, got `{other}`"
      )),
    })
  }
}

impl From<FxIndexMap<String, Value>> for ChunkRenamerOptions {
  fn from(mut overrides: FxIndexMap<String, Value>) -> Self {
    let initial_chunks_with_entry =
      overrides.shift_remove(INITIAL_CHUNKS_WITH_ENTRY).is_some_and(|value| is_truthy(&value));
    Self { overrides, initial_chunks_with_entry }
  }
}

/// Truthiness as the configuration files are usually written for, so `1` or `"yes"` enable a flag
/// and `0`, `""` or `null` don't.
fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(value) => *value,
    Value::Number(number) => {
      number.as_f64().is_some_and(|number| number.classify() != FpCategory::Zero)
    }
    Value::String(value) => !value.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}
