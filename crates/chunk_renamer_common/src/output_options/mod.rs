pub mod filename_template;
pub mod normalized_output_options;

use serde::Deserialize;

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
  /// Template for chunks that can be loaded initially.
  pub filename: Option<String>,
  /// Template for every other chunk.
  pub chunk_filename: Option<String>,
  pub hash_digest_length: Option<usize>,
}
