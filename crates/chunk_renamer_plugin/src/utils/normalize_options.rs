use chunk_renamer_common::{NormalizedOutputOptions, OutputOptions};

pub fn normalize_options(raw_options: OutputOptions) -> NormalizedOutputOptions {
  NormalizedOutputOptions {
    filename: raw_options.filename.unwrap_or_else(|| "[name].js".to_string()).into(),
    chunk_filename: raw_options
      .chunk_filename
      .unwrap_or_else(|| "[name]-[chunkhash].js".to_string())
      .into(),
    hash_digest_length: raw_options.hash_digest_length.unwrap_or(8),
  }
}

#[test]
fn test_normalize_options_defaults() {
  let options = normalize_options(OutputOptions::default());
  assert_eq!(options.filename.template(), "[name].js");
  assert_eq!(options.chunk_filename.template(), "[name]-[chunkhash].js");
  assert_eq!(options.hash_digest_length, 8);
}

#[test]
fn test_normalize_options_keeps_user_values() {
  let options = normalize_options(OutputOptions {
    filename: Some("[name].[contenthash].js".to_string()),
    chunk_filename: Some("[id].js".to_string()),
    hash_digest_length: Some(20),
  });
  assert_eq!(options.filename.template(), "[name].[contenthash].js");
  assert_eq!(options.chunk_filename.template(), "[id].js");
  assert_eq!(options.hash_digest_length, 20);
}
