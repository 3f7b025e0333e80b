use crate::FilenameTemplate;

#[derive(Debug, Clone)]
pub struct NormalizedOutputOptions {
  pub filename: FilenameTemplate,
  pub chunk_filename: FilenameTemplate,
  pub hash_digest_length: usize,
}
