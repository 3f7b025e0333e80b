use crate::Chunk;

/// What the host knows about the asset whose path is being computed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathData<'a> {
  pub chunk: Option<&'a Chunk>,
  /// Hash of the whole compilation, rendered into `[hash]`.
  pub hash: Option<&'a str>,
}

impl<'a> PathData<'a> {
  pub fn for_chunk(chunk: &'a Chunk) -> Self {
    Self { chunk: Some(chunk), hash: None }
  }
}
