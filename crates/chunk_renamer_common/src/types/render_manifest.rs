use crate::{Chunk, ChunkIdx, FilenameTemplate, NormalizedOutputOptions};

/// One file the host is going to emit for a chunk.
#[derive(Debug, Clone)]
pub struct RenderManifestEntry {
  pub chunk_idx: ChunkIdx,
  pub filename_template: FilenameTemplate,
  pub identifier: String,
}

/// Handed to every `render_manifest` tap. `chunk` is the only thing a tap may change.
#[derive(Debug)]
pub struct RenderManifestContext<'a> {
  pub chunk_idx: ChunkIdx,
  pub chunk: &'a mut Chunk,
  pub output_options: &'a NormalizedOutputOptions,
}
