mod create_chunk_assets;
mod hash_chunks;

use std::sync::Arc;

use chunk_renamer_common::{
  ChunkIdx, ChunkTable, PathData, PathTemplate, RenderManifestContext, RenderManifestEntry,
};

use crate::{CompilationHooks, SharedOutputOptions};

/// A single run of the compiler over a set of chunks.
#[derive(Debug)]
pub struct Compilation {
  pub options: SharedOutputOptions,
  pub chunk_table: ChunkTable,
  pub hooks: CompilationHooks,
  /// Set by `hash_chunks`.
  pub hash: Option<String>,
}

impl Compilation {
  pub fn new(options: &SharedOutputOptions, chunk_table: ChunkTable) -> Self {
    Self {
      options: Arc::clone(options),
      chunk_table,
      hooks: CompilationHooks::default(),
      hash: None,
    }
  }

  /// Runs `path` through every `asset_path` tap and resolves whatever comes out.
  pub fn get_asset_path(
    &self,
    path: impl Into<PathTemplate>,
    data: &PathData<'_>,
  ) -> anyhow::Result<String> {
    let path = self.hooks.asset_path.call(path.into(), data)?;
    Ok(path.resolve(data))
  }

  pub fn get_render_manifest(
    &mut self,
    chunk_idx: ChunkIdx,
  ) -> anyhow::Result<Vec<RenderManifestEntry>> {
    let mut manifest = Vec::new();
    let mut ctx = RenderManifestContext {
      chunk_idx,
      chunk: &mut self.chunk_table[chunk_idx],
      output_options: &self.options,
    };
    self.hooks.render_manifest.call(&mut manifest, &mut ctx)?;
    Ok(manifest)
  }
}
