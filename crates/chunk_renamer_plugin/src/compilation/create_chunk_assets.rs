use std::collections::hash_map::Entry;

use anyhow::anyhow;
use chunk_renamer_common::{ChunkIdx, OutputAsset, PathData};
use chunk_renamer_error::BuildResult;
use rustc_hash::FxHashMap;

use super::Compilation;

impl Compilation {
  /// Renders the manifest of every chunk and resolves the filename of each entry.
  ///
  /// Errors don't stop the remaining chunks from being processed; they are reported together.
  pub fn create_chunk_assets(&mut self) -> BuildResult<Vec<OutputAsset>> {
    let mut assets = Vec::with_capacity(self.chunk_table.len());
    let mut errors = Vec::new();
    let mut emitted_by: FxHashMap<String, ChunkIdx> = FxHashMap::default();

    for chunk_idx in (0..self.chunk_table.len()).map(ChunkIdx::from_usize) {
      let manifest = match self.get_render_manifest(chunk_idx) {
        Ok(manifest) => manifest,
        Err(error) => {
          errors.push(error);
          continue;
        }
      };

      for entry in manifest {
        let chunk = &self.chunk_table[entry.chunk_idx];
        let data = PathData { chunk: Some(chunk), hash: self.hash.as_deref() };
        let filename = match self.get_asset_path(entry.filename_template, &data) {
          Ok(filename) => filename,
          Err(error) => {
            errors.push(error);
            continue;
          }
        };

        match emitted_by.entry(filename) {
          Entry::Occupied(occ) => {
            let other = &self.chunk_table[*occ.get()];
            errors.push(anyhow!(
              "Conflict: Multiple chunks emit assets to the same filename `{}` \
               (chunks `{}` and `{}`)",
              occ.key(),
              other.name_or_id().unwrap_or_default(),
              chunk.name_or_id().unwrap_or_default(),
            ));
          }
          Entry::Vacant(vac) => {
            tracing::debug!(
              filename = %vac.key(),
              identifier = %entry.identifier,
              "Emitting chunk asset"
            );
            assets.push(OutputAsset {
              filename: vac.key().clone(),
              chunk_idx: entry.chunk_idx,
              chunk_name: chunk.name.clone(),
              content: chunk.source.clone(),
            });
            vac.insert(entry.chunk_idx);
          }
        }
      }
    }

    if errors.is_empty() {
      Ok(assets)
    } else {
      Err(errors.into())
    }
  }
}
