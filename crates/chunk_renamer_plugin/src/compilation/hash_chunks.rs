use chunk_renamer_utils::xxhash::{xxhash_hex, xxhash_hex_of};

use super::Compilation;

impl Compilation {
  /// Fills `content_hash` of every chunk and the compilation `hash` derived from them.
  pub fn hash_chunks(&mut self) {
    for chunk in self.chunk_table.iter_mut() {
      let id = chunk.id.as_ref().map(ToString::to_string).unwrap_or_default();
      let name = chunk.name.as_deref().unwrap_or_default();
      let separator = b"\0".as_slice();
      let hash = xxhash_hex_of([
        id.as_bytes(),
        separator,
        name.as_bytes(),
        separator,
        chunk.source.as_bytes(),
      ]);
      chunk.content_hash = Some(hash.into());
    }

    let chunk_hashes: String =
      self.chunk_table.iter().filter_map(|chunk| chunk.content_hash.as_deref()).collect();
    let hash = xxhash_hex(chunk_hashes.as_bytes());
    tracing::debug!(%hash, chunks = self.chunk_table.len(), "Hashed chunks");
    self.hash = Some(hash);
  }
}
