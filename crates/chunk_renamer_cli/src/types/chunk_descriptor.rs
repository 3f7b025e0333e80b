use std::path::Path;

use anyhow::Context;
use chunk_renamer::{Chunk, ChunkGroupFlags, ChunkId, ModuleIdx};
use serde::Deserialize;

/// A chunk as written in the `--chunks` file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChunkDescriptor {
  pub id: Option<ChunkId>,
  pub name: Option<String>,
  #[serde(default)]
  pub entry_modules: usize,
  #[serde(default)]
  pub initial: bool,
  #[serde(default, rename = "async")]
  pub is_async: bool,
  pub filename_template: Option<String>,
  #[serde(default)]
  pub source: String,
}

impl ChunkDescriptor {
  /// `next_module` hands out module indices so entry modules stay distinct across chunks.
  pub fn into_chunk(self, next_module: &mut usize) -> Chunk {
    let mut groups = ChunkGroupFlags::empty();
    groups.set(ChunkGroupFlags::INITIAL, self.initial);
    groups.set(ChunkGroupFlags::ASYNC, self.is_async);

    let mut chunk = Chunk::new(self.id, self.name.map(Into::into), groups);
    chunk.entry_modules = (*next_module..*next_module + self.entry_modules)
      .map(ModuleIdx::from_usize)
      .collect();
    *next_module += self.entry_modules;
    chunk.filename_template = self.filename_template.map(Into::into);
    chunk.source = self.source;
    chunk
  }
}

pub fn load_chunks(path: &Path) -> anyhow::Result<Vec<Chunk>> {
  let json = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read chunks from {}", path.display()))?;
  let descriptors: Vec<ChunkDescriptor> = serde_json::from_str(&json)
    .with_context(|| format!("Invalid chunks in {}", path.display()))?;

  let mut next_module = 0;
  Ok(descriptors.into_iter().map(|descriptor| descriptor.into_chunk(&mut next_module)).collect())
}

#[test]
fn test_into_chunk() {
  let descriptors: Vec<ChunkDescriptor> = serde_json::from_str(
    r#"[
      { "id": 0, "name": "Console", "entryModules": 2, "initial": true },
      { "id": "lazy", "async": true, "filenameTemplate": "[id].js", "source": "1" }
    ]"#,
  )
  .unwrap();

  let mut next_module = 0;
  let chunks: Vec<Chunk> =
    descriptors.into_iter().map(|descriptor| descriptor.into_chunk(&mut next_module)).collect();

  assert_eq!(next_module, 2);
  assert!(chunks[0].is_only_initial());
  assert_eq!(chunks[0].number_of_entry_modules(), 2);
  assert_eq!(chunks[0].name_or_id().as_deref(), Some("Console"));

  assert!(!chunks[1].can_be_initial());
  assert_eq!(chunks[1].number_of_entry_modules(), 0);
  assert_eq!(chunks[1].name_or_id().as_deref(), Some("lazy"));
  assert_eq!(chunks[1].filename_template.as_ref().map(|t| t.template()), Some("[id].js"));
  assert_eq!(chunks[1].source, "1");
}
