pub mod chunk_table;

use std::borrow::Cow;

use arcstr::ArcStr;

use crate::{ChunkGroupFlags, ChunkId, FilenameTemplate, ModuleIdx, NormalizedOutputOptions};

#[derive(Debug, Default)]
pub struct Chunk {
  /// `None` until the host assigns ids.
  pub id: Option<ChunkId>,
  pub name: Option<ArcStr>,
  pub entry_modules: Vec<ModuleIdx>,
  pub groups: ChunkGroupFlags,
  /// Set by plugins to take the chunk out of the default `filename`/`chunk_filename` choice.
  pub filename_template: Option<FilenameTemplate>,
  pub source: String,
  pub content_hash: Option<ArcStr>,
}

impl Chunk {
  pub fn new(id: Option<ChunkId>, name: Option<ArcStr>, groups: ChunkGroupFlags) -> Self {
    Self { id, name, groups, ..Self::default() }
  }

  /// The name if there is a non-empty one, the id otherwise.
  pub fn name_or_id(&self) -> Option<Cow<'_, str>> {
    self
      .name
      .as_deref()
      .filter(|name| !name.is_empty())
      .map(Cow::Borrowed)
      .or_else(|| self.id.as_ref().map(|id| Cow::Owned(id.to_string())))
  }

  pub fn can_be_initial(&self) -> bool {
    self.groups.contains(ChunkGroupFlags::INITIAL)
  }

  pub fn is_only_initial(&self) -> bool {
    self.groups == ChunkGroupFlags::INITIAL
  }

  pub fn number_of_entry_modules(&self) -> usize {
    self.entry_modules.len()
  }

  pub fn filename_template(&self, options: &NormalizedOutputOptions) -> FilenameTemplate {
    if let Some(template) = &self.filename_template {
      return template.clone();
    }
    if self.can_be_initial() {
      options.filename.clone()
    } else {
      options.chunk_filename.clone()
    }
  }
}
