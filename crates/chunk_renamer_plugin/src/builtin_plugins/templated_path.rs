use std::borrow::Cow;

use chunk_renamer_common::{FilenameTemplate, PathData, PathTemplate, TemplateReplacements};

use crate::{Compiler, Plugin};

const PLUGIN_NAME: &str = "TemplatedPathPlugin";

/// Replaces the host placeholders (`[name]`, `[id]`, `[hash]`, `[chunkhash]`, `[contenthash]`)
/// of asset paths.
#[derive(Debug)]
pub struct TemplatedPathPlugin;

impl Plugin for TemplatedPathPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(PLUGIN_NAME)
  }

  fn apply(&self, compiler: &mut Compiler) -> anyhow::Result<()> {
    compiler.hooks.compilation.tap(PLUGIN_NAME, |compilation| {
      let hash_length = compilation.options.hash_digest_length;
      compilation.hooks.asset_path.tap(PLUGIN_NAME, move |path, data| {
        let path = path.resolve(data);
        Ok(PathTemplate::Static(render_path(path, data, hash_length)))
      });
      Ok(())
    });
    Ok(())
  }
}

fn render_path(path: String, data: &PathData<'_>, hash_length: usize) -> String {
  let chunk = data.chunk;
  let id = chunk.and_then(|chunk| chunk.id.as_ref()).map(ToString::to_string);
  let chunk_hash = chunk.and_then(|chunk| chunk.content_hash.as_deref());
  let replacements = TemplateReplacements {
    name: chunk.and_then(|chunk| chunk.name.as_deref()).filter(|name| !name.is_empty()),
    id: id.as_deref(),
    hash: data.hash,
    chunk_hash,
    content_hash: chunk_hash,
  };
  FilenameTemplate::new(path).render(&replacements, hash_length)
}

#[test]
fn test_render_path() {
  use chunk_renamer_common::{Chunk, ChunkGroupFlags, ChunkId};

  let mut chunk = Chunk::new(Some(ChunkId::Number(4)), None, ChunkGroupFlags::ASYNC);
  chunk.content_hash = Some("fedcba9876543210".into());
  let data = PathData { chunk: Some(&chunk), hash: Some("0011223344556677") };

  assert_eq!(render_path("[name].[chunkhash].js".to_string(), &data, 6), "4.fedcba.js");
  assert_eq!(render_path("[id]/[hash:4].js".to_string(), &data, 6), "4/0011.js");
  assert_eq!(render_path("[lc-name].js".to_string(), &data, 6), "[lc-name].js");
}
