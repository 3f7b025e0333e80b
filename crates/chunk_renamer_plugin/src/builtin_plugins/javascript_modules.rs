use std::borrow::Cow;

use chunk_renamer_common::RenderManifestEntry;

use crate::{Compiler, Plugin};

const PLUGIN_NAME: &str = "JavascriptModulesPlugin";

/// Adds the `.js` file of every chunk to its render manifest.
///
/// The template is read from the chunk only after every user tap ran, so a plugin that sets
/// `Chunk::filename_template` decides the name of the emitted file.
#[derive(Debug)]
pub struct JavascriptModulesPlugin;

impl Plugin for JavascriptModulesPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(PLUGIN_NAME)
  }

  fn apply(&self, compiler: &mut Compiler) -> anyhow::Result<()> {
    compiler.hooks.compilation.tap(PLUGIN_NAME, |compilation| {
      compilation.hooks.render_manifest.tap(PLUGIN_NAME, |manifest, ctx| {
        manifest.push(RenderManifestEntry {
          chunk_idx: ctx.chunk_idx,
          filename_template: ctx.chunk.filename_template(ctx.output_options),
          identifier: format!("chunk{}", ctx.chunk_idx.index()),
        });
        Ok(())
      });
      Ok(())
    });
    Ok(())
  }
}
