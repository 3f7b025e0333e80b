use std::sync::Arc;

use anyhow::Context;
use chunk_renamer_common::{Chunk, OutputOptions};
use chunk_renamer_error::BuildResult;

use crate::{
  utils::normalize_options::normalize_options, BundleOutput, Compilation, CompilerHooks,
  JavascriptModulesPlugin, SharedOutputOptions, SharedPlugin, TemplatedPathPlugin,
};

#[derive(Debug)]
pub struct Compiler {
  pub options: SharedOutputOptions,
  pub hooks: CompilerHooks,
}

impl Compiler {
  /// Applies `plugins` in order, followed by the built-in ones. Built-in taps therefore see the
  /// results of every user tap.
  pub fn new(options: OutputOptions, plugins: Vec<SharedPlugin>) -> BuildResult<Self> {
    let mut compiler =
      Self { options: Arc::new(normalize_options(options)), hooks: CompilerHooks::default() };

    let builtin_plugins: [SharedPlugin; 2] =
      [Arc::new(TemplatedPathPlugin), Arc::new(JavascriptModulesPlugin)];
    for plugin in plugins.into_iter().chain(builtin_plugins) {
      tracing::debug!(plugin = %plugin.name(), "Applying plugin");
      plugin
        .apply(&mut compiler)
        .with_context(|| format!("Failed to apply plugin `{}`", plugin.name()))?;
    }

    Ok(compiler)
  }

  pub fn new_compilation(
    &self,
    chunks: impl IntoIterator<Item = Chunk>,
  ) -> BuildResult<Compilation> {
    let mut compilation = Compilation::new(&self.options, chunks.into_iter().collect());
    self.hooks.compilation.call(&mut compilation)?;
    Ok(compilation)
  }

  pub fn compile(&self, chunks: impl IntoIterator<Item = Chunk>) -> BuildResult<BundleOutput> {
    let mut compilation = self.new_compilation(chunks)?;
    compilation.hash_chunks();
    let assets = compilation.create_chunk_assets()?;
    tracing::debug!(assets = assets.len(), "Compilation finished");
    Ok(BundleOutput { assets })
  }
}
