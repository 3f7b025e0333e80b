use std::borrow::Cow;

use anyhow::Context;
use chunk_renamer_common::{PathData, PathTemplate, RenderManifestContext, RenderManifestEntry};

use crate::Compilation;

pub type CompilationCallback = dyn Fn(&mut Compilation) -> anyhow::Result<()> + Send + Sync;

/// Waterfall: every tap gets the path returned by the tap before it.
pub type AssetPathCallback =
  dyn Fn(PathTemplate, &PathData<'_>) -> anyhow::Result<PathTemplate> + Send + Sync;

pub type RenderManifestCallback = dyn Fn(
    &mut Vec<RenderManifestEntry>,
    &mut RenderManifestContext<'_>,
  ) -> anyhow::Result<()>
  + Send
  + Sync;

pub struct Tap<F: ?Sized> {
  pub name: Cow<'static, str>,
  pub callback: Box<F>,
}

/// Taps run in registration order.
pub struct Hook<F: ?Sized> {
  name: &'static str,
  taps: Vec<Tap<F>>,
}

impl<F: ?Sized> Hook<F> {
  pub fn new(name: &'static str) -> Self {
    Self { name, taps: Vec::new() }
  }

  fn push(&mut self, name: Cow<'static, str>, callback: Box<F>) {
    tracing::trace!(hook = self.name, tap = %name, "Registering tap");
    self.taps.push(Tap { name, callback });
  }

  fn failed_in(&self, tap: &Tap<F>) -> String {
    format!("Plugin `{}` failed in the `{}` hook", tap.name, self.name)
  }
}

impl<F: ?Sized> std::fmt::Debug for Hook<F> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Hook")
      .field("name", &self.name)
      .field("taps", &self.taps.iter().map(|tap| &tap.name).collect::<Vec<_>>())
      .finish()
  }
}

pub type CompilationHook = Hook<CompilationCallback>;
pub type AssetPathHook = Hook<AssetPathCallback>;
pub type RenderManifestHook = Hook<RenderManifestCallback>;

impl Hook<CompilationCallback> {
  pub fn tap<F>(&mut self, name: impl Into<Cow<'static, str>>, callback: F)
  where
    F: Fn(&mut Compilation) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    self.push(name.into(), Box::new(callback));
  }

  pub fn call(&self, compilation: &mut Compilation) -> anyhow::Result<()> {
    for tap in &self.taps {
      (tap.callback)(compilation).with_context(|| self.failed_in(tap))?;
    }
    Ok(())
  }
}

impl Hook<AssetPathCallback> {
  pub fn tap<F>(&mut self, name: impl Into<Cow<'static, str>>, callback: F)
  where
    F: Fn(PathTemplate, &PathData<'_>) -> anyhow::Result<PathTemplate> + Send + Sync + 'static,
  {
    self.push(name.into(), Box::new(callback));
  }

  pub fn call(&self, path: PathTemplate, data: &PathData<'_>) -> anyhow::Result<PathTemplate> {
    self.taps.iter().try_fold(path, |path, tap| {
      (tap.callback)(path, data).with_context(|| self.failed_in(tap))
    })
  }
}

impl Hook<RenderManifestCallback> {
  pub fn tap<F>(&mut self, name: impl Into<Cow<'static, str>>, callback: F)
  where
    F: Fn(&mut Vec<RenderManifestEntry>, &mut RenderManifestContext<'_>) -> anyhow::Result<()>
      + Send
      + Sync
      + 'static,
  {
    self.push(name.into(), Box::new(callback));
  }

  pub fn call(
    &self,
    manifest: &mut Vec<RenderManifestEntry>,
    ctx: &mut RenderManifestContext<'_>,
  ) -> anyhow::Result<()> {
    for tap in &self.taps {
      (tap.callback)(manifest, ctx).with_context(|| self.failed_in(tap))?;
    }
    Ok(())
  }
}

#[derive(Debug)]
pub struct CompilerHooks {
  pub compilation: CompilationHook,
}

impl Default for CompilerHooks {
  fn default() -> Self {
    Self { compilation: Hook::new("compilation") }
  }
}

#[derive(Debug)]
pub struct CompilationHooks {
  pub asset_path: AssetPathHook,
  pub render_manifest: RenderManifestHook,
}

impl Default for CompilationHooks {
  fn default() -> Self {
    Self { asset_path: Hook::new("assetPath"), render_manifest: Hook::new("renderManifest") }
  }
}
