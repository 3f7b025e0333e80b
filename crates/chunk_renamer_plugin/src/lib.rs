mod builtin_plugins;
mod compilation;
mod compiler;
mod hooks;
mod plugin;
mod types;
mod utils;

pub use chunk_renamer_common::*;
pub use chunk_renamer_error::{BuildError, BuildResult};

pub use crate::{
  builtin_plugins::{
    javascript_modules::JavascriptModulesPlugin, templated_path::TemplatedPathPlugin,
  },
  compilation::Compilation,
  compiler::Compiler,
  hooks::{
    AssetPathCallback, AssetPathHook, CompilationCallback, CompilationHook, CompilationHooks,
    CompilerHooks, Hook, RenderManifestCallback, RenderManifestHook, Tap,
  },
  plugin::{Plugin, SharedPlugin},
  types::{bundle_output::BundleOutput, SharedOutputOptions},
  utils::normalize_options::normalize_options,
};
