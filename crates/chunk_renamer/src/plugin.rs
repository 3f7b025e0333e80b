use std::{borrow::Cow, sync::Arc};

use chunk_renamer_plugin::{Chunk, Compiler, PathData, PathTemplate, Plugin, RenderManifestContext};

use crate::{lc_name::replace_lc_name, ChunkRenamerOptions};

const PLUGIN_NAME: &str = "ChunkRenamerPlugin";

#[derive(Debug, Clone, Default)]
pub struct ChunkRenamerPlugin {
  options: Arc<ChunkRenamerOptions>,
}

impl ChunkRenamerPlugin {
  pub fn new(options: ChunkRenamerOptions) -> Self {
    Self { options: Arc::new(options) }
  }
}

impl Plugin for ChunkRenamerPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(PLUGIN_NAME)
  }

  fn apply(&self, compiler: &mut Compiler) -> anyhow::Result<()> {
    let options = Arc::clone(&self.options);
    compiler.hooks.compilation.tap(PLUGIN_NAME, move |compilation| {
      let asset_path_options = Arc::clone(&options);
      compilation.hooks.asset_path.tap(PLUGIN_NAME, move |path, data| {
        resolve_asset_path(&asset_path_options, path, data).map(PathTemplate::Static)
      });

      let render_manifest_options = Arc::clone(&options);
      compilation.hooks.render_manifest.tap(PLUGIN_NAME, move |_manifest, ctx| {
        adjust_render_manifest(&render_manifest_options, ctx);
        Ok(())
      });
      Ok(())
    });
    Ok(())
  }
}

/// Computes the asset path of the chunk in `data`.
///
/// The producer form of `path` is always called, even when an override for the chunk discards
/// its result. Placeholders other than `[lc-name]` are left to the host.
pub fn resolve_asset_path(
  options: &ChunkRenamerOptions,
  path: PathTemplate,
  data: &PathData<'_>,
) -> anyhow::Result<String> {
  let chunk_name = data.chunk.and_then(Chunk::name_or_id);
  let mut path = path.resolve(data);

  if let Some(chunk_name) = chunk_name.as_deref() {
    if let Some(override_path) = options.override_for(chunk_name) {
      let override_path = override_path?;
      tracing::debug!(
        chunk = chunk_name,
        from = %path,
        to = override_path,
        "Overriding asset path"
      );
      path = override_path.to_string();
    }
  }

  Ok(replace_lc_name(&path, chunk_name.as_deref())?.into_owned())
}

/// Points initial chunks that hold an entry module back at the plain `filename` template.
pub fn adjust_render_manifest(options: &ChunkRenamerOptions, ctx: &mut RenderManifestContext<'_>) {
  let chunk = &mut *ctx.chunk;
  if options.initial_chunks_with_entry()
    && chunk.number_of_entry_modules() > 0
    && chunk.is_only_initial()
  {
    tracing::debug!(
      chunk = %chunk.name_or_id().unwrap_or_default(),
      filename = ctx.output_options.filename.template(),
      "Using the default filename template for initial chunk with entry"
    );
    chunk.filename_template = Some(ctx.output_options.filename.clone());
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use chunk_renamer_plugin::{
    ChunkGroupFlags, ChunkId, ChunkIdx, FilenameTemplate, ModuleIdx, NormalizedOutputOptions,
    OutputOptions,
  };
  use serde_json::json;

  use super::*;

  fn chunk(name: Option<&str>, id: Option<u32>, groups: ChunkGroupFlags) -> Chunk {
    Chunk::new(id.map(ChunkId::Number), name.map(Into::into), groups)
  }

  fn entry_chunk(name: &str, groups: ChunkGroupFlags) -> Chunk {
    let mut chunk = chunk(Some(name), Some(0), groups);
    chunk.entry_modules.push(ModuleIdx::from_usize(0));
    chunk
  }

  fn console_options() -> ChunkRenamerOptions {
    serde_json::from_value(json!({ "Console": "console.js", "initialChunksWithEntry": true }))
      .unwrap()
  }

  fn output_options() -> NormalizedOutputOptions {
    NormalizedOutputOptions {
      filename: "[name].js".into(),
      chunk_filename: "[name].[chunkhash].js".into(),
      hash_digest_length: 8,
    }
  }

  fn resolve(
    options: &ChunkRenamerOptions,
    path: impl Into<PathTemplate>,
    chunk: &Chunk,
  ) -> String {
    resolve_asset_path(options, path.into(), &PathData::for_chunk(chunk)).unwrap()
  }

  fn render_manifest(options: &ChunkRenamerOptions, chunk: &mut Chunk) {
    let output_options = output_options();
    let mut ctx = RenderManifestContext {
      chunk_idx: ChunkIdx::from_usize(0),
      chunk,
      output_options: &output_options,
    };
    adjust_render_manifest(options, &mut ctx);
  }

  #[test]
  fn path_without_placeholder_is_unchanged() {
    let options = ChunkRenamerOptions::new();
    let chunk = chunk(Some("Main"), Some(1), ChunkGroupFlags::INITIAL);

    for path in ["[name].js", "js/[id].[chunkhash].js", "static/app.js", ""] {
      assert_eq!(resolve(&options, path, &chunk), path);
    }
  }

  #[test]
  fn override_replaces_the_whole_path() {
    let options = ChunkRenamerOptions::new().with_override("vendor", "vendor.js");
    let chunk = chunk(Some("vendor"), Some(2), ChunkGroupFlags::INITIAL);

    assert_eq!(resolve(&options, "[name].[chunkhash].js", &chunk), "vendor.js");
  }

  #[test]
  fn override_can_contain_the_placeholder() {
    let options =
      ChunkRenamerOptions::new().with_override("Console", "lib/[lc-name].[LC-NAME].js");
    let chunk = chunk(Some("Console"), None, ChunkGroupFlags::INITIAL);

    assert_eq!(resolve(&options, "[name].js", &chunk), "lib/console.console.js");
  }

  #[test]
  fn placeholder_is_replaced_case_insensitively() {
    let options = ChunkRenamerOptions::new();
    let chunk = chunk(Some("Console"), None, ChunkGroupFlags::INITIAL);

    assert_eq!(resolve(&options, "[LC-Name]/[lc-name]", &chunk), "console/console");
  }

  #[test]
  fn chunk_id_is_used_without_a_name() {
    let options = ChunkRenamerOptions::new().with_override("7", "seven-[lc-name].js");
    let chunk = chunk(None, Some(7), ChunkGroupFlags::ASYNC);
    assert_eq!(resolve(&options, "[id].js", &chunk), "seven-7.js");

    let chunk = Chunk::new(Some(ChunkId::from("Lazy-Page")), None, ChunkGroupFlags::ASYNC);
    assert_eq!(resolve(&ChunkRenamerOptions::new(), "[lc-name].js", &chunk), "lazy-page.js");
  }

  #[test]
  fn producer_output_is_substituted() {
    let options = ChunkRenamerOptions::new();
    let chunk = chunk(Some("Console"), None, ChunkGroupFlags::INITIAL);
    let producer = PathTemplate::producer(|data| {
      let initial = data.chunk.is_some_and(Chunk::can_be_initial);
      if initial { "entry/[lc-name].js".to_string() } else { "lazy/[lc-name].js".to_string() }
    });

    assert_eq!(resolve(&options, producer, &chunk), "entry/console.js");
  }

  #[test]
  fn producer_is_called_even_when_overridden() {
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let producer_calls = Arc::clone(&calls);
    let producer = PathTemplate::producer(move |_data| {
      producer_calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
      "ignored.js".to_string()
    });
    let chunk = chunk(Some("Console"), None, ChunkGroupFlags::INITIAL);

    assert_eq!(resolve(&console_options(), producer, &chunk), "console.js");
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
  }

  #[test]
  fn missing_chunk_name_only_fails_with_placeholder() {
    let options = ChunkRenamerOptions::new();
    let chunk = chunk(None, None, ChunkGroupFlags::ASYNC);

    assert_eq!(resolve(&options, "[name].js", &chunk), "[name].js");
    let data = PathData::for_chunk(&chunk);
    assert!(resolve_asset_path(&options, "[lc-name].js".into(), &data).is_err());
    assert!(resolve_asset_path(&options, "[lc-name].js".into(), &PathData::default()).is_err());
  }

  #[test]
  fn invalid_override_fails_for_that_chunk_only() {
    let options = ChunkRenamerOptions::from_json_str(r#"{ "vendor": false }"#).unwrap();

    let other = chunk(Some("main"), None, ChunkGroupFlags::INITIAL);
    assert_eq!(resolve(&options, "[name].js", &other), "[name].js");

    let vendor = chunk(Some("vendor"), None, ChunkGroupFlags::INITIAL);
    let error =
      resolve_asset_path(&options, "[name].js".into(), &PathData::for_chunk(&vendor)).unwrap_err();
    assert_eq!(
      error.to_string(),
      "The override for chunk `vendor` must be a filename template string, got `false`"
    );
  }

  #[test]
  fn render_manifest_sets_default_filename_for_initial_entry_chunk() {
    let mut chunk = entry_chunk("Console", ChunkGroupFlags::INITIAL);
    chunk.filename_template = Some("[name].[contenthash].js".into());

    render_manifest(&console_options(), &mut chunk);

    assert_eq!(chunk.filename_template, Some(output_options().filename));
  }

  #[test]
  fn render_manifest_requires_every_condition() {
    let enabled = console_options();
    let disabled = ChunkRenamerOptions::new().with_override("Console", "console.js");

    let cases: [(&ChunkRenamerOptions, Chunk); 4] = [
      (&disabled, entry_chunk("Console", ChunkGroupFlags::INITIAL)),
      (&enabled, chunk(Some("Console"), Some(0), ChunkGroupFlags::INITIAL)),
      (&enabled, entry_chunk("Console", ChunkGroupFlags::INITIAL | ChunkGroupFlags::ASYNC)),
      (&enabled, entry_chunk("Console", ChunkGroupFlags::ASYNC)),
    ];

    for (options, mut chunk) in cases {
      chunk.filename_template = Some("[name].[contenthash].js".into());
      render_manifest(options, &mut chunk);
      let template = chunk.filename_template.as_ref().map(FilenameTemplate::template);
      assert_eq!(template, Some("[name].[contenthash].js"));
    }
  }

  #[test]
  fn console_scenario_through_compiler() {
    let plugin = ChunkRenamerPlugin::new(console_options());
    let options = OutputOptions {
      filename: Some("[lc-name].entry.js".to_string()),
      chunk_filename: Some("[lc-name].[chunkhash].js".to_string()),
      ..Default::default()
    };
    let compiler = Compiler::new(options, vec![Arc::new(plugin)]).unwrap();
    let chunks = || {
      let mut console = entry_chunk("Console", ChunkGroupFlags::INITIAL);
      console.filename_template = Some("[name]-[contenthash].js".into());
      let mut main = entry_chunk("Main", ChunkGroupFlags::INITIAL);
      main.id = Some(ChunkId::Number(2));
      main.filename_template = Some("[name]-[contenthash].js".into());
      let mut lazy = chunk(Some("LazyWidget"), Some(1), ChunkGroupFlags::ASYNC);
      lazy.source = "export default 1".to_string();
      [console, main, lazy]
    };

    let mut compilation = compiler.new_compilation(chunks()).unwrap();
    let manifest = compilation.get_render_manifest(ChunkIdx::from_usize(0)).unwrap();
    assert_eq!(manifest[0].filename_template.template(), "[lc-name].entry.js");

    let output = compiler.compile(chunks()).unwrap();

    assert_eq!(output.assets[0].filename, "console.js");
    assert_eq!(output.assets[1].filename, "main.entry.js");
    let lazy = &output.assets[2].filename;
    let hash = lazy
      .strip_prefix("lazywidget.")
      .and_then(|rest| rest.strip_suffix(".js"))
      .unwrap_or_else(|| panic!("unexpected filename {lazy}"));
    assert_eq!(hash.len(), 8);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()), "{hash}");
  }

  #[test]
  fn initial_entry_chunk_drops_the_hash_through_compiler() {
    let plugin = ChunkRenamerPlugin::new(
      ChunkRenamerOptions::new().with_initial_chunks_with_entry(true),
    );
    let options = OutputOptions {
      filename: Some("[lc-name].js".to_string()),
      ..Default::default()
    };
    let compiler = Compiler::new(options, vec![Arc::new(plugin)]).unwrap();

    let mut main = entry_chunk("Main", ChunkGroupFlags::INITIAL);
    main.filename_template = Some("[name]-[chunkhash].js".into());

    let output = compiler.compile([main]).unwrap();
    assert_eq!(output.assets[0].filename, "main.js");
  }

  #[test]
  fn faults_surface_as_build_errors_through_compiler() {
    let plugin = ChunkRenamerPlugin::new(ChunkRenamerOptions::new());
    let options = OutputOptions {
      chunk_filename: Some("[lc-name].js".to_string()),
      ..Default::default()
    };
    let compiler = Compiler::new(options, vec![Arc::new(plugin)]).unwrap();

    let errors = compiler.compile([chunk(None, None, ChunkGroupFlags::ASYNC)]).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
      format!("{:#}", errors[0]),
      "Plugin `ChunkRenamerPlugin` failed in the `assetPath` hook: Cannot replace `[lc-name]` in \
       `[lc-name].js`: the chunk has neither a name nor an id"
    );
  }
}
