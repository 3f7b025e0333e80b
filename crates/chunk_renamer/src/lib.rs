//! A plugin that lets individual chunks pick their own output filename.
//!
//! Two things are provided on top of the host's placeholders:
//!
//! - `[lc-name]` (any casing) is replaced with the lower-cased chunk name, falling back to the
//!   chunk id. Exporting a module as `Console` can still produce `console.js`.
//! - Per-chunk overrides replace the asset path of a named chunk entirely, e.g. to drop
//!   `[chunkhash]` from `vendor.js` only.
//!
//! With `initialChunksWithEntry` set, initial chunks holding an entry module are emitted with the
//! plain `filename` template even when a more specific template was assigned to them.

mod lc_name;
mod options;
mod plugin;

pub use chunk_renamer_plugin::*;

pub use crate::{
  lc_name::replace_lc_name,
  options::{ChunkRenamerOptions, INITIAL_CHUNKS_WITH_ENTRY},
  plugin::{adjust_render_manifest, resolve_asset_path, ChunkRenamerPlugin},
};
