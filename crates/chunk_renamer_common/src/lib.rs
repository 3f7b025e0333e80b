mod chunk;
mod output_options;
mod types;

pub use crate::{
  chunk::{chunk_table::ChunkTable, Chunk},
  output_options::{
    filename_template::{FilenameTemplate, TemplateReplacements},
    normalized_output_options::NormalizedOutputOptions,
    OutputOptions,
  },
  types::{
    chunk_group_flags::ChunkGroupFlags,
    chunk_id::ChunkId,
    output_asset::OutputAsset,
    path_data::PathData,
    path_template::{PathProducer, PathTemplate},
    raw_idx::{ChunkIdx, ModuleIdx},
    render_manifest::{RenderManifestContext, RenderManifestEntry},
  },
};
