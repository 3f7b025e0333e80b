use arcstr::ArcStr;

use crate::ChunkIdx;

#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub chunk_idx: ChunkIdx,
  pub chunk_name: Option<ArcStr>,
  pub content: String,
}
