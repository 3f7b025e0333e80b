use chunk_renamer_common::OutputAsset;

#[derive(Debug, Default)]
pub struct BundleOutput {
  pub assets: Vec<OutputAsset>,
}
