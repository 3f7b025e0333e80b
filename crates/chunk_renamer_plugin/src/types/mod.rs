pub mod bundle_output;

use std::sync::Arc;

use chunk_renamer_common::NormalizedOutputOptions;

pub type SharedOutputOptions = Arc<NormalizedOutputOptions>;
