use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Keeps insertion order, so configuration is reported back the way it was written.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
