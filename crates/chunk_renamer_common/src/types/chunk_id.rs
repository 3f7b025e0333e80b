use std::fmt::Display;

use arcstr::ArcStr;
use serde::Deserialize;

/// Chunk ids are numeric unless the host was told to use named ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ChunkId {
  Number(u32),
  Name(ArcStr),
}

impl Display for ChunkId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Number(id) => write!(f, "{id}"),
      Self::Name(id) => f.write_str(id),
    }
  }
}

impl From<u32> for ChunkId {
  fn from(value: u32) -> Self {
    Self::Number(value)
  }
}

impl From<&str> for ChunkId {
  fn from(value: &str) -> Self {
    Self::Name(value.into())
  }
}

#[test]
fn test_deserialize_numeric_and_named_ids() {
  let ids: Vec<ChunkId> = serde_json::from_str(r#"[3, "vendors"]"#).unwrap();
  assert_eq!(ids, vec![ChunkId::Number(3), ChunkId::from("vendors")]);
  assert_eq!(ids[0].to_string(), "3");
  assert_eq!(ids[1].to_string(), "vendors");
}
