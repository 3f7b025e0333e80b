use xxhash_rust::xxh3::{xxh3_128, Xxh3};

/// Lower-case hex digest of `input`, the form `[chunkhash]` and friends are rendered with.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

/// Digest over several parts in order, without joining them into one buffer first.
pub fn xxhash_hex_of<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
  let mut hasher = Xxh3::new();
  for part in parts {
    hasher.update(part);
  }
  format!("{:032x}", hasher.digest128())
}

#[test]
fn test_xxhash_hex() {
  let digest = xxhash_hex(b"hello");
  assert_eq!(digest.len(), 32);
  assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  assert_eq!(digest, xxhash_hex(b"hello"));
  assert_ne!(digest, xxhash_hex(b"hello!"));
}

#[test]
fn test_xxhash_hex_of_matches_single_buffer() {
  assert_eq!(xxhash_hex_of([b"hel".as_slice(), b"lo".as_slice()]), xxhash_hex(b"hello"));
}
