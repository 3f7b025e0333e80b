use bitflags::bitflags;

bitflags! {
  /// Kinds of chunk groups a chunk is a member of.
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  pub struct ChunkGroupFlags: u8 {
    /// Loaded up front by an entry point.
    const INITIAL = 1;
    /// Loaded on demand, e.g. through a dynamic `import()`.
    const ASYNC = 1 << 1;
  }
}
