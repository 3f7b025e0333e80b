use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// JSON file with the chunk renamer options
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// JSON file with the chunks to name
  #[clap(long)]
  pub chunks: PathBuf,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long)]
  pub filename: Option<String>,

  #[clap(long)]
  pub chunk_filename: Option<String>,

  #[clap(long)]
  pub hash_length: Option<usize>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  /// Log every renaming decision
  #[clap(long, short = 'v')]
  pub verbose: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
