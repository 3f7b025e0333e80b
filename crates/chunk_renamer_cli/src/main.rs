mod args;
mod types;

use std::{process::ExitCode, sync::Arc, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chunk_renamer::{
  BuildResult, BundleOutput, ChunkRenamerOptions, ChunkRenamerPlugin, Compiler, OutputAsset,
  OutputOptions,
};

use crate::types::chunk_descriptor::load_chunks;

/// Run chunks through a compiler with the chunk renamer applied and print the file names.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_env("CHUNK_RENAMER_LOG")
    .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_output_assets(outputs: Vec<OutputAsset>) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content.len() as f64 / 1024.0);
    let chunk = output
      .chunk_name
      .map_or_else(|| format!("#{}", output.chunk_idx.index()), |name| name.to_string());

    right = right.max(size.len());
    left = left.max(output.filename.len());

    assets.push((output.filename, chunk, size));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, chunk, size) in assets {
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint("chunk "),
      chunk,
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    );
  }
}

fn run(args: &Commands) -> BuildResult<BundleOutput> {
  let options = match &args.input.config {
    Some(path) => ChunkRenamerOptions::from_path(path)?,
    None => ChunkRenamerOptions::default(),
  };
  let chunks = load_chunks(&args.input.chunks)?;

  let compiler = Compiler::new(
    OutputOptions {
      filename: args.output.filename.clone(),
      chunk_filename: args.output.chunk_filename.clone(),
      hash_digest_length: args.output.hash_length,
    },
    vec![Arc::new(ChunkRenamerPlugin::new(options))],
  )?;

  compiler.compile(chunks)
}

fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.enhance.verbose);

  let start = Instant::now();
  match run(&args) {
    Ok(output) => {
      if !args.enhance.silent {
        if !output.assets.is_empty() {
          print_output_assets(output.assets);
        }

        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
