//! Command-line front end for the Huffman codec.
//!
//! ```text
//! cargo run --example huffman_cli -- -c notes.txt            # writes compressed.huf
//! cargo run --example huffman_cli -- -x compressed.huf       # writes decompressed.txt
//! cargo run --example huffman_cli -- -c notes.txt -o out.huf --log-level debug
//! ```

use clap::{ArgGroup, Parser};
use huffpack::file::{
    DEFAULT_COMPRESSED_NAME, DEFAULT_DECOMPRESSED_NAME, FileReport, compress_file,
    decompress_file,
};
use huffpack::utils::log::init_subscriber;
use huffpack::{Codec, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "huffman_cli")]
#[command(version = VERSION, disable_version_flag = true)]
#[command(about = "Huffman file compressor", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "extract"])))]
struct Args {
    /// Compress FILE
    #[arg(short = 'c', long, value_name = "FILE")]
    compress: Option<PathBuf>,

    /// Decompress FILE
    #[arg(short = 'x', long, value_name = "FILE")]
    extract: Option<PathBuf>,

    /// Output path (defaults to compressed.huf / decompressed.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),
}

fn print_report(action: &str, report: &FileReport) {
    println!(
        "{}: {} -> {} bytes (ratio {:.3})",
        action,
        report.input_len,
        report.output_len,
        report.ratio()
    );
}

fn run(args: Args) -> huffpack::Result<()> {
    init_subscriber(args.log_level)?;
    let codec = Codec::new();

    if let Some(input) = args.compress {
        let output = args
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPRESSED_NAME));
        let report = compress_file(&codec, &input, &output)?;
        println!("The file is {}", report.kind);
        print_report("compressed", &report);
    } else if let Some(input) = args.extract {
        let output = args
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECOMPRESSED_NAME));
        let report = decompress_file(&codec, &input, &output)?;
        print_report("decompressed", &report);
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
