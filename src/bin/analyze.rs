//! Answer an analyze request read from a file or stdin.
//!
//! The request is `{"text": "..."}`; the response is written to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use vocab_rank::SimpleNormalizer;
use vocab_rank::analyze::handle_json;

#[derive(Parser, Debug)]
#[command(author, version, about = "Answer a JSON analyze request", long_about = None)]
struct Args {
    /// Set verbosity level
    #[arg(short, long, default_value_t = 0)]
    verbose: i32,

    /// Indent the JSON response
    #[arg(long)]
    pretty: bool,

    /// File of whitespace separated stop words to drop before counting
    #[arg(long = "stop-words")]
    stop_words: Option<PathBuf>,

    /// Request file path (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let body = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            body
        }
    };

    let mut normalizer = SimpleNormalizer::new();
    if let Some(path) = &args.stop_words {
        normalizer = normalizer
            .load_stop_words(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?;
    }

    let response = handle_json(&body, &normalizer)?;
    println!("{}", response.to_json(args.pretty)?);

    if response.is_error() {
        if args.verbose > 0 {
            eprintln!("request carried no text.");
        }
        process::exit(1);
    }
    if args.verbose > 0 {
        eprintln!("analyzed request of {} bytes.", body.len());
    }
    Ok(())
}
