use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rayon::ThreadPoolBuilder;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use vocab_rank::input::{InputFormat, load_text};
use vocab_rank::report::{write_coverage, write_json, write_tsv};
use vocab_rank::{FrequencyTable, Normalizer, SimpleNormalizer, rank};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank the vocabulary of a text by frequency and comprehension", long_about = None)]
struct Args {
    /// Set verbosity level
    #[arg(short, long, default_value_t = 1)]
    verbose: i32,

    /// Print only the N most frequent words; all words still count
    #[arg(short, long)]
    top: Option<usize>,

    /// Print a JSON array instead of tab separated lines
    #[arg(long)]
    json: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Report how many words are needed to understand this percentage of the text (repeatable)
    #[arg(short, long = "coverage")]
    coverage: Vec<f64>,

    /// File of whitespace separated stop words to drop before counting
    #[arg(long = "stop-words")]
    stop_words: Option<PathBuf>,

    /// Drop words shorter than this many characters
    #[arg(long = "min-len", default_value_t = 1)]
    min_len: usize,

    /// Count in parallel on this many threads; 0 counts on the calling thread
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Tokens per parallel counting task
    #[arg(long = "chunk-size", default_value_t = 100_000)]
    chunk_size: usize,

    /// Read FILE as an EPUB book whatever its extension
    #[arg(long)]
    epub: bool,

    /// Input text or .epub file path (if not provided, reads text from stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

struct Config {
    verbose: i32,
    top: Option<usize>,
    json: bool,
    pretty: bool,
    coverage: Vec<f64>,
    threads: usize,
    chunk_size: usize,
    input: Option<PathBuf>,
    epub: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut normalizer = SimpleNormalizer::new().with_min_len(args.min_len);
    if let Some(path) = &args.stop_words {
        normalizer = normalizer
            .load_stop_words(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?;
    }

    let config = Config {
        verbose: args.verbose,
        top: args.top,
        json: args.json,
        pretty: args.pretty,
        coverage: args.coverage,
        threads: args.threads,
        chunk_size: args.chunk_size,
        input: args.input,
        epub: args.epub,
    };

    if config.verbose > 1 && normalizer.stop_word_count() > 0 {
        eprintln!("loaded {} stop words.", normalizer.stop_word_count());
    }

    run(&config, &normalizer)
}

fn run(config: &Config, normalizer: &dyn Normalizer) -> Result<()> {
    let text = read_text(config)?;
    if config.verbose > 1 {
        eprintln!("read {} bytes.", text.len());
    }

    let tokens = normalizer.normalize(&text);
    let table = count_tokens(&tokens, config)?;
    if config.verbose > 1 {
        eprintln!(
            "counted {} tokens, {} distinct words.",
            table.total_tokens(),
            table.distinct()
        );
    }

    let entries = rank(&table);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.json {
        write_json(&mut out, &entries, config.top, config.pretty)?;
    } else {
        write_tsv(&mut out, &entries, config.top)?;
    }
    out.flush()?;

    if !config.coverage.is_empty() {
        write_coverage(&mut io::stderr(), &entries, &config.coverage)?;
    }

    if config.verbose > 0 {
        let time_str = Local::now().format("%x - %I:%M.%S%p");
        eprintln!(
            "{time_str}, tokens: {}, vocabulary: {}",
            table.total_tokens(),
            entries.len()
        );
    }

    Ok(())
}

fn read_text(config: &Config) -> Result<String> {
    let Some(path) = &config.input else {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("input is not valid UTF-8 text")?;
        return Ok(content);
    };

    let format = if config.epub {
        InputFormat::Epub
    } else {
        InputFormat::from_path(path)
    };
    if config.verbose > 1 {
        eprintln!("reading {} as {format:?}.", path.display());
    }
    let text = load_text(path, format).with_context(|| format!("reading {}", path.display()))?;
    Ok(text)
}

fn count_tokens(tokens: &[String], config: &Config) -> Result<FrequencyTable> {
    if config.threads == 0 {
        return Ok(FrequencyTable::from_tokens(tokens));
    }
    if config.verbose > 1 {
        eprintln!(
            "counting on {} threads, {} tokens per task.",
            config.threads, config.chunk_size
        );
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let table = pool.install(|| FrequencyTable::from_tokens_par(tokens, config.chunk_size))?;
    Ok(table)
}
