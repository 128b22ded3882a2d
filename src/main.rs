use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use autocomplete::dictionary::dictionary::{Dictionary, FileFormat};
use autocomplete::repl::{OutputFormat, Session, write_results};


/// Load a word-frequency file and complete prefixes or `_` patterns from it.
#[derive(StructOpt)]
struct Cli {
    /// The dictionary file, one `word count` entry per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Entries are `count word` instead of `word count`
    #[structopt(long)]
    freq_first: bool,
    /// Column separator (any whitespace by default)
    #[structopt(long)]
    delimiter: Option<char>,
    /// Lowercase words and drop unsupported characters while loading
    #[structopt(long)]
    normalize: bool,
    /// Print each result set as a JSON array with frequencies
    #[structopt(long)]
    json: bool,
    /// Answer a single query and exit instead of prompting
    #[structopt(short, long)]
    query: Option<String>,
    /// Number of completions for --query
    #[structopt(short = "n", long, default_value = "10")]
    count: usize,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .freq_first(args.freq_first)
        .normalize(args.normalize)
        .build();
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Lines };

    println!("Reading file: {}", args.path.display());
    let dictionary = Dictionary::from_file(&args.path, &format)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let stdout = io::stdout();
    match args.query {
        Some(query) => {
            let mut out = BufWriter::new(stdout.lock());
            write_results(&mut out, &dictionary.complete(&query, args.count), output_format)?;
            out.flush()?;
        }
        None => {
            let stdin = io::stdin();
            Session::new(&dictionary, stdin.lock(), stdout.lock(), output_format).run()?;
        }
    }
    Ok(())
}
