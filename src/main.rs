use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mojitok::corpus::{parse_json_lines, parse_lines, SentenceSource};
use mojitok::engine::{load_corpus, WordGeneratorConfig};
use mojitok::WordGenerator;

#[derive(Parser, Debug)]
#[command(name = "mojitok")]
#[command(about = "Tokenize a corpus of social media sentences, one sentence per line")]
#[command(long_about = None)]
struct Cli {
    /// Corpus file; stdin when omitted
    path: Option<PathBuf>,

    /// Escape non-ASCII words instead of dropping their sentence
    #[arg(long, env = "MOJITOK_ALLOW_UNICODE")]
    allow_unicode: bool,

    /// Shorten character floods and map numbers, mentions and URLs to special tokens
    #[arg(long, env = "MOJITOK_NORMALIZE")]
    normalize: bool,

    /// Corpus line format
    #[arg(long, short = 'f', env = "MOJITOK_FORMAT", default_value = "text", value_enum)]
    format: InputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// One sentence per line
    Text,
    /// One JSON value per line: a string or an array of bytes
    #[value(name = "jsonl")]
    JsonLines,
}

impl Cli {
    fn generator_config(&self) -> WordGeneratorConfig {
        WordGeneratorConfig {
            allow_unicode_text: self.allow_unicode,
            normalize_words: self.normalize,
            ..WordGeneratorConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.generator_config();

    let content = match &cli.path {
        Some(path) => load_corpus(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match cli.format {
        InputFormat::Text => run(parse_lines(&content), config),
        InputFormat::JsonLines => run(parse_json_lines(&content)?, config),
    }
}

fn run<T: SentenceSource>(
    sentences: Vec<T>,
    config: WordGeneratorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = WordGenerator::with_config(sentences, config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut pass = generator.iter();
    for item in pass.by_ref() {
        let (words, _) = item?;
        writeln!(out, "{}", words.join(" "))?;
    }
    out.flush()?;

    let stats = pass.stats();
    info!(
        total = stats.total,
        valid = stats.valid,
        unicode_filtered = stats.unicode_filtered,
        "done"
    );
    Ok(())
}
