//! text-tokenizer: count and rank the words of a text or web page.

mod fetch;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use text_tokenizer::{Language, Tokenizer, TokenizerConfig};

#[derive(Parser)]
#[command(name = "text-tokenizer")]
#[command(about = "Split text or HTML into ranked, stop-word filtered tokens")]
struct Cli {
    /// Text to tokenize.
    #[arg(long, short, conflicts_with_all = ["file", "url"])]
    text: Option<String>,

    /// Read input from a file (stdin when no input flag is given).
    #[arg(long, short, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Fetch a page and tokenize its visible text.
    #[arg(long, short)]
    url: Option<String>,

    /// Treat text, file or stdin input as HTML.
    #[arg(long)]
    html: bool,

    /// JSON configuration file; flags below override it.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Shortest token length kept (inclusive).
    #[arg(long)]
    min_length: Option<usize>,

    /// Longest token length kept (inclusive).
    #[arg(long)]
    max_length: Option<usize>,

    /// Extra separator character (repeatable).
    #[arg(long = "separator", short = 's')]
    separators: Vec<char>,

    /// Black-list a word for a language, as LANG:WORD (repeatable).
    #[arg(long = "blacklist", short = 'b', value_parser = parse_list_entry)]
    blacklist: Vec<(Language, String)>,

    /// Drop tokens made only of digits.
    #[arg(long)]
    ignore_digits: bool,

    /// Only print the N most frequent tokens.
    #[arg(long, short = 'n')]
    top: Option<usize>,

    /// Print tokens as a JSON array.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TokenizerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TokenizerConfig::default(),
    };
    if let Some(min) = cli.min_length {
        config.min_length = min;
    }
    if let Some(max) = cli.max_length {
        config.max_length = max;
    }
    config.ignore_digits |= cli.ignore_digits;
    config.separators.extend(cli.separators.iter().copied());
    for (language, word) in &cli.blacklist {
        config
            .blacklist
            .entry(*language)
            .or_default()
            .push(word.clone());
    }
    debug!(?config, "effective configuration");

    let mut tokenizer = Tokenizer::from_config(&config)?;
    load_input(&cli, &mut tokenizer)?;
    tokenizer.tokenize();

    let mut out = io::stdout().lock();
    match (cli.json, cli.top) {
        (true, Some(n)) => serde_json::to_writer_pretty(&mut out, tokenizer.top_tokens(n))?,
        (true, None) => serde_json::to_writer_pretty(&mut out, tokenizer.tokens())?,
        (false, Some(n)) => tokenizer.write_top_tokens(&mut out, n)?,
        (false, None) => tokenizer.write_tokens(&mut out)?,
    }
    writeln!(out)?;
    Ok(())
}

fn load_input(cli: &Cli, tokenizer: &mut Tokenizer) -> anyhow::Result<()> {
    if let Some(url) = &cli.url {
        let markup = fetch::fetch_html(url)?;
        tokenizer.load_html(&markup)?;
        return Ok(());
    }

    let input = match (&cli.text, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if cli.html {
        tokenizer.load_html(&input)?;
    } else {
        tokenizer.load_text(&input);
    }
    Ok(())
}

fn parse_list_entry(raw: &str) -> Result<(Language, String), String> {
    let (lang, word) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected LANG:WORD, got {raw:?}"))?;
    let language: Language = lang.parse().map_err(|e| format!("{e}"))?;
    if language.is_auto() {
        return Err("black-list words need a concrete language".to_string());
    }
    Ok((language, word.to_string()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
