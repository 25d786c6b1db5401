//! Emoticode command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Replace shortcodes using the built-in dataset
//! emoticode replace "Hi :smile: :tada:"
//!
//! # Complete the shortcode before the cursor, favouring frequent picks
//! emoticode suggest "lol :jo" --weights joy=10,joy_cat=2
//!
//! # Use a custom dataset and re-encode it as CBOR
//! emoticode --dataset emojis.json convert emojis.cbor
//! ```

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use emoticode_core::{EmojiResolver, EmojiTrie, FrequencyRanker, Lookup};
use emoticode_dataset::{
    DatasetError, EmojiRecord, Format, LoadOptions, LoadReport, build_trie, default_records,
    read_records,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Emoji shortcode resolver
#[derive(Parser, Debug)]
#[command(name = "emoticode")]
#[command(about = "Replace and complete :emoji: shortcodes")]
#[command(version)]
struct Args {
    /// Dataset file (.json or .cbor). The built-in dataset is used if absent.
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace every known `:shortcode:` in TEXT
    Replace {
        /// Text to rewrite
        text: String,
    },

    /// Suggest completions for the shortcode being typed in TEXT
    Suggest {
        /// Text typed so far
        text: String,

        /// Cursor position in chars (defaults to the end of TEXT)
        #[arg(short, long)]
        cursor: Option<usize>,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Usage weights as name=weight pairs, comma separated
        #[arg(short, long, value_parser = parse_weight, value_delimiter = ',')]
        weights: Vec<(String, u32)>,
    },

    /// Print the glyph registered for NAME
    Lookup {
        /// Shortcode without colons
        name: String,
    },

    /// Print dataset and dictionary statistics
    Stats,

    /// Write the dataset to OUT, encoded by its extension
    Convert {
        /// Output path (.json or .cbor)
        out: PathBuf,
    },
}

/// Parse one `name=weight` pair.
fn parse_weight(pair: &str) -> Result<(String, u32), String> {
    let (name, weight) =
        pair.split_once('=').ok_or_else(|| format!("expected name=weight, got {pair:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in {pair:?}"));
    }
    let weight = weight.trim().parse().map_err(|e| format!("bad weight in {pair:?}: {e}"))?;
    Ok((name.to_owned(), weight))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    run(args, &mut io::stdout().lock())
}

/// Execute one subcommand, writing its output to `out`.
fn run(args: Args, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let records = match &args.dataset {
        Some(path) => read_records(path)?,
        None => default_records()?,
    };

    match args.command {
        Command::Replace { text } => {
            let (resolver, _) = load_resolver(&records)?;
            writeln!(out, "{}", resolver.replace_shortcodes(&text))?;
        },
        Command::Suggest { text, cursor, limit, weights } => {
            let (resolver, _) = load_resolver(&records)?;
            let cursor = cursor.unwrap_or_else(|| text.chars().count());
            let limit = limit.unwrap_or(resolver.config().default_limit);
            let ranker: FrequencyRanker = weights.into_iter().collect();

            for suggestion in resolver.suggest_ranked(&text, cursor, limit, &ranker) {
                writeln!(out, "{}\t:{}:", suggestion.code, suggestion.name)?;
            }
        },
        Command::Lookup { name } => {
            let (resolver, _) = load_resolver(&records)?;
            match resolver.trie().is_emoji(&name) {
                Lookup::Found { code } => writeln!(out, "{code}")?,
                Lookup::NotFound => return Err(format!("no emoji named {name:?}").into()),
            }
        },
        Command::Stats => {
            let (resolver, report) = load_resolver(&records)?;
            write_stats(out, resolver.trie(), &report)?;
        },
        Command::Convert { out: path } => {
            let bytes = Format::from_path(&path)?.encode(&records)?;
            std::fs::write(&path, &bytes)?;
            tracing::info!(path = %path.display(), records = records.len(), "dataset written");
        },
    }

    Ok(())
}

fn load_resolver(records: &[EmojiRecord]) -> Result<(EmojiResolver, LoadReport), DatasetError> {
    let (trie, report) = build_trie(records, &LoadOptions::default())?;
    Ok((EmojiResolver::new(Arc::new(trie)), report))
}

fn write_stats(out: &mut impl Write, trie: &EmojiTrie, report: &LoadReport) -> io::Result<()> {
    writeln!(out, "records            {}", report.records)?;
    writeln!(out, "shortcodes         {}", report.names)?;
    writeln!(out, "synonyms           {}", report.synonyms)?;
    writeln!(out, "skipped records    {}", report.skipped_records)?;
    writeln!(out, "skipped synonyms   {}", report.skipped_synonyms)?;
    writeln!(out, "shadowed synonyms  {}", report.shadowed_synonyms)?;
    writeln!(out, "dictionary entries {}", trie.len())?;
    writeln!(out, "trie nodes         {}", trie.node_count())
}
