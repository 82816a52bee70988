//! Word Scramble - CLI
//!
//! Terminal front-end for the word-scramble engine: interactive play and
//! one-shot batch checking.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{run_check, run_play},
    dictionary::{AcceptAll, DictionaryKind, WordSet},
    engine::{GameConfig, ScoringMode, WordGame},
    output::print_check_report,
    wordlists::{START_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word scramble: make words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist of candidate roots: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary file for spell-checking; omit to accept any constructible word
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Minimum accepted word length
    #[arg(long, global = true, default_value_t = 3)]
    min_length: usize,

    /// Scoring mode: cumulative (default) or last-word
    #[arg(short, long, global = true, default_value = "cumulative")]
    scoring: String,

    /// Seed for deterministic root selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Language tag passed to the dictionary
    #[arg(short, long, global = true, default_value = "en")]
    locale: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive round in the terminal (default)
    Play,

    /// Check words against a fixed root word
    Check {
        /// The root word to check against
        #[arg(short, long)]
        root: String,

        /// Words to validate, in order
        words: Vec<String>,
    },
}

/// Load root candidates based on the -w flag
fn load_candidates(wordlist_mode: &str) -> Result<Vec<String>> {
    let candidates = match wordlist_mode {
        "embedded" => loader::candidates_from_slice(START_WORDS),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to read wordlist '{path}'"))?,
    };

    if candidates.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no usable root words");
    }

    Ok(candidates)
}

/// Build the dictionary based on the -d flag
fn load_dictionary(path: Option<&str>) -> Result<DictionaryKind> {
    match path {
        Some(path) => {
            let words = WordSet::load_from_file(path)
                .with_context(|| format!("Failed to read dictionary '{path}'"))?;
            if words.is_empty() {
                bail!("Dictionary '{path}' contains no words");
            }
            Ok(DictionaryKind::WordList(words))
        }
        None => Ok(DictionaryKind::Permissive(AcceptAll)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        min_word_length: cli.min_length,
        scoring: ScoringMode::from_name(&cli.scoring),
        locale: cli.locale.clone(),
    };

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    if cli.dictionary.is_none() {
        eprintln!("Note: no dictionary file given; any constructible word is accepted (-d <path>)");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let candidates = load_candidates(&cli.wordlist)?;
            let mut game = WordGame::start(config, dictionary, &candidates, cli.seed)?;
            run_play(&mut game, &candidates, cli.seed).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, words } => {
            let report = run_check(config, dictionary, &root, &words)
                .with_context(|| format!("Cannot check against root '{root}'"))?;
            print_check_report(&report);
            Ok(())
        }
    }
}
