//! emojify - translate text to emoji from the command line
//!
//! Usage:
//!   emojify translate I love pizza
//!   emojify suggest "good mo"
//!   emojify browse night
//!   emojify share "happy cat" --origin https://emoji.example
//!   emojify open "https://emoji.example?text=happy%20cat"
//!   emojify --dict words.json repl

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emoji_translator_core::{
    browse, share_url, Config, Dictionary, Session, ShareParams, Suggester, Translator,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emojify")]
#[command(about = "Translate text into emoji and suggest completions")]
struct Args {
    /// Configuration file (TOML); defaults apply when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dictionary file (.json, .toml or .bin); overrides the configuration
    #[arg(short, long)]
    dict: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate the given text
    Translate {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Suggest completions for the last word of the text
    Suggest { text: String },
    /// List dictionary entries, optionally filtered by a search term
    Browse { term: Option<String> },
    /// Print a share link for the text and its translation
    Share {
        text: String,
        /// Origin the link points at (defaults to the configured one)
        #[arg(long)]
        origin: Option<String>,
    },
    /// Restore a session from a share link
    Open { url: String },
    /// Interactive mode: each line replaces the input
    Repl,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if let Some(path) = args.dict {
        config.dictionary_path = Some(path);
    }

    let dict = config.load_dictionary().with_context(|| match &config.dictionary_path {
        Some(path) => format!("Failed to load dictionary {}", path.display()),
        None => "Failed to build built-in dictionary".to_string(),
    })?;
    tracing::info!(entries = dict.len(), "dictionary ready");

    match args.command.unwrap_or(Command::Repl) {
        Command::Translate { text } => {
            println!("{}", Translator::new(&dict).translate(&text.join(" ")));
        }
        Command::Suggest { text } => {
            let suggester = Suggester::new(&dict).with_limit(config.suggestion_limit);
            for line in suggester.suggest(&text) {
                println!("{}", line);
            }
        }
        Command::Browse { term } => {
            let entries = browse(&dict, term.as_deref().unwrap_or(""));
            if entries.is_empty() {
                println!("(no matching entries)");
            }
            for entry in entries {
                println!("{}\t{}", entry.glyph, entry.key);
            }
        }
        Command::Share { text, origin } => {
            let translation = Translator::new(&dict).translate(&text);
            let origin = origin.unwrap_or_else(|| config.share_origin.clone());
            println!("{}", share_url(&origin, &text, &translation));
        }
        Command::Open { url } => {
            let params = ShareParams::parse(&url);
            if params.seed_text().is_none() {
                anyhow::bail!("Share link has no text to restore: {}", url);
            }
            let session = Session::from_share(&dict, &params)
                .with_suggestion_limit(config.suggestion_limit);
            print_session(&session);
        }
        Command::Repl => repl(&dict, &config)?,
    }

    Ok(())
}

fn repl(dict: &Dictionary, config: &Config) -> Result<()> {
    println!("emojify - {} words and phrases", dict.len());
    println!("Type text and press Enter. :N applies suggestion N, :share prints a link, :q quits.");
    println!();

    let mut session = Session::new(dict).with_suggestion_limit(config.suggestion_limit);
    let stdin = io::stdin();
    let mut out = io::stdout();
    print!("> ");
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let command = line.trim();
        match command {
            ":q" | ":quit" | ":exit" => break,
            ":share" => println!("  {}", session.share_url(&config.share_origin)),
            _ if command.starts_with(':') => {
                let applied = command[1..]
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .is_some_and(|n| session.apply_suggestion(n - 1));
                if applied {
                    print_session(&session);
                } else {
                    println!("  no suggestion {}", &command[1..]);
                }
            }
            _ => {
                session.set_input(line.as_str());
                print_session(&session);
            }
        }
        print!("> ");
        out.flush()?;
    }
    Ok(())
}

fn print_session(session: &Session<'_>) {
    println!("  input:       {}", session.input());
    if session.translation().is_empty() {
        println!("  translation: (nothing yet)");
    } else {
        println!("  translation: {}", session.translation());
    }
    for (i, suggestion) in session.suggestions().iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }
    println!();
}
