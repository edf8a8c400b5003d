//! Validate a dictionary source file and compile it for fast loading.
//!
//! Usage:
//!   cargo run -p convert_dict -- --input words.toml --output data/words.bin
//!   cargo run -p convert_dict -- --input words.json --list
//!   cargo run -p convert_dict -- --builtin --output data/builtin.json

use anyhow::{bail, Context, Result};
use clap::Parser;
use emoji_translator_core::Dictionary;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "convert_dict")]
#[command(about = "Validate and compile an emoji dictionary (JSON/TOML -> bincode or JSON)")]
struct Args {
    /// Source dictionary (.json, .toml or .bin)
    #[arg(short, long, conflicts_with = "builtin", required_unless_present = "builtin")]
    input: Option<PathBuf>,

    /// Use the built-in table as the source
    #[arg(long)]
    builtin: bool,

    /// Output file; `.json` writes JSON, `.bin` or `.bincode` writes bincode
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every entry (glyph, key) in declaration order
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Bincode,
}

/// Pick the output format from the extension; only formats `Dictionary::load`
/// reads back are accepted.
fn output_format(path: &Path) -> Result<OutputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(OutputFormat::Json),
        "bin" | "bincode" => Ok(OutputFormat::Bincode),
        _ => bail!(
            "Unsupported output {} (expected .json, .bin or .bincode)",
            path.display()
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let format = args.output.as_deref().map(output_format).transpose()?;

    let dict = match &args.input {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Dictionary::builtin(),
    };

    let phrases = dict.entries().iter().filter(|e| e.token_count() == 2).count();
    eprintln!(
        "✓ {} entries ({} words, {} phrases)",
        dict.len(),
        dict.len() - phrases,
        phrases
    );

    if args.list {
        for entry in dict.entries() {
            println!("{}\t{}", entry.glyph, entry.key);
        }
    }

    if let (Some(out), Some(format)) = (args.output, format) {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        match format {
            OutputFormat::Json => std::fs::write(&out, dict.to_json_string()?)?,
            OutputFormat::Bincode => dict.save_bincode(&out)?,
        }
        eprintln!("✓ wrote {}", out.display());
    }

    Ok(())
}
