use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use blockdown_engine::{interchange, parse_document, render_document};

#[derive(Parser)]
#[command(name = "blockdown", version, about = "Convert between markdown and block trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse markdown into a JSON block list
    Parse {
        /// Markdown file to read (stdin when omitted)
        input: Option<PathBuf>,
        /// Inline markdown instead of a file or stdin
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
    },
    /// Render a JSON block list back to markdown
    Render {
        /// JSON file to read (stdin when omitted)
        input: Option<PathBuf>,
        /// Inline JSON instead of a file or stdin
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, text } => {
            let markdown = match text {
                Some(inline) => inline,
                None => read_input(input.as_deref())?,
            };
            let blocks = parse_document(&markdown);
            println!("{}", interchange::blocks_to_json(&blocks)?);
        }
        Command::Render { input, text } => {
            let json = match text {
                Some(inline) => inline,
                None => read_input(input.as_deref())?,
            };
            let blocks = interchange::blocks_from_json(&json)?;
            println!("{}", render_document(&blocks));
        }
    }

    Ok(())
}

/// Reads the whole input as bytes and validates it as UTF-8 before the
/// engine sees it.
fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(p) => std::fs::read(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    interchange::decode_input(bytes).context("input rejected")
}
