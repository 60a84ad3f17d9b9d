use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use input_context::{
    context_query_spans, input_context_queries, text_input_panel_state, PresentationState,
    TextInputState,
};
use tracing::debug;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify input text and print the context queries as JSON lines.
    Classify {
        #[arg(long)]
        text: String,
        /// Caret byte offset; defaults to the end of the text.
        #[arg(long)]
        caret: Option<usize>,
        /// Selected byte range as START..END; overrides --caret.
        #[arg(long)]
        selection: Option<String>,
        /// Also print the located spans before the resolved queries.
        #[arg(long)]
        spans: bool,
    },
    /// Derive the input panel state from a presentation-state JSON file
    /// ("-" reads stdin).
    Panel {
        #[arg(long)]
        state: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Classify {
            text,
            caret,
            selection,
            spans,
        } => {
            let state = input_state_from_args(text, caret, selection)?;
            if spans {
                for span in context_query_spans(&state) {
                    println!("{}", serde_json::to_string(&span)?);
                }
            }
            let queries = input_context_queries(&state);
            debug!(count = queries.len(), "probe: classified input state");
            for query in queries {
                println!("{}", serde_json::to_string(&query)?);
            }
        }
        Command::Panel { state } => {
            let raw = read_state_input(&state)?;
            let presentation: PresentationState =
                serde_json::from_str(&raw).context("failed to parse presentation state JSON")?;
            let panel = text_input_panel_state(&presentation);
            println!("{}", serde_json::to_string_pretty(&panel)?);
        }
    }

    Ok(())
}

fn input_state_from_args(
    text: String,
    caret: Option<usize>,
    selection: Option<String>,
) -> Result<TextInputState> {
    if let Some(raw) = selection {
        let (start, end) = parse_selection(&raw)?;
        return TextInputState::with_selection(text, start..end)
            .context("invalid selection for input text");
    }
    Ok(match caret {
        Some(caret) => TextInputState::with_caret(text, caret),
        None => TextInputState::new(text),
    })
}

fn parse_selection(raw: &str) -> Result<(usize, usize)> {
    let (start, end) = raw
        .split_once("..")
        .ok_or_else(|| anyhow!("selection must be formatted as START..END"))?;
    let start = start.trim().parse().context("invalid selection start")?;
    let end = end.trim().parse().context("invalid selection end")?;
    Ok((start, end))
}

fn read_state_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read presentation state from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read presentation state file {}", path.display()))
}
