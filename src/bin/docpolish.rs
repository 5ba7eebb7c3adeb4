//! CLI binary for docpolish.
//!
//! A thin shim over the library crate: maps flags to `PolishConfig`,
//! runs one polish or launches the local form server.

use anyhow::{Context, Result};
use clap::Parser;
use docpolish::server::{run_server, AppState};
use docpolish::{polish, DocumentInput, PolishConfig, PolishRequest, Style};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Polish a PDF (result on stdout)
  docpolish document.pdf

  # Pick a style
  docpolish document.pdf --style formal

  # Polish literal text
  docpolish --text "Their going to the store." --style fluency

  # Write the result to a file
  docpolish report.pdf -o report_polished.txt

  # Structured JSON output (text + stats)
  docpolish document.pdf --json > result.json

  # Launch the local web form
  docpolish --serve --port 7860

ENVIRONMENT VARIABLES:
  OPENAI_MODEL       Completion model identifier (default: gpt-4o-mini)
  OPENAI_API_KEY     API credential
  OPENAI_API_HOST    API base endpoint URL (any OpenAI-compatible server)

SETUP:
  1. Set API key:     export OPENAI_API_KEY=sk-...
  2. Polish:          docpolish document.pdf --style formal
"#;

/// Correct grammar and rewrite the style of PDFs and plain text.
#[derive(Parser, Debug)]
#[command(
    name = "docpolish",
    version,
    about = "Correct grammar and rewrite the style of PDFs and plain text using hosted LLMs",
    long_about = "Load a PDF (or literal text), correct its grammar, and rewrite it in a chosen \
style via a hosted completion model. Works with OpenAI or any OpenAI-compatible endpoint \
(vLLM, LiteLLM, Ollama).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    input: Option<PathBuf>,

    /// Literal text to polish instead of a PDF.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Output style.
    #[arg(short, long, value_enum, default_value = "standard")]
    style: Style,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Completion model identifier.
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// API base endpoint URL (OpenAI-compatible).
    #[arg(long, env = "OPENAI_API_HOST")]
    base_url: Option<String>,

    /// API credential. Prefer the environment variable over the flag.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Per-completion-call timeout in seconds.
    #[arg(long, default_value_t = 60)]
    api_timeout: u64,

    /// Max tokens the model may generate per call.
    #[arg(long, default_value_t = 4096)]
    max_tokens: usize,

    /// Output structured JSON (text + stats) instead of plain text.
    #[arg(long)]
    json: bool,

    /// Launch the local web form instead of a one-shot run.
    #[arg(long)]
    serve: bool,

    /// Port for the web form.
    #[arg(short, long, default_value_t = 7860)]
    port: u16,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors and the result.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;

    // ── Serve mode ───────────────────────────────────────────────────────
    if cli.serve {
        let state = AppState::new(config);
        return run_server(state, cli.port)
            .await
            .map_err(|e| anyhow::anyhow!("Server failed: {}", e));
    }

    // ── One-shot mode ────────────────────────────────────────────────────
    let input = match (&cli.input, &cli.text) {
        (Some(path), None) => DocumentInput::PdfFile(path.clone()),
        (None, Some(text)) => DocumentInput::RawText(text.clone()),
        _ => anyhow::bail!("Provide a PDF path, --text, or --serve. See --help."),
    };

    let request = PolishRequest {
        input,
        style: cli.style,
    };

    let output = polish(&request, &config).await.context("Polish failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if let Some(ref path) = cli.output {
        write_atomic(path, &output.text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !cli.quiet {
            eprintln!(
                "✔ {} chars in {}ms  →  {}",
                output.stats.final_chars,
                output.stats.total_duration_ms,
                path.display()
            );
        }
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.text.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.text.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
        if !cli.quiet {
            eprintln!(
                "   correct {}ms  /  rewrite {}ms  —  {}ms total",
                output.stats.correct_duration_ms,
                output.stats.rewrite_duration_ms,
                output.stats.total_duration_ms,
            );
        }
    }

    Ok(())
}

/// Map CLI args to `PolishConfig`, starting from the environment.
fn build_config(cli: &Cli) -> Result<PolishConfig> {
    let mut builder = PolishConfig::builder()
        .api_timeout_secs(cli.api_timeout)
        .max_tokens(cli.max_tokens);

    if let Some(ref model) = cli.model {
        builder = builder.model(model.clone());
    }
    if let Some(ref url) = cli.base_url {
        builder = builder.base_url(url.clone());
    }
    if let Some(ref key) = cli.api_key {
        builder = builder.api_key(key.clone());
    }

    builder.build().context("Invalid configuration")
}

/// Atomic write: temp file in the target directory, then rename.
fn write_atomic(path: &PathBuf, content: &str) -> Result<()> {
    let tmp_path = path.with_extension("txt.tmp");
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
