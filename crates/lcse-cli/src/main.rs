// crates/lcse-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lcse_algo::{lcse_compute, AffinityKind};
use lcse_core::{Limits, Token};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "lcse-cli",
    about = "Longest Common Balanced Subsequence Embedding demonstrator",
    long_about = "Given two balanced bracket strings, finds a maximum-affinity \
                   common balanced subsequence embedding and prints its score \
                   and the two aligned embeddings.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// First balanced bracket string, e.g. "([]())"
    first: String,

    /// Second balanced bracket string, e.g. "()[()]"
    second: String,

    /// Affinity rule used to decide whether two opens may match.
    #[arg(long, value_enum, default_value_t = AffinityOpt::Strict)]
    affinity: AffinityOpt,

    /// Cap on decomposition-cache entries (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_decomposition_entries: usize,

    /// Cap on memo-table entries (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_memo_entries: usize,

    /// Cap on recursion depth (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_recursion_depth: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum AffinityOpt {
    /// Two opens match only if they are the same bracket type.
    Strict,
    /// Any two opens match, regardless of bracket type.
    Universal,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    run(cli)
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let buf1 = parse_tokens(&cli.first).with_context(|| format!("parsing {:?}", cli.first))?;
    let buf2 = parse_tokens(&cli.second).with_context(|| format!("parsing {:?}", cli.second))?;

    let affinity = match cli.affinity {
        AffinityOpt::Strict => AffinityKind::StrictEquality,
        AffinityOpt::Universal => AffinityKind::Universal,
    };

    let limits = Limits {
        max_decomposition_entries: non_zero(cli.max_decomposition_entries),
        max_memo_entries: non_zero(cli.max_memo_entries),
        max_recursion_depth: non_zero(cli.max_recursion_depth),
    };

    info!(
        len1 = buf1.len(),
        len2 = buf2.len(),
        affinity = ?cli.affinity,
        "running lcse_compute"
    );

    let (score, (out1, out2)) = lcse_compute(&buf1, &buf2, default_pair_map(), affinity, limits)
        .context("lcse_compute failed")?;

    println!("score: {score}");
    println!("first:  {}", render(&out1));
    println!("second: {}", render(&out2));
    Ok(())
}

fn non_zero(n: usize) -> Option<usize> {
    if n == 0 {
        None
    } else {
        Some(n)
    }
}

/// The three ASCII bracket pairs this demonstrator understands.
fn default_pair_map() -> HashMap<Token, Token> {
    HashMap::from([
        (b'(' as Token, b')' as Token),
        (b'[' as Token, b']' as Token),
        (b'{' as Token, b'}' as Token),
    ])
}

/// Parse a literal bracket string into tokens, rejecting any character
/// outside the three recognized bracket pairs.
fn parse_tokens(s: &str) -> Result<Vec<Token>> {
    let known: &[u8] = b"()[]{}";
    s.bytes()
        .map(|b| {
            if known.contains(&b) {
                Ok(Token::from(b))
            } else {
                bail!("unrecognized character {:?}; only ()[]{{}} are supported", b as char)
            }
        })
        .collect()
}

/// Render tokens back to their bracket characters for display.
fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|&t| u8::try_from(t).unwrap_or(b'?') as char)
        .collect()
}
