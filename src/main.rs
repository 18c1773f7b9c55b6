/// phonesearch: find phone numbers in a text file
///
/// Loads a file as lines or words, filters the tokens with one of the bundled
/// phone-number patterns (or a custom regex) and prints each match on its own line.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use phonesearch::{PhonePattern, SearchEngine, TokenMode};
use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "phonesearch")]
#[command(about = "Find phone numbers in a text file", long_about = None)]
#[command(version)]
struct Cli {
    /// Text file to scan
    file: PathBuf,

    /// How the file is split into tokens
    #[arg(short, long, value_enum, default_value = "words")]
    mode: ModeArg,

    /// Bundled pattern to filter with
    #[arg(short, long, value_enum, default_value = "delimited")]
    pattern: PatternArg,

    /// Custom regular expression (overrides --pattern)
    #[arg(short, long)]
    regex: Option<String>,

    /// Print every token before searching
    #[arg(long)]
    show_tokens: bool,

    /// Optional log file path for info logging
    #[arg(short, long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
enum ModeArg {
    /// One token per line
    Lines,
    /// One token per word
    Words,
}

#[derive(Debug, Clone, ValueEnum)]
enum PatternArg {
    /// Ten leading digits
    Simple,
    /// (DDD) DDD-DDDD
    Parenthesized,
    /// DDD-DDD-DDDD with space, period or hyphen
    Delimited,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log.as_ref())?;

    let mode = match cli.mode {
        ModeArg::Lines => TokenMode::Lines,
        ModeArg::Words => TokenMode::Words,
    };

    let re = match &cli.regex {
        Some(expr) => Regex::new(expr).with_context(|| format!("Invalid regex: {}", expr))?,
        None => {
            let pattern = match cli.pattern {
                PatternArg::Simple => PhonePattern::Simple,
                PatternArg::Parenthesized => PhonePattern::Parenthesized,
                PatternArg::Delimited => PhonePattern::Delimited,
            };
            debug!("Using {} pattern: {}", pattern, pattern.as_str());
            pattern.regex().clone()
        }
    };

    let mut engine = SearchEngine::new(cli.file.clone());
    engine
        .extract_tokens(mode)
        .with_context(|| format!("Failed to load {:?}", cli.file))?;

    if cli.show_tokens {
        engine.show_tokens();
    }

    engine.search_by_pattern(&re);
    for token in engine.result() {
        println!("{}", token);
    }

    Ok(())
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("phonesearch.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    }

    Ok(())
}
