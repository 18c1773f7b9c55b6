// Phonesearch Search Engine Module
//
// Loads a text file into tokens (whole lines or words) and filters those
// tokens with a caller-supplied regular expression.

pub mod error;
pub mod patterns;
pub mod tokenizer;

use regex::Regex;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub use self::error::{Result, SearchError};
pub use self::patterns::PhonePattern;
pub use self::tokenizer::{MAX_LINE_LEN, TokenMode};
use self::tokenizer::LineReader;

/// Tokenizing search engine over a single file.
///
/// `tokens` is replaced by every load and `result` by every search; nothing
/// accumulates across calls. Not meant for concurrent use.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    file_path: PathBuf,
    tokens: Vec<String>,
    result: Vec<String>,
    max_line_len: usize,
}

impl SearchEngine {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            tokens: Vec::new(),
            result: Vec::new(),
            max_line_len: MAX_LINE_LEN,
        }
    }

    /// Override the longest line a load accepts before failing with a scan error.
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn result(&self) -> &[String] {
        &self.result
    }

    /// Load the file with one token per line.
    pub fn extract_lines_from_file(&mut self) -> Result<()> {
        self.extract_tokens(TokenMode::Lines)
    }

    /// Load the file with one token per word, trailing punctuation stripped.
    pub fn extract_words_from_file(&mut self) -> Result<()> {
        self.extract_tokens(TokenMode::Words)
    }

    pub fn extract_tokens(&mut self, mode: TokenMode) -> Result<()> {
        debug!("📂 Loading {:?} as {:?}", self.file_path, mode);
        let start_time = Instant::now();

        let outcome = self.extract_tokens_from_file(mode.strategy());

        match &outcome {
            Ok(()) => info!(
                "✅ Loaded {} tokens from {:?} in {:.2}ms",
                self.tokens.len(),
                self.file_path,
                start_time.elapsed().as_secs_f64() * 1000.0
            ),
            Err(e) => warn!("❌ Load failed: {}", e),
        }

        outcome
    }

    /// Shared scan: every line of the file goes through `on_line`.
    ///
    /// Tokens are cleared first and only replaced once the whole file has been
    /// read, so a failed load always leaves them empty.
    fn extract_tokens_from_file<F>(&mut self, mut on_line: F) -> Result<()>
    where
        F: FnMut(&mut Vec<String>, &str),
    {
        self.tokens.clear();

        let file = File::open(&self.file_path).map_err(|source| SearchError::Io {
            path: self.file_path.clone(),
            source,
        })?;

        let mut lines = LineReader::new(BufReader::new(file), self.max_line_len);
        let mut tokens = Vec::new();

        while let Some(line) = lines.next() {
            let line = line.map_err(|source| SearchError::Scan {
                path: self.file_path.clone(),
                line: lines.lines_read() + 1,
                source,
            })?;
            on_line(&mut tokens, &line);
        }

        self.tokens = tokens;
        Ok(())
    }

    /// Keep the tokens that `re` matches anywhere, in their original order.
    pub fn search_by_pattern(&mut self, re: &Regex) {
        self.result.clear();
        self.result
            .extend(self.tokens.iter().filter(|token| re.is_match(token)).cloned());

        debug!(
            "🔍 Pattern '{}' kept {}/{} tokens",
            re.as_str(),
            self.result.len(),
            self.tokens.len()
        );
    }

    /// Print every token on its own line to stdout.
    pub fn show_tokens(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_tokens(&mut out) {
            warn!("Failed to write tokens: {}", e);
        }
    }

    pub fn write_tokens<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for token in &self.tokens {
            writeln!(out, "{}", token)?;
        }
        out.flush()
    }
}
