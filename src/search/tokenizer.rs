//! Line reading and tokenization strategies for the search engine.
//!
//! A file is consumed one line at a time and every line is handed to a
//! strategy function that appends tokens:
//! - `Lines`: the raw line is the token
//! - `Words`: whitespace-separated words, each with at most one trailing
//!   punctuation mark removed

use std::io::{self, BufRead, Read};

/// Longest line content (terminator excluded) the reader accepts.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Marks removed from the end of a word, checked in this order.
pub const REDUNDANT_SUFFIXES: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Appends the tokens found in one line.
pub type TokenStrategy = fn(&mut Vec<String>, &str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// One token per line, whitespace preserved
    Lines,
    /// One token per whitespace-delimited word
    Words,
}

impl TokenMode {
    pub fn strategy(self) -> TokenStrategy {
        match self {
            TokenMode::Lines => push_line,
            TokenMode::Words => push_words,
        }
    }
}

pub fn push_line(tokens: &mut Vec<String>, line: &str) {
    tokens.push(line.to_string());
}

pub fn push_words(tokens: &mut Vec<String>, line: &str) {
    tokens.extend(
        line.split_whitespace()
            .map(|word| strip_trailing_punctuation(word).to_string()),
    );
}

/// Remove the first mark of [`REDUNDANT_SUFFIXES`] that ends `word`.
///
/// Only one character is ever removed: `"now.!"` becomes `"now."`.
pub fn strip_trailing_punctuation(word: &str) -> &str {
    REDUNDANT_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(*suffix))
        .unwrap_or(word)
}

/// Iterator over the lines of a reader with the terminator removed.
///
/// `\n` ends a line and a `\r` right before it is dropped too. Invalid UTF-8
/// is replaced rather than rejected. Lines longer than `max_len` bytes yield
/// an `InvalidData` error, after which the iterator is exhausted.
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
    buf: Vec<u8>,
    lines_read: usize,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            buf: Vec::new(),
            lines_read: 0,
            finished: false,
        }
    }

    /// Number of lines successfully returned so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();

        // Room for the longest accepted line plus "\r\n"; anything that still
        // has no terminator after that is too long.
        let limit = self.max_len.saturating_add(2) as u64;
        let read = self
            .reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        if self.buf.len() > self.max_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {} bytes", self.max_len),
            ));
        }

        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
