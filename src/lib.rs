// Phonesearch - Tokenizing Search Library
//!
//! Phonesearch reads a text file into tokens (whole lines, or words with one
//! trailing punctuation mark removed) and filters them with a regular
//! expression. Three phone-number patterns are provided in
//! [`search::patterns`].

pub mod search;


// Re-export common types
pub use search::patterns::{
    DELIMITED_NUMBER_PATTERN, NUMBER_WITH_PARENTHESES_PATTERN, PhonePattern, SIMPLE_NUMBER_PATTERN,
};
pub use search::{Result, SearchEngine, SearchError, TokenMode};
