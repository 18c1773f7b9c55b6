//! Word tokenization through the engine, paired with the bundled patterns

use crate::search::{PhonePattern, SearchEngine};
use crate::tests::helpers::{unique_temp_dir, write_fixture};
use anyhow::Result;

fn load_words(test_name: &str, contents: &str) -> Result<SearchEngine> {
    let dir = unique_temp_dir(test_name);
    let path = write_fixture(dir.path(), "input.txt", contents);

    let mut engine = SearchEngine::new(&path);
    engine.extract_words_from_file()?;
    Ok(engine)
}

#[test]
fn test_sentence_with_delimited_number() -> Result<()> {
    let mut engine = load_words("sentence", "Call me at 555-123-4567 now.\n")?;

    assert_eq!(engine.tokens(), ["Call", "me", "at", "555-123-4567", "now"]);

    engine.search_by_pattern(PhonePattern::Delimited.regex());
    assert_eq!(engine.result(), ["555-123-4567"]);
    Ok(())
}

#[test]
fn test_parenthesized_number_splits_into_two_words() -> Result<()> {
    let mut engine = load_words("parenthesized_words", "(555) 123-4567\n")?;

    assert_eq!(engine.tokens(), ["(555)", "123-4567"]);

    engine.search_by_pattern(PhonePattern::Parenthesized.regex());
    assert!(engine.result().is_empty());
    Ok(())
}

#[test]
fn test_parenthesized_number_matches_as_line() -> Result<()> {
    let dir = unique_temp_dir("parenthesized_line");
    let path = write_fixture(dir.path(), "input.txt", "(555) 123-4567\n");

    let mut engine = SearchEngine::new(&path);
    engine.extract_lines_from_file()?;
    engine.search_by_pattern(PhonePattern::Parenthesized.regex());

    assert_eq!(engine.result(), ["(555) 123-4567"]);
    Ok(())
}

#[test]
fn test_each_mark_in_the_set_is_stripped() -> Result<()> {
    let engine = load_words("marks", "a. b, c; d: e! f?\n")?;

    assert_eq!(engine.tokens(), ["a", "b", "c", "d", "e", "f"]);
    Ok(())
}

#[test]
fn test_only_one_trailing_mark_is_stripped() -> Result<()> {
    let engine = load_words("one_mark", "Really?! 555-123-4567.. done,.\n")?;

    assert_eq!(engine.tokens(), ["Really?", "555-123-4567.", "done,"]);
    Ok(())
}

#[test]
fn test_marks_outside_the_set_are_kept() -> Result<()> {
    let engine = load_words("other_marks", "\"quoted.\" (555) done.)\n")?;

    assert_eq!(engine.tokens(), ["\"quoted.\"", "(555)", "done.)"]);
    Ok(())
}

#[test]
fn test_lone_mark_becomes_empty_token() -> Result<()> {
    let engine = load_words("lone_mark", "wait - what ?\n")?;

    assert_eq!(engine.tokens(), ["wait", "-", "what", ""]);
    Ok(())
}

#[test]
fn test_blank_and_whitespace_lines_produce_no_words() -> Result<()> {
    let engine = load_words("blank_lines", "\n   \t\none two\n\n")?;

    assert_eq!(engine.tokens(), ["one", "two"]);
    Ok(())
}

#[test]
fn test_simple_pattern_over_words() -> Result<()> {
    let mut engine = load_words(
        "simple_words",
        "5551234567extra 555123456 5551234567. x5551234567\n",
    )?;
    engine.search_by_pattern(PhonePattern::Simple.regex());

    assert_eq!(engine.result(), ["5551234567extra", "5551234567"]);
    Ok(())
}
