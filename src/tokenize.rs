//! Turning lines of text into morphemes
//!
//! Real morphological analysis belongs to a dedicated analyzer like MeCab. If its output is
//! available (one morpheme per line), use [`LineTokenizer`]. Otherwise [`WordBoundTokenizer`]
//! is a rough stand in built on Unicode word boundaries.
use rayon::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Anything that can split one line of text into morphemes, in reading order
pub trait Tokenizer: Sync {
    fn tokenize(&self, line: &str) -> Vec<String>;
}

/// Unicode (UAX #29) word boundaries, minus the whitespace between words
///
/// Katakana runs and latin words come out whole, but ideographs and hiragana come out one
/// character at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundTokenizer;

impl Tokenizer for WordBoundTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_word_bounds()
            .filter(|seg| !seg.trim().is_empty())
            .map(|seg| seg.to_string())
            .collect()
    }
}

/// Input that is already tokenized, one morpheme per line (`mecab -F'%m\n'`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() { vec![] } else { vec![line.to_string()] }
    }
}

/// Tokenize many lines in parallel, keeping reading order
pub fn tokenize_lines<T, S>(tokenizer: &T, lines: &[S]) -> Vec<String>
    where T: Tokenizer + ?Sized, S: AsRef<str> + Sync
{
    let per_line: Vec<Vec<String>> = lines.par_iter()
        .map(|line| tokenizer.tokenize(line.as_ref()))
        .collect();
    let tokens: Vec<String> = per_line.into_iter().flat_map(|t| t).collect();
    debug!("{} lines became {} tokens", lines.len(), tokens.len());
    tokens
}
