//! Getting readable text out of HTML
//!
//! This is nowhere near a real HTML parser and doesn't try to be. It only needs to be good
//! enough that the morphemes of a page's visible text survive, in order, and that furigana
//! (`<rt>`) doesn't get counted alongside the kanji it annotates.
use std::char;
use regex::{Captures, Regex};
use errors::*;

/// Removes markup from HTML, leaving lines of visible text
pub struct MarkupStripper {
    hidden: Regex,
    ruby_open: Regex,
    ruby_close: Regex,
    breaks: Regex,
    tags: Regex,
    entities: Regex,
}

impl MarkupStripper {
    pub fn new() -> Result<Self> {
        Ok(MarkupStripper {
            hidden: Regex::new(concat!(
                r"(?is)<!--.*?-->",
                r"|<script\b[^>]*>.*?</script\s*>",
                r"|<style\b[^>]*>.*?</style\s*>"))?,
            ruby_open: Regex::new(r"(?i)<r[tp]\b[^>]*>")?,
            // </rt> and </rp> are optional; the next reading or the end of the ruby also ends one
            ruby_close: Regex::new(r"(?i)</r[tp]\s*>|<r[tp]\b|</ruby\s*>")?,
            breaks: Regex::new(concat!(
                r"(?i)<(br|/?p|/?div|/?h[1-6]|/?li|/?tr|/?td|/?th|/?title",
                r"|/?section|/?article|/?blockquote|/?header|/?footer)\b[^>]*>"))?,
            tags: Regex::new(r"<[^>]*>")?,
            entities: Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);")?,
        })
    }

    /// Visible text of `html`, one trimmed non-empty line per entry
    pub fn strip(&self, html: &str) -> Vec<String> {
        let text = self.hidden.replace_all(html, "");
        let text = self.drop_ruby_text(&text);
        let text = self.breaks.replace_all(&text, "\n");
        let text = self.tags.replace_all(&text, "");
        let text = self.entities.replace_all(&text, |caps: &Captures| decode_entity(&caps[0], &caps[1]));
        let lines: Vec<String> = text.lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        debug!("Stripped markup down to {} lines", lines.len());
        lines
    }

    /// Remove `<rt>` and `<rp>` elements along with their text, end tags or not
    fn drop_ruby_text(&self, html: &str) -> String {
        let mut kept = String::with_capacity(html.len());
        let mut pos = 0;
        while let Some(open) = self.ruby_open.find_at(html, pos) {
            kept.push_str(&html[pos..open.start()]);
            pos = match self.ruby_close.find_at(html, open.end()) {
                None => html.len(),
                Some(close) => {
                    let tag = close.as_str().to_lowercase();
                    if tag.starts_with("</rt") || tag.starts_with("</rp") {
                        close.end()
                    } else {
                        // Belongs to what follows, so scan it again
                        close.start()
                    }
                }
            };
        }
        kept.push_str(&html[pos..]);
        kept
    }
}

/// Decode one entity, given the whole match and its name. Unknown ones are left alone.
fn decode_entity(whole: &str, name: &str) -> String {
    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ if name.starts_with("#x") || name.starts_with("#X") => {
            u32::from_str_radix(&name[2..], 16).ok().and_then(char::from_u32)
        },
        _ if name.starts_with('#') => {
            name[1..].parse::<u32>().ok().and_then(char::from_u32)
        },
        _ => None,
    };
    match decoded {
        Some(c) => c.to_string(),
        None => whole.to_string(),
    }
}
