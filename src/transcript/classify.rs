//! Body line classification: reply marker, reaction, or plain text.
//!
//! Matchers are tried in a fixed order. A reply marker always wins over a
//! reaction, and anything that is neither is kept as message content.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum word count of a comma-free reactor list.
pub const MAX_REACTOR_WORDS: usize = 5;

/// Classification of a single non-empty body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Replying to "<snippet>"`
    Reply(&'a str),
    /// `<reactors>: <emoji>`
    Reaction { reactors: Vec<String>, emoji: &'a str },
    /// Anything else, unmodified
    Plain(&'a str),
}

fn reply_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^\s*Replying to "(.+?)":?$"#).unwrap())
}

fn latin_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z]").unwrap())
}

/// A reactor list either contains a comma or is short enough to be names.
///
/// Rejects ordinary sentences that happen to contain a colon.
pub fn is_plausible_reactor_list(candidate: &str) -> bool {
    candidate.contains(',') || candidate.split_whitespace().count() <= MAX_REACTOR_WORDS
}

/// An emoji string carries no Latin letters.
pub fn is_plausible_emoji_string(candidate: &str) -> bool {
    !latin_letter_regex().is_match(candidate)
}

/// Match a reply marker, returning the quoted snippet.
pub fn match_reply(line: &str) -> Option<&str> {
    reply_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match a reaction line, returning trimmed reactor names and the emoji part.
///
/// The line is split at its final colon. Both sides must be non-empty and
/// pass the plausibility checks.
pub fn match_reaction(line: &str) -> Option<(Vec<String>, &str)> {
    let (reactors, emoji) = line.rsplit_once(':')?;
    let emoji = emoji.trim();
    if reactors.trim().is_empty() || emoji.is_empty() {
        return None;
    }
    if !is_plausible_reactor_list(reactors) || !is_plausible_emoji_string(emoji) {
        return None;
    }

    let names = reactors
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();
    Some((names, emoji))
}

/// Classify one body line. Matching is done on the trimmed line; `Plain`
/// carries the line as given.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(snippet) = match_reply(trimmed) {
        return LineKind::Reply(snippet);
    }

    if let Some((reactors, emoji)) = match_reaction(trimmed) {
        return LineKind::Reaction { reactors, emoji };
    }

    LineKind::Plain(line)
}
