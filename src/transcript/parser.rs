//! Zoom chat transcript parser.
//!
//! A transcript is a sequence of blocks. Each block starts with a header line
//! (`HH:MM:SS From <sender> to Everyone:`) followed by body lines. Body lines
//! are reply markers, reactions, or message content.

use super::classify::{classify_line, LineKind};
use super::grapheme::split_emoji_clusters;
use super::message::Message;
use super::thread::link_threads;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Where to read a transcript from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    /// A UTF-8 file on disk
    Path(PathBuf),
    /// Transcript text already in memory
    Text(String),
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d{2}:\d{2}:\d{2}) From (.+?) to Everyone:$").unwrap()
    })
}

/// Parse a message header line into `(timestamp, sender)`.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let caps = header_regex().captures(line)?;
    let timestamp = caps.get(1)?.as_str();
    let sender = caps.get(2)?.as_str().trim();
    Some((timestamp, sender))
}

/// Lines belonging to one message: its header and everything up to the next.
struct Block<'a> {
    timestamp: &'a str,
    sender: &'a str,
    lines: Vec<&'a str>,
}

/// Split lines into header-delimited blocks.
///
/// Lines before the first header belong to no message and are dropped.
fn split_blocks<'a>(lines: &[&'a str]) -> Vec<Block<'a>> {
    let mut blocks: Vec<Block<'a>> = Vec::new();
    let mut preamble = 0usize;

    for &line in lines {
        if let Some((timestamp, sender)) = parse_header(line) {
            blocks.push(Block {
                timestamp,
                sender,
                lines: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        } else {
            preamble += 1;
        }
    }

    if preamble > 0 {
        debug!(lines = preamble, "skipped content before first message header");
    }

    blocks
}

/// Build a message from a block: classify body lines and assemble the body.
fn build_message(id: usize, block: &Block<'_>) -> Message {
    let mut msg = Message::new(id, block.timestamp, block.sender);
    let mut content: Vec<&str> = Vec::new();

    for &line in &block.lines {
        if line.trim().is_empty() {
            continue;
        }

        match classify_line(line) {
            LineKind::Reply(snippet) => msg.reply_to = Some(snippet.to_string()),
            LineKind::Reaction { reactors, emoji } => {
                let clusters = split_emoji_clusters(emoji);
                msg.add_reactions(&clusters, &reactors);
            }
            LineKind::Plain(text) => content.push(text),
        }
    }

    // Export indentation: only the front of the joined body is cleaned.
    msg.body = content.join("\n").trim_start_matches('\t').to_string();
    msg
}

/// Parse transcript lines into a forest of threaded messages.
///
/// Never fails on content: lines that fit no pattern become message text and
/// input without any header yields no messages.
pub fn parse_lines<I, S>(lines: I) -> Vec<Message>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = lines.into_iter().collect();
    let lines: Vec<&str> = owned
        .iter()
        .map(|l| l.as_ref().trim_end_matches(['\r', '\n']))
        .collect();

    let blocks = split_blocks(&lines);
    let messages: Vec<Message> = blocks
        .iter()
        .enumerate()
        .map(|(id, block)| build_message(id, block))
        .collect();

    debug!(
        lines = lines.len(),
        messages = messages.len(),
        "parsed transcript blocks"
    );

    link_threads(messages)
}

/// Parse transcript text held in memory.
pub fn parse_str(text: &str) -> Vec<Message> {
    parse_lines(text.lines())
}

/// Read and parse a transcript file.
pub fn parse_file(path: &Path) -> Result<Vec<Message>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    Ok(parse_str(&text))
}

/// Parse a transcript from either a file or in-memory text.
pub fn parse_transcript(source: &TranscriptSource) -> Result<Vec<Message>> {
    match source {
        TranscriptSource::Path(path) => parse_file(path),
        TranscriptSource::Text(text) => Ok(parse_str(text)),
    }
}
