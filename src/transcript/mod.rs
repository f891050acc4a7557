//! Zoom chat transcript parsing.
//!
//! Zoom saves meeting chat as plain text:
//!
//! ```text
//! 10:01:02 From Jane Doe to Everyone:
//! 	Let's meet at 3pm tomorrow
//! 	Bob, Carol: 👍
//! 10:01:30 From Bob to Everyone:
//! 	Replying to "Let's meet at 3pm..."
//! 	Works for me
//! ```
//!
//! Parsing produces a forest of [`Message`]s with reactions attached and
//! replies nested under the message they quote.

mod classify;
mod grapheme;
mod message;
mod parser;
mod thread;

pub use classify::{
    classify_line, is_plausible_emoji_string, is_plausible_reactor_list, LineKind,
};
pub use grapheme::{is_emoji_extender, split_emoji_clusters};
pub use message::{Message, Reactions};
pub use parser::{
    parse_file, parse_header, parse_lines, parse_str, parse_transcript, TranscriptSource,
};
pub use thread::{link_threads, normalize_snippet};
