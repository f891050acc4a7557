//! Rendering of parsed transcripts.

mod html;
mod template;

pub use html::{render_document, render_messages, thread_summary, RenderOptions, DEFAULT_TITLE};
