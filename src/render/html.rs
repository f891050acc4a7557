//! HTML rendering of a parsed message forest.

use super::template::{PAGE_STYLE, TOOLTIP_SCRIPT};
use crate::transcript::Message;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Document title used when none is configured.
pub const DEFAULT_TITLE: &str = "Zoom Chat Log";

/// Options for full-document rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    /// Render thread accordions expanded
    pub expand_threads: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            expand_threads: false,
        }
    }
}

/// Summary label of a thread accordion, e.g. "View Thread (2 replies)".
pub fn thread_summary(count: usize) -> String {
    let noun = if count > 1 { "replies" } else { "reply" };
    format!("View Thread ({} {})", count, noun)
}

/// Escape message text and turn newlines into line breaks.
fn render_body(body: &str) -> String {
    encode_text(body).replace('\n', "<br>")
}

fn render_reactions(out: &mut String, msg: &Message) {
    if msg.reactions.is_empty() {
        return;
    }

    out.push_str(r#"<div class="reactions">"#);
    for (emoji, reactors) in &msg.reactions {
        let names = reactors.join(", ");
        let _ = write!(
            out,
            r#"<span class="reaction" data-reactors="{}">{} <span class="reaction-count">{}</span></span>"#,
            encode_double_quoted_attribute(&names),
            encode_text(emoji),
            reactors.len()
        );
    }
    out.push_str("</div>");
}

fn render_list(out: &mut String, messages: &[Message], nested: bool, expand: bool) {
    if messages.is_empty() {
        return;
    }

    let container = if nested {
        "thread-container"
    } else {
        "chat-container"
    };
    let _ = write!(out, r#"<div class="{}">"#, container);

    for msg in messages {
        out.push_str(r#"<div class="message-bubble">"#);

        let _ = write!(
            out,
            r#"<div class="message-header"><span class="sender">{}</span><span class="timestamp">{}</span></div>"#,
            encode_text(&msg.sender),
            msg.timestamp
        );
        let _ = write!(
            out,
            r#"<div class="message-body">{}</div>"#,
            render_body(&msg.body)
        );

        render_reactions(out, msg);

        if !msg.children.is_empty() {
            let open = if expand { " open" } else { "" };
            let _ = write!(
                out,
                r#"<details class="thread-accordion"{}><summary>{}</summary>"#,
                open,
                thread_summary(msg.children.len())
            );
            render_list(out, &msg.children, true, expand);
            out.push_str("</details>");
        }

        out.push_str("</div>");
    }

    out.push_str("</div>");
}

/// Render messages and their threads as an HTML fragment.
///
/// An empty slice renders as an empty string.
pub fn render_messages(messages: &[Message]) -> String {
    let mut out = String::new();
    render_list(&mut out, messages, false, false);
    out
}

/// Render a complete standalone HTML document.
pub fn render_document(messages: &[Message], options: &RenderOptions) -> String {
    let mut body = String::new();
    render_list(&mut body, messages, false, options.expand_threads);
    let title = encode_text(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700&display=swap" rel="stylesheet">
<style>{style}</style>
</head>
<body>
<div class="main-container"><header><h1>{title}</h1></header>{body}</div>
<script>{script}</script>
</body>
</html>
"#,
        title = title,
        style = PAGE_STYLE,
        body = body,
        script = TOOLTIP_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: usize, sender: &str, body: &str) -> Message {
        let mut msg = Message::new(id, "10:00:00", sender);
        msg.body = body.to_string();
        msg
    }

    #[test]
    fn test_thread_summary_pluralization() {
        assert_eq!(thread_summary(1), "View Thread (1 reply)");
        assert_eq!(thread_summary(2), "View Thread (2 replies)");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_messages(&[]), "");
    }

    #[test]
    fn test_render_escapes_sender_and_body() {
        let html = render_messages(&[message(0, "<Bob>", "a < b\n& c")]);
        assert!(html.starts_with(r#"<div class="chat-container">"#));
        assert!(html.contains(r#"<span class="sender">&lt;Bob&gt;</span>"#));
        assert!(html.contains(r#"<span class="timestamp">10:00:00</span>"#));
        assert!(html.contains(r#"<div class="message-body">a &lt; b<br>&amp; c</div>"#));
    }

    #[test]
    fn test_render_reactions() {
        let mut msg = message(0, "Alice", "hi");
        msg.add_reactions(&["👍"], &["Bob".to_string(), "Carol \"C\"".to_string()]);
        let html = render_messages(&[msg]);
        assert!(html.contains(r#"<div class="reactions">"#));
        assert!(html.contains(r#"data-reactors="Bob, Carol &quot;C&quot;""#));
        assert!(html.contains(r#"👍 <span class="reaction-count">2</span>"#));
    }

    #[test]
    fn test_render_no_reactions_block_when_empty() {
        let html = render_messages(&[message(0, "Alice", "hi")]);
        assert!(!html.contains("reactions"));
        assert!(!html.contains("thread-accordion"));
    }

    #[test]
    fn test_render_nested_thread() {
        let mut root = message(0, "Alice", "Root");
        root.children.push(message(1, "Bob", "One"));
        root.children.push(message(2, "Carol", "Two"));
        let html = render_messages(&[root]);
        assert!(html.contains(r#"<details class="thread-accordion"><summary>View Thread (2 replies)</summary><div class="thread-container">"#));
        assert_eq!(html.matches(r#"class="message-bubble""#).count(), 3);
    }

    #[test]
    fn test_render_document() {
        let mut root = message(0, "Alice", "Root");
        root.children.push(message(1, "Bob", "One"));
        let options = RenderOptions {
            title: "Team <Sync>".to_string(),
            expand_threads: true,
        };
        let html = render_document(&[root], &options);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Team &lt;Sync&gt;</title>"));
        assert!(html.contains("<h1>Team &lt;Sync&gt;</h1>"));
        assert!(html.contains(r#"<details class="thread-accordion" open><summary>View Thread (1 reply)</summary>"#));
        assert!(html.contains("Reacted by:"));
    }

    #[test]
    fn test_render_options_default_title() {
        assert_eq!(RenderOptions::default().title, DEFAULT_TITLE);
    }
}
