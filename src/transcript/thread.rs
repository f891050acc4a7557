//! Reply linking: turns the flat message list into a forest of threads.

use super::message::Message;
use tracing::debug;

/// Suffix the exporter appends to truncated reply snippets.
const ELLIPSIS: &str = "...";

/// Strip the truncation ellipsis from a reply snippet.
pub fn normalize_snippet(snippet: &str) -> &str {
    snippet.strip_suffix(ELLIPSIS).unwrap_or(snippet)
}

/// Find the parent of the message at `index`.
///
/// Candidates are earlier messages whose non-empty body starts with the
/// normalized snippet. The most recent candidate wins.
fn resolve_parent(messages: &[Message], index: usize) -> Option<usize> {
    let snippet = normalize_snippet(messages[index].reply_to.as_deref()?);
    if snippet.is_empty() {
        return None;
    }

    messages[..index]
        .iter()
        .rposition(|m| !m.body.is_empty() && m.body.starts_with(snippet))
}

/// Link replies to their parents.
///
/// Returns the top-level messages in chronological order. Each resolved
/// reply is moved into its parent's `children` (in chronological order)
/// and never appears at top level. Unresolved replies stay at top level.
pub fn link_threads(messages: Vec<Message>) -> Vec<Message> {
    let parents: Vec<Option<usize>> = (0..messages.len())
        .map(|i| resolve_parent(&messages, i))
        .collect();

    for (msg, parent) in messages.iter().zip(&parents) {
        if let (Some(snippet), None) = (&msg.reply_to, parent) {
            debug!(id = msg.id, snippet = %snippet, "reply snippet did not resolve");
        }
    }

    // Parents always precede their children, so attaching from the back
    // guarantees every child is complete before it is moved.
    let mut slots: Vec<Option<Message>> = messages.into_iter().map(Some).collect();
    for index in (0..slots.len()).rev() {
        let Some(parent) = parents[index] else {
            continue;
        };
        if let Some(child) = slots[index].take() {
            if let Some(parent_msg) = slots[parent].as_mut() {
                parent_msg.children.insert(0, child);
            }
        }
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: usize, body: &str, reply_to: Option<&str>) -> Message {
        let mut m = Message::new(id, format!("10:00:{:02}", id), format!("User{}", id));
        m.body = body.to_string();
        m.reply_to = reply_to.map(str::to_string);
        m
    }

    fn ids(messages: &[Message]) -> Vec<usize> {
        messages.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_normalize_snippet() {
        assert_eq!(normalize_snippet("Let's meet at 3pm..."), "Let's meet at 3pm");
        assert_eq!(normalize_snippet("Done"), "Done");
        assert_eq!(normalize_snippet("..."), "");
    }

    #[test]
    fn test_link_truncated_snippet() {
        let forest = link_threads(vec![
            msg(0, "Let's meet at 3pm tomorrow in the lobby", None),
            msg(1, "Works for me", Some("Let's meet at 3pm...")),
        ]);
        assert_eq!(ids(&forest), vec![0]);
        assert_eq!(ids(&forest[0].children), vec![1]);
    }

    #[test]
    fn test_unresolved_reply_stays_top_level() {
        let forest = link_threads(vec![
            msg(0, "Hello", None),
            msg(1, "Answer", Some("Something never said")),
            msg(2, "Bye", None),
        ]);
        assert_eq!(ids(&forest), vec![0, 1, 2]);
        assert!(forest.iter().all(|m| m.children.is_empty()));
    }

    #[test]
    fn test_children_in_chronological_order() {
        let forest = link_threads(vec![
            msg(0, "Question?", None),
            msg(1, "Other topic", None),
            msg(2, "First answer", Some("Question?")),
            msg(3, "Second answer", Some("Question?")),
        ]);
        assert_eq!(ids(&forest), vec![0, 1]);
        assert_eq!(ids(&forest[0].children), vec![2, 3]);
    }

    #[test]
    fn test_duplicate_bodies_prefer_most_recent_prior() {
        let forest = link_threads(vec![
            msg(0, "ok", None),
            msg(1, "ok", None),
            msg(2, "agreed", Some("ok")),
            msg(3, "ok", None),
        ]);
        assert_eq!(ids(&forest), vec![0, 1, 3]);
        assert!(forest[0].children.is_empty());
        assert_eq!(ids(&forest[1].children), vec![2]);
        assert!(forest[2].children.is_empty());
    }

    #[test]
    fn test_later_messages_are_not_parents() {
        let forest = link_threads(vec![
            msg(0, "reply first", Some("Announcement")),
            msg(1, "Announcement", None),
        ]);
        assert_eq!(ids(&forest), vec![0, 1]);
    }

    #[test]
    fn test_nested_replies() {
        let forest = link_threads(vec![
            msg(0, "Root", None),
            msg(1, "Child", Some("Root")),
            msg(2, "Grandchild", Some("Child")),
        ]);
        assert_eq!(ids(&forest), vec![0]);
        assert_eq!(ids(&forest[0].children), vec![1]);
        assert_eq!(ids(&forest[0].children[0].children), vec![2]);
    }

    #[test]
    fn test_empty_bodies_never_match() {
        let forest = link_threads(vec![
            msg(0, "", None),
            msg(1, "hm", Some("...")),
            msg(2, "x", Some("")),
        ]);
        assert_eq!(ids(&forest), vec![0, 1, 2]);
    }

    #[test]
    fn test_link_empty() {
        assert!(link_threads(Vec::new()).is_empty());
    }
}
