//! Parsed chat message records.

use indexmap::IndexMap;
use serde::Serialize;

/// Reactions on a message: emoji cluster -> reactor names, in parse order.
///
/// Names are not deduplicated. A line listing the same emoji twice appends
/// the reactor list twice.
pub type Reactions = IndexMap<String, Vec<String>>;

/// A single chat message, possibly carrying its replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Chronological position in the transcript (0-based)
    pub id: usize,
    /// Time of day as written in the header (`HH:MM:SS`)
    pub timestamp: String,
    pub sender: String,
    /// Content lines joined with `\n`
    pub body: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub reactions: Reactions,
    /// Quoted snippet from a `Replying to "..."` line, as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Replies attached during thread linking
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Message>,
}

impl Message {
    pub fn new(id: usize, timestamp: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            sender: sender.into(),
            body: String::new(),
            reactions: Reactions::new(),
            reply_to: None,
            children: Vec::new(),
        }
    }

    /// Register `reactors` under every emoji cluster in `emojis`.
    pub fn add_reactions<S: AsRef<str>>(&mut self, emojis: &[S], reactors: &[String]) {
        for emoji in emojis {
            let key = emoji.as_ref().trim();
            if key.is_empty() {
                continue;
            }
            self.reactions
                .entry(key.to_string())
                .or_default()
                .extend(reactors.iter().cloned());
        }
    }

    /// Total number of reactions (one per reactor per emoji).
    pub fn reaction_count(&self) -> usize {
        self.reactions.values().map(Vec::len).sum()
    }

    /// Number of messages in this message's thread, at any depth.
    pub fn thread_len(&self) -> usize {
        self.children.iter().map(|c| 1 + c.thread_len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_reactions_extends_per_emoji() {
        let mut msg = Message::new(0, "10:00:00", "Alice");
        msg.add_reactions(&["👍", "❤️"], &names(&["Bob", "Carol"]));
        msg.add_reactions(&["👍"], &names(&["Dave"]));

        assert_eq!(msg.reactions["👍"], names(&["Bob", "Carol", "Dave"]));
        assert_eq!(msg.reactions["❤️"], names(&["Bob", "Carol"]));
        assert_eq!(msg.reaction_count(), 5);
    }

    #[test]
    fn test_add_reactions_keeps_duplicates() {
        let mut msg = Message::new(0, "10:00:00", "Alice");
        msg.add_reactions(&["😀", "😀"], &names(&["Bob"]));
        assert_eq!(msg.reactions["😀"], names(&["Bob", "Bob"]));
        assert_eq!(msg.reactions.len(), 1);
    }

    #[test]
    fn test_add_reactions_skips_blank_clusters() {
        let mut msg = Message::new(0, "10:00:00", "Alice");
        msg.add_reactions(&["👍", " ", "🎉"], &names(&["Bob"]));
        let keys: Vec<&str> = msg.reactions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["👍", "🎉"]);
    }

    #[test]
    fn test_thread_len_counts_nested() {
        let mut root = Message::new(0, "10:00:00", "Alice");
        let mut reply = Message::new(1, "10:01:00", "Bob");
        reply.children.push(Message::new(2, "10:02:00", "Carol"));
        root.children.push(reply);
        root.children.push(Message::new(3, "10:03:00", "Dave"));
        assert_eq!(root.thread_len(), 3);
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let msg = Message::new(4, "10:00:00", "Alice");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["sender"], "Alice");
        assert!(json.get("reactions").is_none());
        assert!(json.get("reply_to").is_none());
        assert!(json.get("children").is_none());
    }
}
