//! Emoji cluster segmentation for reaction strings.
//!
//! Reaction lines pack several emoji together with no separator. This splits
//! such a string into individually meaningful units. It is an approximation
//! of grapheme cluster segmentation that covers emoji sequences (variation
//! selectors, skin tones, ZWJ sequences, combining marks), not a full UAX #29
//! implementation.

use unicode_general_category::{get_general_category, GeneralCategory};

const ZWJ: char = '\u{200D}';

/// Check whether `c` attaches to the preceding code point.
///
/// - ZERO WIDTH JOINER
/// - Variation selectors (U+FE00..=U+FE0F)
/// - Skin tone modifiers (U+1F3FB..=U+1F3FF)
/// - Combining marks (Mn, Me, Mc)
pub fn is_emoji_extender(c: char) -> bool {
    if c == ZWJ {
        return true;
    }
    if ('\u{FE00}'..='\u{FE0F}').contains(&c) {
        return true;
    }
    if ('\u{1F3FB}'..='\u{1F3FF}').contains(&c) {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::SpacingMark
    )
}

/// Split `text` into emoji clusters.
///
/// A code point extends the current cluster if it is an extender or if the
/// previous code point was a ZWJ. Empty input gives an empty vector.
pub fn split_emoji_clusters(text: &str) -> Vec<String> {
    let mut clusters = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        let extends = match current.chars().next_back() {
            Some(prev) => is_emoji_extender(c) || prev == ZWJ,
            None => false,
        };

        if extends {
            current.push(c);
        } else {
            if !current.is_empty() {
                clusters.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}
