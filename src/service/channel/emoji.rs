//! Emoji detection for category names.

use unicode_segmentation::UnicodeSegmentation;

/// Unicode blocks treated as emoji.
///
/// Box drawing (which contains the `┋` separator) and CJK text are not included.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F1E0}', '\u{1F1FF}'), // regional indicators (flags)
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F680}', '\u{1F6FF}'), // transport & map symbols
    ('\u{1F700}', '\u{1F77F}'), // alchemical symbols
    ('\u{1F780}', '\u{1F7FF}'), // geometric shapes extended
    ('\u{1F800}', '\u{1F8FF}'), // supplemental arrows-c
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols & pictographs
    ('\u{1FA00}', '\u{1FA6F}'), // chess symbols
    ('\u{1FA70}', '\u{1FAFF}'), // symbols & pictographs extended-a
    ('\u{2702}', '\u{27B0}'),   // dingbats
    ('\u{2600}', '\u{26FF}'),   // miscellaneous symbols
    ('\u{2B00}', '\u{2BFF}'),   // miscellaneous symbols & arrows
    ('\u{24C2}', '\u{24C2}'),   // circled M
    ('\u{3030}', '\u{3030}'),   // wavy dash
    ('\u{303D}', '\u{303D}'),   // part alternation mark
    ('\u{3297}', '\u{3297}'),   // circled ideograph congratulation
    ('\u{3299}', '\u{3299}'),   // circled ideograph secret
];

fn is_emoji_char(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&c))
}

/// Returns the first emoji in `text`, scanning left to right.
///
/// The result is a whole grapheme cluster, so skin-tone modifiers, ZWJ sequences, flags
/// and presentation selectors stay attached. Later emoji in the same string are ignored.
pub fn extract_emoji(text: &str) -> Option<&str> {
    text.graphemes(true)
        .find(|grapheme| grapheme.chars().next().is_some_and(is_emoji_char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_trailing_emoji() {
        assert_eq!(extract_emoji("Hello 👋"), Some("👋"));
        assert_eq!(extract_emoji("Ice cube 🧊"), Some("🧊"));
    }

    #[test]
    fn no_emoji() {
        assert_eq!(extract_emoji("No emoji here"), None);
        assert_eq!(extract_emoji(""), None);
    }

    #[test]
    fn returns_first_of_several() {
        assert_eq!(extract_emoji("Multiple emojis 🌟✨🌈"), Some("🌟"));
        assert_eq!(extract_emoji("✨ then 🌈"), Some("✨"));
    }

    #[test]
    fn keeps_flags_whole() {
        assert_eq!(extract_emoji("🇯🇵 Japan"), Some("🇯🇵"));
    }

    #[test]
    fn keeps_presentation_selector() {
        assert_eq!(extract_emoji("❤️ Love"), Some("\u{2764}\u{FE0F}"));
    }

    #[test]
    fn keeps_skin_tone_modifier() {
        assert_eq!(extract_emoji("👍🏽 Team"), Some("👍🏽"));
    }

    #[test]
    fn keeps_zwj_sequence_whole() {
        assert_eq!(extract_emoji("👨‍💻 Dev"), Some("👨\u{200D}💻"));
    }

    #[test]
    fn detects_symbol_block_emoji() {
        assert_eq!(extract_emoji("⚽ Sports"), Some("⚽"));
        assert_eq!(extract_emoji("⭐ Stars"), Some("⭐"));
        assert_eq!(extract_emoji("Coffee ☕"), Some("☕"));
        assert_eq!(extract_emoji("Ⓜ️ Metro"), Some("\u{24C2}\u{FE0F}"));
        assert_eq!(extract_emoji("Secrets ㊙️"), Some("\u{3299}\u{FE0F}"));
    }

    #[test]
    fn ignores_separator_and_cjk() {
        assert_eq!(extract_emoji("┋general┋"), None);
        assert_eq!(extract_emoji("雑談"), None);
        assert_eq!(extract_emoji("🎨┋Art"), Some("🎨"));
    }
}
