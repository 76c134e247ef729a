use super::*;

fn paint(name: &str, category_name: Option<&str>) -> Option<String> {
    PaintTransform.transform(&text_channel(1, name, category_name))
}

fn strip(name: &str) -> Option<String> {
    StripTransform.transform(&text_channel(1, name, None))
}

/// Tests painting a plain channel name.
///
/// Expected: emoji from the category joined to the name with the separator
#[test]
fn paints_plain_name() {
    assert_eq!(
        paint("general", Some("🎨 Art")),
        Some("🎨┋general".to_string())
    );
}

/// Tests that a channel already carrying the category emoji is left alone.
///
/// Expected: None
#[test]
fn paint_is_noop_when_already_painted() {
    assert_eq!(paint("🎨┋general", Some("🎨")), None);
}

/// Tests that painting replaces a previous prefix instead of stacking.
///
/// Expected: only the last segment survives, including for stacked prefixes
#[test]
fn paint_replaces_existing_prefixes() {
    assert_eq!(
        paint("🔥┋general", Some("🎨 Art")),
        Some("🎨┋general".to_string())
    );
    assert_eq!(
        paint("🔥┋🌊┋general", Some("🎨 Art")),
        Some("🎨┋general".to_string())
    );
}

/// Tests painting twice in a row.
///
/// Expected: the second application reports not updated
#[test]
fn paint_twice_is_idempotent() {
    for name in ["general", "🔥┋memes", "a┋b┋c", "┋"] {
        let first = paint(name, Some("Lounge 🛋️")).unwrap();
        assert_eq!(paint(&first, Some("Lounge 🛋️")), None, "name: {name}");
    }
}

/// Tests channels without a category or with an emoji-less category.
///
/// Expected: None
#[test]
fn paint_needs_category_emoji() {
    assert_eq!(paint("general", None), None);
    for name in ["general", "🎨┋general", "off-topic"] {
        assert_eq!(paint(name, Some("Text Channels")), None);
    }
}

/// Tests that paint uses only the first emoji of the category name.
///
/// Expected: first emoji as prefix
#[test]
fn paint_uses_first_category_emoji() {
    assert_eq!(
        paint("stars", Some("Multiple emojis 🌟✨🌈")),
        Some("🌟┋stars".to_string())
    );
}

/// Tests stripping a single prefix.
///
/// Expected: base name
#[test]
fn strips_prefix() {
    assert_eq!(strip("🎨┋general"), Some("general".to_string()));
}

/// Tests stripping a stacked prefix.
///
/// Expected: the text after the last separator
#[test]
fn strips_to_last_segment() {
    assert_eq!(strip("🔥┋🌊┋general"), Some("general".to_string()));
}

/// Tests stripping names without a separator.
///
/// Expected: None
#[test]
fn strip_without_separator_is_noop() {
    assert_eq!(strip("general"), None);
    assert_eq!(strip("🎨general"), None);
}

/// Tests stripping twice in a row.
///
/// Expected: the second application reports not updated
#[test]
fn strip_twice_is_idempotent() {
    for name in ["🎨┋general", "a┋b┋c", "┋x"] {
        let first = strip(name).unwrap();
        assert_eq!(strip(&first), None, "name: {name}");
    }
}

/// Tests stripping a name that ends in the separator.
///
/// Expected: None, since the result would be an empty name
#[test]
fn strip_never_produces_empty_name() {
    assert_eq!(strip("general┋"), None);
    assert_eq!(strip("┋"), None);
}
