use std::borrow::Cow;

/// How a piece of copy is drawn with raylib's built-in font, which only
/// covers printable ASCII.
#[derive(Debug, PartialEq, Eq)]
pub enum Glyphs<'a> {
    Text(Cow<'a, str>),
    Heart,
}

pub fn prepare(text: &str) -> Glyphs<'_> {
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| matches!(c, '\u{2764}' | '\u{fe0f}')) {
        return Glyphs::Heart;
    }
    Glyphs::Text(to_ascii(text))
}

pub fn to_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            c if c.is_ascii() => out.push(c),
            '\u{2026}' => out.push_str("..."),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            _ => {}
        }
    }
    Cow::Owned(out.trim().to_string())
}

/// Greedy word wrap. `fits` decides whether a candidate line is narrow enough;
/// a single word wider than the limit gets a line of its own.
pub fn wrap<'a>(text: &'a str, fits: impl Fn(&str) -> bool) -> Vec<Cow<'a, str>> {
    let mut lines: Vec<Cow<'a, str>> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if fits(&candidate) {
            current = candidate;
        } else {
            lines.push(Cow::Owned(std::mem::take(&mut current)));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        if lines.is_empty() && current == text {
            lines.push(Cow::Borrowed(text));
        } else {
            lines.push(Cow::Owned(current));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through_borrowed() {
        assert!(matches!(to_ascii("Sleepless nights."), Cow::Borrowed(_)));
    }

    #[test]
    fn ellipsis_becomes_three_dots() {
        assert_eq!(to_ascii("Every journey is different…"), "Every journey is different...");
        assert_eq!(to_ascii("Yet… they never gave up."), "Yet... they never gave up.");
    }

    #[test]
    fn unsupported_symbols_are_dropped() {
        assert_eq!(to_ascii("🎵 Add music"), "Add music");
    }

    #[test]
    fn heart_emoji_is_drawn_as_shape() {
        assert_eq!(prepare("❤️"), Glyphs::Heart);
        assert_eq!(prepare(" \u{2764} "), Glyphs::Heart);
        assert_eq!(prepare("I ❤️ you"), Glyphs::Text(Cow::Borrowed("I  you")));
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(prepare(""), Glyphs::Text(Cow::Borrowed("")));
        assert!(wrap("", |_| true).is_empty());
    }

    #[test]
    fn wraps_on_width() {
        let lines = wrap("But some journeys test every bit", |s| s.len() <= 12);
        assert_eq!(lines, vec!["But some", "journeys", "test every", "bit"]);
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap("a extraordinarily b", |s| s.len() <= 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn short_text_is_one_borrowed_line() {
        let lines = wrap("Fear.", |_| true);
        assert!(matches!(lines.as_slice(), [Cow::Borrowed("Fear.")]));
    }
}
