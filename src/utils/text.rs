//! Text formatting helpers
//!
//! Pure string functions shared by the prompts and the CLI commands.
//! Lengths are counted in `char`s, never bytes, so multi-byte input is
//! never split in the middle of a code point.
//!
//! # Examples
//!
//! ```
//! use toolbelt::utils::text::{capitalize_each_word, truncate};
//!
//! assert_eq!(capitalize_each_word("hello big world", " "), "Hello Big World");
//! assert_eq!(truncate("A decently long string", 10, true), "A decently...");
//! ```

/// Suffix appended by [`truncate`] when it shortens a string
pub const ELLIPSIS: &str = "...";

/// Default maximum length used by the CLI `truncate` command
pub const DEFAULT_TRUNCATE_LENGTH: usize = 25;

/// Capitalize each word separated by `delimiter`
///
/// Each word gets an uppercase first character and a lowercase remainder.
pub fn capitalize_each_word(s: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return capitalize(s);
    }

    s.split(delimiter)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Strip leading and trailing whitespace from every line
///
/// Line structure is kept, including a trailing newline.
pub fn strip_each_line(s: &str) -> String {
    s.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Truncate a string to at most `length` characters
///
/// With `ellipsis` the string is only cut when it is longer than
/// `length + 3`, and the cut text gets `"..."` appended. The kept part is
/// trimmed so the ellipsis never follows a space.
pub fn truncate(s: &str, length: usize, ellipsis: bool) -> String {
    let threshold = if ellipsis {
        length.saturating_add(ELLIPSIS.len())
    } else {
        length
    };

    if s.chars().count() <= threshold {
        return s.to_string();
    }

    let kept: String = s.chars().take(length).collect();
    let kept = kept.trim();

    if ellipsis {
        format!("{}{}", kept, ELLIPSIS)
    } else {
        kept.to_string()
    }
}

/// Return every item whose projected key equals `value`
pub fn search_by<'a, T, K, F>(items: &'a [T], key: F, value: &K) -> Vec<&'a T>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    items.iter().filter(|item| key(item) == value).collect()
}
