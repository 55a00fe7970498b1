use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// 8-4-4-4-12 hex groups, hyphens optional between groups.
static RE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{12}").unwrap()
});

// Digits plus the separators that show up in formatted numbers. A lone `-`, `.`
// or `,` is stripped too.
static RE_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-.,0-9]+").unwrap()
});

/// Removes every identifier-shaped substring.
pub fn strip_identifiers(text: &str) -> Cow<'_, str> {
    RE_IDENTIFIER.replace_all(text, "")
}

/// Removes every maximal run of `-`, `.`, `,` and ASCII digits.
pub fn strip_digits(text: &str) -> Cow<'_, str> {
    RE_DIGITS.replace_all(text, "")
}

/// Applies the enabled strip passes to a key before comparison.
///
/// Identifiers go first: their hyphens would otherwise be eaten by the digit
/// pass and leave hex letters behind. With both flags off the input is
/// borrowed back unchanged.
pub fn normalize(text: &str, strip_digits_enabled: bool, strip_identifiers_enabled: bool) -> Cow<'_, str> {
    let text = if strip_identifiers_enabled {
        strip_identifiers(text)
    } else {
        Cow::Borrowed(text)
    };
    if !strip_digits_enabled {
        return text;
    }
    match text {
        Cow::Borrowed(t) => strip_digits(t),
        Cow::Owned(t) => Cow::Owned(strip_digits(&t).into_owned()),
    }
}
