//! CSS `<url>` values
//!
//! [§ 4.5 Resource Locators: the `<url>` type](https://www.w3.org/TR/css-values-4/#urls)

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `url(` optional whitespace, an interior without `)`, then `)`.
static URL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^url\(\s*([^)]*)\s*\)$").expect("url() grammar is a valid regex")
});

/// [§ 4.5 Resource Locators](https://www.w3.org/TR/css-values-4/#urls)
///
/// "A `<url>` is a functional notation ... `url( <string> <url-modifier>* )`"
///
/// Accepts `none` and `inherit` (any case, returned lower-cased) or a
/// `url(...)` function whose interior is a valid URL token:
///
/// - A quoted interior must open and close with the same quote character;
///   the quotes are stripped before the interior is scanned.
/// - [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token):
///   the interior may not contain unescaped parentheses, whitespace or quotes.
///   A backslash escapes the following character.
///
/// The original `url(...)` text is returned, not the unwrapped interior.
#[must_use]
pub fn url(value: &str) -> Option<Cow<'_, str>> {
    if value.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case("none") {
        return Some(Cow::Borrowed("none"));
    }
    if value.eq_ignore_ascii_case("inherit") {
        return Some(Cow::Borrowed("inherit"));
    }

    let captures = URL_FUNCTION.captures(value)?;
    let interior = unquote(captures.get(1).map_or("", |m| m.as_str()))?;

    is_url_token(interior).then_some(Cow::Borrowed(value))
}

/// Strip matching surrounding quotes. Returns `None` when the opening quote
/// has no matching closing quote.
fn unquote(interior: &str) -> Option<&str> {
    let Some(quote @ ('"' | '\'')) = interior.chars().next() else {
        return Some(interior);
    };
    if interior.len() < 2 || !interior.ends_with(quote) {
        return None;
    }
    Some(&interior[1..interior.len() - 1])
}

/// Scan an unquoted URL body for characters that would end the token.
fn is_url_token(body: &str) -> bool {
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '(' | ')' | ' ' | '\t' | '\n' | '\'' | '"' => return false,
            '\\' => {
                let _ = chars.next();
            }
            _ => {}
        }
    }
    true
}
