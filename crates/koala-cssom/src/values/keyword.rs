//! CSS-wide keywords
//!
//! [§ 7.3 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)

use std::borrow::Cow;

/// [§ 7.3 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
///
/// "All CSS properties also accept the CSS-wide keyword values as the sole
/// component of their property value."
///
/// [§ 7.3.3 Rolling back cascade origins: the revert keyword](https://www.w3.org/TR/css-cascade-4/#default)
/// adds `revert` to the set.
pub const CSS_WIDE_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

/// [§ 7.3 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
///
/// Match `value` case-insensitively against the CSS-wide keywords and return
/// the keyword lower-cased. The empty string is not a keyword.
#[must_use]
pub fn global(value: &str) -> Option<&'static str> {
    CSS_WIDE_KEYWORDS
        .iter()
        .find(|keyword| keyword.eq_ignore_ascii_case(value))
        .copied()
}

/// Pass `value` through unless it is a CSS-wide keyword other than `initial`.
///
/// Used by the `border` shorthand, which can express `initial` by omitting the
/// component but cannot express `inherit`, `unset` or `revert` per side.
#[must_use]
pub fn non_global_or_initial(value: &str) -> Option<Cow<'_, str>> {
    match global(value) {
        None | Some("initial") => Some(Cow::Borrowed(value)),
        Some(_) => None,
    }
}

/// Whether `value` is one of the CSS-wide keywords.
#[must_use]
pub fn is_global(value: &str) -> bool {
    global(value).is_some()
}

/// Case-insensitively match `value` against a keyword list, returning the
/// canonical (lower-case) keyword from the list.
#[must_use]
pub(crate) fn match_keyword(value: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords
        .iter()
        .find(|keyword| keyword.eq_ignore_ascii_case(value))
        .copied()
}
