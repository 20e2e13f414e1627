//! Numeric CSS values: lengths, percentages, angles, integers and numbers
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Every function here classifies a single, already trimmed token. Accepted
//! input is returned unchanged (borrowed) except for the bare `0`, which is
//! given the grammar's canonical unit.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// [§ 5 Distance Units: the `<length>` type](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions. A length is a dimension."
///
/// Units accepted: in, cm, em, mm, pt, pc, px, ex, rem, vh, vw, ch.
static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[-+]?[0-9]*\.?[0-9]+(in|cm|em|mm|pt|pc|px|ex|rem|vh|vw|ch))$")
        .expect("length grammar is a valid regex")
});

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "A `<percentage>` consists of a `<number>` immediately followed by a
/// percent sign '%'."
static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+%$").expect("percentage grammar is a valid regex")
});

/// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
///
/// Only whole, unsigned degrees are recognised.
static DEGREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+deg$").expect("degree grammar is a valid regex"));

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("integer grammar is a valid regex"));

// Unsigned; any number of dots.
static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("float grammar is a valid regex"));

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "For zero lengths the unit identifier is optional (i.e. can be
/// syntactically represented as the `<number>` 0)."
///
/// A bare `0` is normalized to `0px`.
#[must_use]
pub fn length(value: &str) -> Option<Cow<'_, str>> {
    if value == "0" {
        return Some(Cow::Borrowed("0px"));
    }
    LENGTH.is_match(value).then_some(Cow::Borrowed(value))
}

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// A bare `0` is normalized to `0%`.
#[must_use]
pub fn percentage(value: &str) -> Option<Cow<'_, str>> {
    if value == "0" {
        return Some(Cow::Borrowed("0%"));
    }
    PERCENTAGE.is_match(value).then_some(Cow::Borrowed(value))
}

/// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
///
/// A bare `0` is normalized to `0deg`.
#[must_use]
pub fn degree(value: &str) -> Option<Cow<'_, str>> {
    if value == "0" {
        return Some(Cow::Borrowed("0deg"));
    }
    DEGREE.is_match(value).then_some(Cow::Borrowed(value))
}

/// [§ 5.1 `<length-percentage>`](https://www.w3.org/TR/css-values-4/#mixed-percentages)
///
/// A length, or failing that a percentage. Because the length grammar is
/// tried first, a bare `0` normalizes to `0px`.
#[must_use]
pub fn measurement(value: &str) -> Option<Cow<'_, str>> {
    length(value).or_else(|| percentage(value))
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// `auto` (any case, returned lower-cased) or a [`measurement`].
#[must_use]
pub fn measurement_or_auto(value: &str) -> Option<Cow<'_, str>> {
    if value.eq_ignore_ascii_case("auto") {
        return Some(Cow::Borrowed("auto"));
    }
    measurement(value)
}

/// [§ 4.1 Integers](https://www.w3.org/TR/css-values-4/#integers)
///
/// Unsigned decimal digits only.
#[must_use]
pub fn integer(value: &str) -> Option<Cow<'_, str>> {
    INTEGER.is_match(value).then_some(Cow::Borrowed(value))
}

/// Digits and dots, unsigned.
///
/// NOTE: This is looser than [§ 4.2 `<number>`](https://www.w3.org/TR/css-values-4/#numbers):
/// `1.2.3` is accepted and `-1` is not.
#[must_use]
pub fn float(value: &str) -> Option<Cow<'_, str>> {
    FLOAT.is_match(value).then_some(Cow::Borrowed(value))
}
