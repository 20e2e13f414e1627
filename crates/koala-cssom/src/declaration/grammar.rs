//! Per-property value grammars
//!
//! Each longhand accepts the CSS-wide keywords plus its own value definition,
//! built from the single-token grammars in [`crate::values`].

use std::borrow::Cow;
use std::ops::RangeInclusive;

use super::Longhand;
use crate::values::{
    color, degree, float, global, gradient, integer, length, match_keyword, measurement,
    measurement_or_auto, percentage, url,
};

/// [§ 4.3 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "`<line-style>` = none | hidden | dotted | dashed | solid | double | groove
/// | ridge | inset | outset"
const LINE_STYLES: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// [§ 4.4 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "`<line-width>` = `<length [0,∞]>` | thin | medium | thick"
const LINE_WIDTHS: [&str; 3] = ["thin", "medium", "thick"];

/// [§ 6.5 'border-image-repeat'](https://www.w3.org/TR/css-backgrounds-3/#border-image-repeat)
const IMAGE_REPEATS: [&str; 4] = ["stretch", "repeat", "round", "space"];

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "`<repeat-style>` = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}"
const REPEAT_STYLES: [&str; 4] = ["repeat", "space", "round", "no-repeat"];

/// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
const ATTACHMENTS: [&str; 3] = ["scroll", "fixed", "local"];

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
const POSITION_KEYWORDS: [&str; 5] = ["left", "right", "top", "bottom", "center"];

/// [§ 7.3.3 'flex-basis'](https://www.w3.org/TR/css-flexbox-1/#flex-basis-property)
///
/// "content | <'width'>"
const FLEX_BASIS_KEYWORDS: [&str; 4] = ["content", "max-content", "min-content", "fit-content"];

/// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
const FONT_STYLES: [&str; 3] = ["normal", "italic", "oblique"];

/// [CSS 2.1 § 15.5 'font-variant'](https://www.w3.org/TR/CSS2/fonts.html#font-variant-prop)
const FONT_VARIANTS: [&str; 2] = ["normal", "small-caps"];

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
const FONT_WEIGHTS: [&str; 4] = ["normal", "bold", "bolder", "lighter"];

/// [§ 3.4 'font-stretch'](https://www.w3.org/TR/css-fonts-4/#font-stretch-prop)
const FONT_STRETCHES: [&str; 9] = [
    "normal",
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

/// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// `<absolute-size>` and `<relative-size>` keywords.
const FONT_SIZES: [&str; 10] = [
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "smaller", "larger",
];

impl Longhand {
    /// Validate and normalize a raw declared value for this longhand.
    ///
    /// `raw` is trimmed first. A CSS-wide keyword is accepted for every
    /// longhand and returned lower-cased; anything else must match the
    /// longhand's own grammar. Keywords match case-insensitively and come
    /// back lower-cased, numeric tokens come back as written (apart from a
    /// bare `0` gaining its unit), and multi-token values are re-joined with
    /// single spaces.
    #[must_use]
    pub fn parse_value(self, raw: &str) -> Option<Cow<'_, str>> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        if let Some(keyword) = global(value) {
            return Some(Cow::Borrowed(keyword));
        }

        match self {
            Self::MarginTop | Self::MarginRight | Self::MarginBottom | Self::MarginLeft => {
                measurement_or_auto(value)
            }
            Self::PaddingTop | Self::PaddingRight | Self::PaddingBottom | Self::PaddingLeft => {
                measurement(value)
            }
            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth => keyword(value, &LINE_WIDTHS).or_else(|| length(value)),
            Self::BorderTopStyle
            | Self::BorderRightStyle
            | Self::BorderBottomStyle
            | Self::BorderLeftStyle => keyword(value, &LINE_STYLES),
            Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor
            | Self::BackgroundColor => color(value),
            Self::BorderTopLeftRadius
            | Self::BorderTopRightRadius
            | Self::BorderBottomRightRadius
            | Self::BorderBottomLeftRadius => components(value, 1..=2, measurement),
            Self::BorderImageSource | Self::BackgroundImage => image(value),
            Self::BorderImageSlice => border_image_slice(value),
            Self::BorderImageWidth => components(value, 1..=4, |token| {
                keyword(token, &["auto"])
                    .or_else(|| measurement(token))
                    .or_else(|| float(token))
            }),
            Self::BorderImageOutset => {
                components(value, 1..=4, |token| length(token).or_else(|| float(token)))
            }
            Self::BorderImageRepeat => {
                components(value, 1..=2, |token| keyword(token, &IMAGE_REPEATS))
            }
            Self::BackgroundRepeat => background_repeat(value),
            Self::BackgroundAttachment => keyword(value, &ATTACHMENTS),
            Self::BackgroundPosition => components(value, 1..=4, |token| {
                keyword(token, &POSITION_KEYWORDS).or_else(|| measurement(token))
            }),
            Self::FlexGrow | Self::FlexShrink => float(value),
            Self::FlexBasis => {
                measurement_or_auto(value).or_else(|| keyword(value, &FLEX_BASIS_KEYWORDS))
            }
            Self::FontStyle => font_style(value),
            Self::FontVariant => keyword(value, &FONT_VARIANTS),
            Self::FontWeight => font_weight(value),
            Self::FontStretch => keyword(value, &FONT_STRETCHES).or_else(|| percentage(value)),
            Self::FontSize => keyword(value, &FONT_SIZES).or_else(|| measurement(value)),
            // [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
            // "normal | <number [0,∞]> | <length-percentage [0,∞]>"
            Self::LineHeight => keyword(value, &["normal"])
                .or_else(|| float(value))
                .or_else(|| measurement(value)),
            // [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
            // Family lists are kept verbatim.
            Self::FontFamily => Some(Cow::Borrowed(value)),
        }
    }
}

/// A single keyword from `keywords`, lower-cased.
fn keyword<'a>(value: &'a str, keywords: &[&'static str]) -> Option<Cow<'a, str>> {
    match_keyword(value, keywords).map(Cow::Borrowed)
}

/// A space-separated list of between `count.start()` and `count.end()`
/// tokens, each accepted by `grammar`.
fn components<'a, F>(value: &'a str, count: RangeInclusive<usize>, grammar: F) -> Option<Cow<'a, str>>
where
    F: Fn(&'a str) -> Option<Cow<'a, str>>,
{
    let parts = value
        .split_ascii_whitespace()
        .map(grammar)
        .collect::<Option<Vec<_>>>()?;
    count.contains(&parts.len()).then(|| rejoin(value, &parts))
}

/// Join normalized tokens, borrowing `original` when nothing changed.
fn rejoin<'a>(original: &'a str, parts: &[Cow<'_, str>]) -> Cow<'a, str> {
    let joined = parts.join(" ");
    if joined == original {
        Cow::Borrowed(original)
    } else {
        Cow::Owned(joined)
    }
}

/// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
///
/// "`<bg-image>` = `<image>` | none"
fn image(value: &str) -> Option<Cow<'_, str>> {
    url(value).or_else(|| gradient(value))
}

/// [§ 6.3 'border-image-slice'](https://www.w3.org/TR/css-backgrounds-3/#border-image-slice)
///
/// "`[<number [0,∞]> | <percentage [0,∞]>]{1,4} && fill?`"
fn border_image_slice(value: &str) -> Option<Cow<'_, str>> {
    let tokens: Vec<&str> = value.split_ascii_whitespace().collect();
    let fill = tokens
        .iter()
        .position(|token| token.eq_ignore_ascii_case("fill"));
    let numbers = match fill {
        None => &tokens[..],
        Some(0) => &tokens[1..],
        Some(index) if index + 1 == tokens.len() => &tokens[..index],
        Some(_) => return None,
    };
    if !(1..=4).contains(&numbers.len()) {
        return None;
    }

    let mut parts = numbers
        .iter()
        .copied()
        .map(|token| float(token).or_else(|| percentage(token)))
        .collect::<Option<Vec<_>>>()?;
    match fill {
        Some(0) => parts.insert(0, Cow::Borrowed("fill")),
        Some(_) => parts.push(Cow::Borrowed("fill")),
        None => {}
    }
    Some(rejoin(value, &parts))
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
fn background_repeat(value: &str) -> Option<Cow<'_, str>> {
    keyword(value, &["repeat-x", "repeat-y"])
        .or_else(|| components(value, 1..=2, |token| keyword(token, &REPEAT_STYLES)))
}

/// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
///
/// "normal | italic | oblique `<angle [-90deg,90deg]>`?"
fn font_style(value: &str) -> Option<Cow<'_, str>> {
    let mut tokens = value.split_ascii_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(style), None, None) => keyword(style, &FONT_STYLES),
        (Some(style), Some(angle), None) if style.eq_ignore_ascii_case("oblique") => {
            let angle = degree(angle)?;
            Some(rejoin(value, &[Cow::Borrowed("oblique"), angle]))
        }
        _ => None,
    }
}

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// "`<font-weight-absolute>` = [normal | bold | `<number [1,1000]>`]", plus the
/// relative keywords `bolder` and `lighter`.
fn font_weight(value: &str) -> Option<Cow<'_, str>> {
    keyword(value, &FONT_WEIGHTS).or_else(|| {
        let weight = integer(value)?;
        let in_range = weight
            .parse::<u16>()
            .is_ok_and(|weight| (1..=1000).contains(&weight));
        in_range.then_some(weight)
    })
}
