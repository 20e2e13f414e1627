//! `font`
//!
//! [CSS Fonts Module Level 4 § 2.8](https://www.w3.org/TR/css-fonts-4/#font-prop)

use crate::declaration::{Longhand, PropertyMap};

/// Optional longhands that precede the size, in output order.
const PREFIX: [Longhand; 4] = [
    Longhand::FontStyle,
    Longhand::FontVariant,
    Longhand::FontWeight,
    Longhand::FontStretch,
];

/// [§ 2.8 Shorthand font property: the font property](https://www.w3.org/TR/css-fonts-4/#font-prop)
///
/// "[ [ <'font-style'> || <font-variant-css2> || <'font-weight'> ||
/// <font-stretch-css3> ]? <'font-size'> [ / <'line-height'> ]? <'font-family'> ]"
///
/// `font-size` and `font-family` are mandatory.
pub(super) fn font(map: &PropertyMap) -> Option<String> {
    let family = map.non_empty(Longhand::FontFamily)?;
    let size = map.non_empty(Longhand::FontSize)?;

    let size = match map.non_empty(Longhand::LineHeight) {
        Some(line_height) => format!("{size}/{line_height}"),
        None => size.to_string(),
    };

    let mut values: Vec<&str> = PREFIX
        .iter()
        .filter_map(|&longhand| map.non_empty(longhand))
        .collect();
    values.push(&size);
    values.push(family);
    Some(values.join(" "))
}
