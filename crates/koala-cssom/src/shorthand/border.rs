//! `border` and its sub-shorthands
//!
//! [CSS Backgrounds and Borders Level 3 § 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)

use crate::declaration::{Corner, Longhand, PropertyMap, Side};
use crate::values::{is_global, non_global_or_initial};

/// [§ 6.7 'border-image'](https://www.w3.org/TR/css-backgrounds-3/#border-image)
///
/// "The 'border' shorthand also resets 'border-image' to its initial value."
/// The border-image longhands therefore have to be set for `border` to
/// describe the element, but they are never part of its value.
const BORDER_IMAGE: [Longhand; 5] = [
    Longhand::BorderImageSource,
    Longhand::BorderImageSlice,
    Longhand::BorderImageWidth,
    Longhand::BorderImageOutset,
    Longhand::BorderImageRepeat,
];

/// The value shared by all four sides of `longhand`, if the top side is set
/// and the other three hold exactly the same text.
pub(super) fn uniform(map: &PropertyMap, longhand: fn(Side) -> Longhand) -> Option<&str> {
    let top = map.non_empty(longhand(Side::Top))?;
    Side::ALL
        .into_iter()
        .all(|side| map.value(longhand(side)) == Some(top))
        .then_some(top)
}

/// [§ 4.5 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "The 'border' property is a shorthand property for setting the same
/// width, color, and style for all four borders of a box. Unlike the
/// shorthand 'margin' and 'padding' properties, the 'border' property cannot
/// set different values on the four borders."
///
/// An `initial` style or color is left out of the value, since omitting a
/// component resets it to its initial value anyway.
pub(super) fn border(map: &PropertyMap) -> Option<String> {
    let width = uniform(map, Longhand::border_width)?;
    let style = uniform(map, Longhand::border_style)?;
    let color = uniform(map, Longhand::border_color)?;

    if BORDER_IMAGE
        .iter()
        .any(|&longhand| map.non_empty(longhand).is_none())
    {
        return None;
    }
    if [width, style, color]
        .into_iter()
        .any(|component| non_global_or_initial(component).is_none())
    {
        return None;
    }

    let mut values = vec![width];
    if style != "initial" {
        values.push(style);
    }
    if color != "initial" {
        values.push(color);
    }
    Some(values.join(" "))
}

/// [§ 4.5 'border-top', 'border-right', 'border-bottom', 'border-left'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "Value: `<line-width>` || `<line-style>` || `<color>`"
///
/// The side's width must be set; its style and color follow when set.
pub(super) fn border_side(map: &PropertyMap, side: Side) -> Option<String> {
    let width = map.non_empty(Longhand::border_width(side))?;
    let mut values = vec![width];
    values.extend(map.non_empty(Longhand::border_style(side)));
    values.extend(map.non_empty(Longhand::border_color(side)));
    Some(values.join(" "))
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "The four values for each radii are given in the order top-left,
/// top-right, bottom-right, bottom-left."
pub(super) fn border_radius(map: &PropertyMap) -> Option<String> {
    let mut values = Vec::with_capacity(Corner::ALL.len());
    for corner in Corner::ALL {
        let value = map.value(Longhand::border_radius(corner))?;
        if is_global(value) {
            return None;
        }
        values.push(value);
    }
    Some(values.join(" "))
}
