//! `margin` and `padding`
//!
//! [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)

use crate::declaration::{Longhand, PropertyMap, Side};
use crate::values::is_global;

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "If there are four values, they apply to the top, right, bottom, and left,
/// respectively."
///
/// Always serializes the four-value form. A CSS-wide keyword on any side
/// makes the shorthand unrepresentable, even when all four sides agree.
pub(super) fn four_sides(map: &PropertyMap, longhand: fn(Side) -> Longhand) -> Option<String> {
    let mut values = Vec::with_capacity(Side::ALL.len());
    for side in Side::ALL {
        let value = map.value(longhand(side))?;
        if is_global(value) {
            return None;
        }
        values.push(value);
    }
    Some(values.join(" "))
}
