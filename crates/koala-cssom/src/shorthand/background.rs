//! `background`
//!
//! [CSS Backgrounds and Borders Level 3 § 3.10](https://www.w3.org/TR/css-backgrounds-3/#background)

use crate::declaration::{Longhand, PropertyMap};

/// Longhands serialized into `background`, in output order.
const SERIALIZED: [Longhand; 5] = [
    Longhand::BackgroundColor,
    Longhand::BackgroundImage,
    Longhand::BackgroundRepeat,
    Longhand::BackgroundAttachment,
    Longhand::BackgroundPosition,
];

/// [§ 3.10 'background'](https://www.w3.org/TR/css-backgrounds-3/#background)
///
/// Either a color or an image has to be set. The value is every set longhand
/// of [`SERIALIZED`], space-separated, skipping the unset ones.
pub(super) fn background(map: &PropertyMap) -> Option<String> {
    if map.non_empty(Longhand::BackgroundColor).is_none()
        && map.non_empty(Longhand::BackgroundImage).is_none()
    {
        return None;
    }
    let values: Vec<&str> = SERIALIZED
        .iter()
        .filter_map(|&longhand| map.non_empty(longhand))
        .collect();
    Some(values.join(" "))
}
