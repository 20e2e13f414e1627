//! `flex`
//!
//! [CSS Flexible Box Layout Level 1 § 7.1](https://www.w3.org/TR/css-flexbox-1/#flex-property)

use crate::declaration::{Longhand, PropertyMap};

/// [§ 7.1 The 'flex' Shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-property)
///
/// "none | [ <'flex-grow'> <'flex-shrink'>? || <'flex-basis'> ]"
///
/// Only the full three-value form is produced.
pub(super) fn flex(map: &PropertyMap) -> Option<String> {
    let grow = map.non_empty(Longhand::FlexGrow)?;
    let shrink = map.non_empty(Longhand::FlexShrink)?;
    let basis = map.non_empty(Longhand::FlexBasis)?;
    Some(format!("{grow} {shrink} {basis}"))
}
