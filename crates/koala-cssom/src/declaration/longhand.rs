//! Longhand property names
//!
//! [CSS Cascading Level 4 § 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property. ...
//! The properties it sets are called its sub-properties or longhands."

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::CssomError;

/// A longhand property that contributes to one of the supported shorthands.
///
/// The string form is the CSS property name (`margin-top`, `line-height`, ...),
/// parsed case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Longhand {
    // [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,

    // [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,

    // [§ 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)
    BorderImageSource,
    BorderImageSlice,
    BorderImageWidth,
    BorderImageOutset,
    BorderImageRepeat,

    // [§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomRightRadius,
    BorderBottomLeftRadius,

    // [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
    BackgroundColor,
    BackgroundImage,
    BackgroundRepeat,
    BackgroundAttachment,
    BackgroundPosition,

    // [§ 7 Flexibility](https://www.w3.org/TR/css-flexbox-1/#flexibility)
    FlexGrow,
    FlexShrink,
    FlexBasis,

    // [§ 2 Font Family and Font Properties](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    FontStyle,
    FontVariant,
    FontWeight,
    FontStretch,
    FontSize,
    LineHeight,
    FontFamily,
}

/// [§ 1 Introduction](https://www.w3.org/TR/css-backgrounds-3/#intro)
///
/// The four physical sides of a box, in shorthand serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

impl Side {
    /// "top, right, bottom, left": the order every four-value box shorthand uses.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// The four corners, in the order "top-left, top-right, bottom-right,
/// bottom-left".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// `border-top-left-radius`
    TopLeft,
    /// `border-top-right-radius`
    TopRight,
    /// `border-bottom-right-radius`
    BottomRight,
    /// `border-bottom-left-radius`
    BottomLeft,
}

impl Corner {
    /// Serialization order of the `border-radius` shorthand.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];
}

impl Longhand {
    /// The CSS property name, e.g. `"margin-top"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a longhand by its CSS property name, ASCII case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::UnknownProperty`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, CssomError> {
        let name = name.trim();
        name.parse().map_err(|_| CssomError::UnknownProperty(name.to_string()))
    }

    /// `margin-<side>`
    #[must_use]
    pub const fn margin(side: Side) -> Self {
        match side {
            Side::Top => Self::MarginTop,
            Side::Right => Self::MarginRight,
            Side::Bottom => Self::MarginBottom,
            Side::Left => Self::MarginLeft,
        }
    }

    /// `padding-<side>`
    #[must_use]
    pub const fn padding(side: Side) -> Self {
        match side {
            Side::Top => Self::PaddingTop,
            Side::Right => Self::PaddingRight,
            Side::Bottom => Self::PaddingBottom,
            Side::Left => Self::PaddingLeft,
        }
    }

    /// `border-<side>-width`
    #[must_use]
    pub const fn border_width(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopWidth,
            Side::Right => Self::BorderRightWidth,
            Side::Bottom => Self::BorderBottomWidth,
            Side::Left => Self::BorderLeftWidth,
        }
    }

    /// `border-<side>-style`
    #[must_use]
    pub const fn border_style(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopStyle,
            Side::Right => Self::BorderRightStyle,
            Side::Bottom => Self::BorderBottomStyle,
            Side::Left => Self::BorderLeftStyle,
        }
    }

    /// `border-<side>-color`
    #[must_use]
    pub const fn border_color(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopColor,
            Side::Right => Self::BorderRightColor,
            Side::Bottom => Self::BorderBottomColor,
            Side::Left => Self::BorderLeftColor,
        }
    }

    /// `border-<corner>-radius`
    #[must_use]
    pub const fn border_radius(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Self::BorderTopLeftRadius,
            Corner::TopRight => Self::BorderTopRightRadius,
            Corner::BottomRight => Self::BorderBottomRightRadius,
            Corner::BottomLeft => Self::BorderBottomLeftRadius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_are_css_property_names() {
        assert_eq!(Longhand::MarginTop.name(), "margin-top");
        assert_eq!(Longhand::BorderBottomLeftRadius.name(), "border-bottom-left-radius");
        assert_eq!(Longhand::LineHeight.to_string(), "line-height");
        assert_eq!(Longhand::from_str("Border-Image-Source"), Ok(Longhand::BorderImageSource));
        assert!(Longhand::from_str("margin").is_err());
    }

    #[test]
    fn test_every_name_round_trips() {
        for longhand in Longhand::iter() {
            assert_eq!(Longhand::from_str(longhand.name()), Ok(longhand));
        }
        assert_eq!(Longhand::iter().count(), 44);
    }

    #[test]
    fn test_side_constructors() {
        assert_eq!(Longhand::border_style(Side::Left), Longhand::BorderLeftStyle);
        assert_eq!(Longhand::padding(Side::Bottom), Longhand::PaddingBottom);
        assert_eq!(
            Longhand::border_radius(Corner::BottomLeft),
            Longhand::BorderBottomLeftRadius
        );
    }
}
