//! Shorthand synthesis
//!
//! [CSSOM § 6.7 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
//!
//! "To serialize a CSS declaration block ... If all properties that map to
//! shorthand are not in longhands, continue with the steps labeled shorthand
//! loop. ... Let value be the result of invoking serialize a CSS value of
//! current longhands. If value is the empty string, continue with the steps
//! labeled shorthand loop."
//!
//! Each [`Shorthand`] family turns the longhand entries of a [`PropertyMap`]
//! into one shorthand value, or reports that the longhands cannot be expressed
//! losslessly (`Ok(None)`). A shorthand is all-or-nothing: no partial value is
//! ever produced.
//!
//! # Missing required longhands
//!
//! Some families ([`Shorthand::required`]) always read every one of their
//! longhands. Calling [`Shorthand::synthesize`] on a map with no entry for one
//! of those keys is a caller error and returns
//! [`CssomError::MissingLonghand`]. A required key whose entry has an absent
//! value is merely unset: the result is `Ok(None)`. The check happens once,
//! here, before any family rule runs.
//!
//! # Importance
//!
//! The important flag of every family is [`aggregate_importance`] over
//! [`Shorthand::longhands`].
//!
//! [`aggregate_importance`]: crate::declaration::aggregate_importance

mod background;
mod border;
mod box_model;
mod flex;
mod font;

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::declaration::{Longhand, PropertyMap, Side};
use crate::error::CssomError;

/// A shorthand property this crate can synthesize.
///
/// The string form is the CSS property name, parsed case-insensitively.
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
pub enum Shorthand {
    /// [§ 8.3 'margin'](https://www.w3.org/TR/CSS2/box.html#propdef-margin)
    Margin,
    /// [§ 8.4 'padding'](https://www.w3.org/TR/CSS2/box.html#propdef-padding)
    Padding,
    /// [§ 4.5 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    Border,
    /// [§ 4.5 'border-top'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    BorderTop,
    /// [§ 4.5 'border-right'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    BorderRight,
    /// [§ 4.5 'border-bottom'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    BorderBottom,
    /// [§ 4.5 'border-left'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    BorderLeft,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderColor,
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderWidth,
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderStyle,
    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    BorderRadius,
    /// [§ 3.10 'background'](https://www.w3.org/TR/css-backgrounds-3/#background)
    Background,
    /// [§ 7.1 'flex'](https://www.w3.org/TR/css-flexbox-1/#flex-property)
    Flex,
    /// [§ 2.8 'font'](https://www.w3.org/TR/css-fonts-4/#font-prop)
    Font,
}

/// A synthesized shorthand declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShorthandValue {
    /// The serialized shorthand value.
    pub value: String,
    /// Whether the shorthand is `!important`.
    pub important: bool,
}

impl ShorthandValue {
    /// Create a shorthand value.
    #[must_use]
    pub fn new(value: impl Into<String>, important: bool) -> Self {
        Self {
            value: value.into(),
            important,
        }
    }
}

impl fmt::Display for ShorthandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.important {
            write!(f, "{} !important", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

/// Outcome of [`Shorthand::synthesize`]: `Ok(None)` when the longhands cannot
/// be represented by the shorthand.
pub type ShorthandResult = Result<Option<ShorthandValue>, CssomError>;

const MARGIN: [Longhand; 4] = [
    Longhand::MarginTop,
    Longhand::MarginRight,
    Longhand::MarginBottom,
    Longhand::MarginLeft,
];

const PADDING: [Longhand; 4] = [
    Longhand::PaddingTop,
    Longhand::PaddingRight,
    Longhand::PaddingBottom,
    Longhand::PaddingLeft,
];

const BORDER: [Longhand; 12] = [
    Longhand::BorderTopWidth,
    Longhand::BorderRightWidth,
    Longhand::BorderBottomWidth,
    Longhand::BorderLeftWidth,
    Longhand::BorderTopStyle,
    Longhand::BorderRightStyle,
    Longhand::BorderBottomStyle,
    Longhand::BorderLeftStyle,
    Longhand::BorderTopColor,
    Longhand::BorderRightColor,
    Longhand::BorderBottomColor,
    Longhand::BorderLeftColor,
];

const BORDER_TOP: [Longhand; 3] = [
    Longhand::BorderTopWidth,
    Longhand::BorderTopStyle,
    Longhand::BorderTopColor,
];

const BORDER_RIGHT: [Longhand; 3] = [
    Longhand::BorderRightWidth,
    Longhand::BorderRightStyle,
    Longhand::BorderRightColor,
];

const BORDER_BOTTOM: [Longhand; 3] = [
    Longhand::BorderBottomWidth,
    Longhand::BorderBottomStyle,
    Longhand::BorderBottomColor,
];

const BORDER_LEFT: [Longhand; 3] = [
    Longhand::BorderLeftWidth,
    Longhand::BorderLeftStyle,
    Longhand::BorderLeftColor,
];

const BORDER_COLOR: [Longhand; 4] = [
    Longhand::BorderTopColor,
    Longhand::BorderRightColor,
    Longhand::BorderBottomColor,
    Longhand::BorderLeftColor,
];

const BORDER_WIDTH: [Longhand; 4] = [
    Longhand::BorderTopWidth,
    Longhand::BorderRightWidth,
    Longhand::BorderBottomWidth,
    Longhand::BorderLeftWidth,
];

const BORDER_STYLE: [Longhand; 4] = [
    Longhand::BorderTopStyle,
    Longhand::BorderRightStyle,
    Longhand::BorderBottomStyle,
    Longhand::BorderLeftStyle,
];

const BORDER_RADIUS: [Longhand; 4] = [
    Longhand::BorderTopLeftRadius,
    Longhand::BorderTopRightRadius,
    Longhand::BorderBottomRightRadius,
    Longhand::BorderBottomLeftRadius,
];

const BACKGROUND: [Longhand; 5] = [
    Longhand::BackgroundColor,
    Longhand::BackgroundImage,
    Longhand::BackgroundRepeat,
    Longhand::BackgroundAttachment,
    Longhand::BackgroundPosition,
];

const FLEX: [Longhand; 3] = [Longhand::FlexGrow, Longhand::FlexShrink, Longhand::FlexBasis];

const FONT: [Longhand; 7] = [
    Longhand::FontStyle,
    Longhand::FontVariant,
    Longhand::FontWeight,
    Longhand::FontStretch,
    Longhand::FontSize,
    Longhand::LineHeight,
    Longhand::FontFamily,
];

impl Shorthand {
    /// The CSS property name, e.g. `"border-top"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a shorthand by its CSS property name, ASCII case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::UnknownShorthand`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, CssomError> {
        let name = name.trim();
        name.parse().map_err(|_| CssomError::UnknownShorthand(name.to_string()))
    }

    /// The longhands whose important flags decide the shorthand's.
    #[must_use]
    pub const fn longhands(self) -> &'static [Longhand] {
        match self {
            Self::Margin => &MARGIN,
            Self::Padding => &PADDING,
            Self::Border => &BORDER,
            Self::BorderTop => &BORDER_TOP,
            Self::BorderRight => &BORDER_RIGHT,
            Self::BorderBottom => &BORDER_BOTTOM,
            Self::BorderLeft => &BORDER_LEFT,
            Self::BorderColor => &BORDER_COLOR,
            Self::BorderWidth => &BORDER_WIDTH,
            Self::BorderStyle => &BORDER_STYLE,
            Self::BorderRadius => &BORDER_RADIUS,
            Self::Background => &BACKGROUND,
            Self::Flex => &FLEX,
            Self::Font => &FONT,
        }
    }

    /// Longhands that must have an entry in the map before this shorthand
    /// can be synthesized at all.
    ///
    /// Only the families that serialize every one of their longhands
    /// unconditionally have required keys. The others check for their
    /// longhands as part of their own rules and treat a missing entry as
    /// "not representable".
    #[must_use]
    pub const fn required(self) -> &'static [Longhand] {
        match self {
            Self::Margin => &MARGIN,
            Self::Padding => &PADDING,
            Self::BorderRadius => &BORDER_RADIUS,
            Self::Border
            | Self::BorderTop
            | Self::BorderRight
            | Self::BorderBottom
            | Self::BorderLeft
            | Self::BorderColor
            | Self::BorderWidth
            | Self::BorderStyle
            | Self::Background
            | Self::Flex
            | Self::Font => &[],
        }
    }

    /// Synthesize this shorthand from the longhand entries in `map`.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::MissingLonghand`] if `map` has no entry for one
    /// of [`Self::required`]. Inconsistent or incomplete longhands are not an
    /// error; they yield `Ok(None)`.
    pub fn synthesize(self, map: &PropertyMap) -> ShorthandResult {
        if let Some(&longhand) = self
            .required()
            .iter()
            .find(|&&longhand| !map.contains(longhand))
        {
            return Err(CssomError::MissingLonghand {
                shorthand: self,
                longhand,
            });
        }

        let value = match self {
            Self::Margin => box_model::four_sides(map, Longhand::margin),
            Self::Padding => box_model::four_sides(map, Longhand::padding),
            Self::Border => border::border(map),
            Self::BorderTop => border::border_side(map, Side::Top),
            Self::BorderRight => border::border_side(map, Side::Right),
            Self::BorderBottom => border::border_side(map, Side::Bottom),
            Self::BorderLeft => border::border_side(map, Side::Left),
            Self::BorderColor => border::uniform(map, Longhand::border_color).map(str::to_string),
            Self::BorderWidth => border::uniform(map, Longhand::border_width).map(str::to_string),
            Self::BorderStyle => border::uniform(map, Longhand::border_style).map(str::to_string),
            Self::BorderRadius => border::border_radius(map),
            Self::Background => background::background(map),
            Self::Flex => flex::flex(map),
            Self::Font => font::font(map),
        };

        Ok(value.map(|value| ShorthandValue {
            value,
            important: map.is_important(self.longhands()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::PropertyValue;
    use strum::IntoEnumIterator;

    #[test]
    fn test_required_keys_are_contributing_longhands() {
        for shorthand in Shorthand::iter() {
            for longhand in shorthand.required() {
                assert!(shorthand.longhands().contains(longhand));
            }
        }
    }

    #[test]
    fn test_missing_required_key_is_reported() {
        let map: PropertyMap = [
            (Longhand::MarginTop, PropertyValue::new("1px", true)),
            (Longhand::MarginRight, PropertyValue::new("1px", true)),
            (Longhand::MarginLeft, PropertyValue::new("1px", true)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            Shorthand::Margin.synthesize(&map),
            Err(CssomError::MissingLonghand {
                shorthand: Shorthand::Margin,
                longhand: Longhand::MarginBottom,
            })
        );
    }

    #[test]
    fn test_empty_map_is_not_an_error_for_gated_families() {
        let map = PropertyMap::new();
        for shorthand in Shorthand::iter().filter(|s| s.required().is_empty()) {
            assert_eq!(shorthand.synthesize(&map), Ok(None), "{shorthand}");
        }
    }

    #[test]
    fn test_display_appends_important() {
        assert_eq!(ShorthandValue::new("1px", true).to_string(), "1px !important");
        assert_eq!(ShorthandValue::new("1px", false).to_string(), "1px");
    }
}
