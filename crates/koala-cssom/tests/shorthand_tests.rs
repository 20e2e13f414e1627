//! Integration tests for shorthand synthesis.

use koala_cssom::{CssomError, Longhand, PropertyMap, PropertyValue, Shorthand, ShorthandValue};

/// Build a map from `(longhand, value, important)` triples.
fn map(entries: &[(Longhand, &str, bool)]) -> PropertyMap {
    entries
        .iter()
        .map(|&(longhand, value, important)| (longhand, PropertyValue::new(value, important)))
        .collect()
}

fn four(longhands: [Longhand; 4], value: &str, important: bool) -> Vec<(Longhand, &str, bool)> {
    longhands
        .into_iter()
        .map(|longhand| (longhand, value, important))
        .collect()
}

const MARGINS: [Longhand; 4] = [
    Longhand::MarginTop,
    Longhand::MarginRight,
    Longhand::MarginBottom,
    Longhand::MarginLeft,
];

const PADDINGS: [Longhand; 4] = [
    Longhand::PaddingTop,
    Longhand::PaddingRight,
    Longhand::PaddingBottom,
    Longhand::PaddingLeft,
];

const WIDTHS: [Longhand; 4] = [
    Longhand::BorderTopWidth,
    Longhand::BorderRightWidth,
    Longhand::BorderBottomWidth,
    Longhand::BorderLeftWidth,
];

const STYLES: [Longhand; 4] = [
    Longhand::BorderTopStyle,
    Longhand::BorderRightStyle,
    Longhand::BorderBottomStyle,
    Longhand::BorderLeftStyle,
];

const COLORS: [Longhand; 4] = [
    Longhand::BorderTopColor,
    Longhand::BorderRightColor,
    Longhand::BorderBottomColor,
    Longhand::BorderLeftColor,
];

const RADII: [Longhand; 4] = [
    Longhand::BorderTopLeftRadius,
    Longhand::BorderTopRightRadius,
    Longhand::BorderBottomRightRadius,
    Longhand::BorderBottomLeftRadius,
];

fn border_image(important: bool) -> Vec<(Longhand, &'static str, bool)> {
    vec![
        (Longhand::BorderImageSource, "none", important),
        (Longhand::BorderImageSlice, "100%", important),
        (Longhand::BorderImageWidth, "1", important),
        (Longhand::BorderImageOutset, "0", important),
        (Longhand::BorderImageRepeat, "stretch", important),
    ]
}

fn full_border(width: &str, style: &str, color: &str) -> PropertyMap {
    let mut entries = four(WIDTHS, width, false);
    entries.extend(four(STYLES, style, false));
    entries.extend(four(COLORS, color, false));
    entries.extend(border_image(false));
    map(&entries)
}

// ---------------------------------------------------------------------------
// margin / padding
// ---------------------------------------------------------------------------

#[test]
fn test_margin_all_important() {
    let map = map(&four(MARGINS, "10px", true));
    assert_eq!(
        Shorthand::Margin.synthesize(&map),
        Ok(Some(ShorthandValue::new("10px 10px 10px 10px", true)))
    );
}

#[test]
fn test_margin_keeps_side_order() {
    let map = map(&[
        (Longhand::MarginTop, "1px", false),
        (Longhand::MarginRight, "2px", false),
        (Longhand::MarginBottom, "3px", false),
        (Longhand::MarginLeft, "auto", false),
    ]);
    assert_eq!(
        Shorthand::Margin.synthesize(&map),
        Ok(Some(ShorthandValue::new("1px 2px 3px auto", false)))
    );
}

#[test]
fn test_margin_with_global_keyword_is_not_representable() {
    let map = map(&four(MARGINS, "inherit", false));
    assert_eq!(Shorthand::Margin.synthesize(&map), Ok(None));
}

#[test]
fn test_margin_with_absent_value_is_not_representable() {
    let mut map = map(&four(MARGINS, "1px", false));
    let _ = map.insert(Longhand::MarginLeft, PropertyValue::unset(false));
    assert_eq!(Shorthand::Margin.synthesize(&map), Ok(None));
}

#[test]
fn test_padding_missing_key_is_an_error() {
    let map = map(&[(Longhand::PaddingTop, "1px", false)]);
    assert_eq!(
        Shorthand::Padding.synthesize(&map),
        Err(CssomError::MissingLonghand {
            shorthand: Shorthand::Padding,
            longhand: Longhand::PaddingRight,
        })
    );
}

#[test]
fn test_padding_mixed_importance() {
    let mut entries = four(PADDINGS, "0px", true);
    entries[2].2 = false;
    let map = map(&entries);
    assert_eq!(
        Shorthand::Padding.synthesize(&map),
        Ok(Some(ShorthandValue::new("0px 0px 0px 0px", false)))
    );
}

// ---------------------------------------------------------------------------
// border family
// ---------------------------------------------------------------------------

#[test]
fn test_border_uniform() {
    let map = full_border("1px", "solid", "red");
    assert_eq!(
        Shorthand::Border.synthesize(&map),
        Ok(Some(ShorthandValue::new("1px solid red", false)))
    );
}

#[test]
fn test_border_omits_initial_style_and_color() {
    let map = full_border("thin", "initial", "initial");
    assert_eq!(
        Shorthand::Border.synthesize(&map),
        Ok(Some(ShorthandValue::new("thin", false)))
    );
}

#[test]
fn test_border_rejects_global_component() {
    for (width, style, color) in [
        ("1px", "inherit", "red"),
        ("unset", "solid", "red"),
        ("1px", "solid", "revert"),
    ] {
        let map = full_border(width, style, color);
        assert_eq!(Shorthand::Border.synthesize(&map), Ok(None), "{width} {style} {color}");
    }
}

#[test]
fn test_border_requires_border_image_longhands() {
    let mut map = full_border("1px", "solid", "red");
    let _ = map.remove(Longhand::BorderImageRepeat);
    assert_eq!(Shorthand::Border.synthesize(&map), Ok(None));
}

#[test]
fn test_border_requires_uniform_sides() {
    let mut map = full_border("1px", "solid", "red");
    let _ = map.insert(Longhand::BorderLeftColor, PropertyValue::new("blue", false));
    assert_eq!(Shorthand::Border.synthesize(&map), Ok(None));
}

#[test]
fn test_border_importance_ignores_border_image() {
    let mut entries = four(WIDTHS, "1px", true);
    entries.extend(four(STYLES, "solid", true));
    entries.extend(four(COLORS, "red", true));
    entries.extend(border_image(false));
    let map = map(&entries);
    assert_eq!(
        Shorthand::Border.synthesize(&map),
        Ok(Some(ShorthandValue::new("1px solid red", true)))
    );
}

#[test]
fn test_border_color_equal_and_unequal() {
    let equal = map(&four(COLORS, "red", false));
    assert_eq!(
        Shorthand::BorderColor.synthesize(&equal),
        Ok(Some(ShorthandValue::new("red", false)))
    );

    let mut unequal = four(COLORS, "red", false);
    unequal[3].1 = "blue";
    assert_eq!(Shorthand::BorderColor.synthesize(&map(&unequal)), Ok(None));
}

#[test]
fn test_border_width_and_style() {
    let widths = map(&four(WIDTHS, "2px", true));
    assert_eq!(
        Shorthand::BorderWidth.synthesize(&widths),
        Ok(Some(ShorthandValue::new("2px", true)))
    );

    let mut styles = four(STYLES, "dashed", false);
    let _ = styles.pop();
    assert_eq!(Shorthand::BorderStyle.synthesize(&map(&styles)), Ok(None));
}

#[test]
fn test_border_sides() {
    let map = map(&[
        (Longhand::BorderTopWidth, "1px", false),
        (Longhand::BorderTopStyle, "solid", false),
        (Longhand::BorderTopColor, "red", false),
        (Longhand::BorderRightWidth, "2px", true),
        (Longhand::BorderRightColor, "blue", true),
        (Longhand::BorderLeftWidth, "3px", false),
        (Longhand::BorderLeftStyle, "dotted", false),
        (Longhand::BorderBottomStyle, "solid", false),
    ]);

    assert_eq!(
        Shorthand::BorderTop.synthesize(&map),
        Ok(Some(ShorthandValue::new("1px solid red", false)))
    );
    assert_eq!(
        Shorthand::BorderRight.synthesize(&map),
        Ok(Some(ShorthandValue::new("2px blue", true)))
    );
    assert_eq!(
        Shorthand::BorderLeft.synthesize(&map),
        Ok(Some(ShorthandValue::new("3px dotted", false)))
    );
    assert_eq!(Shorthand::BorderBottom.synthesize(&map), Ok(None));
}

#[test]
fn test_border_side_ignores_absent_longhands_for_importance() {
    let map = map(&[
        (Longhand::BorderRightWidth, "2px", true),
        (Longhand::BorderRightColor, "blue", true),
    ]);
    assert_eq!(
        Shorthand::BorderRight.synthesize(&map),
        Ok(Some(ShorthandValue::new("2px blue", true)))
    );
}

#[test]
fn test_border_radius() {
    let map = map(&[
        (Longhand::BorderTopLeftRadius, "1px", true),
        (Longhand::BorderTopRightRadius, "2px", true),
        (Longhand::BorderBottomRightRadius, "3px", true),
        (Longhand::BorderBottomLeftRadius, "4px", true),
    ]);
    assert_eq!(
        Shorthand::BorderRadius.synthesize(&map),
        Ok(Some(ShorthandValue::new("1px 2px 3px 4px", true)))
    );
}

#[test]
fn test_border_radius_importance_uses_corners() {
    let mut entries = four(RADII, "1px", true);
    entries[3].2 = false;
    assert_eq!(
        Shorthand::BorderRadius.synthesize(&map(&entries)),
        Ok(Some(ShorthandValue::new("1px 1px 1px 1px", false)))
    );
}

#[test]
fn test_border_radius_importance_ignores_margin() {
    let mut entries = four(RADII, "1px", true);
    entries.push((Longhand::MarginLeft, "0px", false));
    assert_eq!(
        Shorthand::BorderRadius.synthesize(&map(&entries)),
        Ok(Some(ShorthandValue::new("1px 1px 1px 1px", true)))
    );
}

#[test]
fn test_border_radius_rejects_global() {
    let mut entries = four(RADII, "5px", false);
    entries[1].1 = "unset";
    assert_eq!(Shorthand::BorderRadius.synthesize(&map(&entries)), Ok(None));
}

// ---------------------------------------------------------------------------
// background / flex / font
// ---------------------------------------------------------------------------

#[test]
fn test_background_only_color() {
    let map = map(&[(Longhand::BackgroundColor, "blue", true)]);
    assert_eq!(
        Shorthand::Background.synthesize(&map),
        Ok(Some(ShorthandValue::new("blue", true)))
    );
}

#[test]
fn test_background_order_skips_unset() {
    let map = map(&[
        (Longhand::BackgroundPosition, "center", false),
        (Longhand::BackgroundImage, "url(a.png)", false),
        (Longhand::BackgroundRepeat, "no-repeat", false),
        (Longhand::BackgroundAttachment, "", false),
    ]);
    assert_eq!(
        Shorthand::Background.synthesize(&map),
        Ok(Some(ShorthandValue::new("url(a.png) no-repeat center", false)))
    );
}

#[test]
fn test_background_needs_color_or_image() {
    let map = map(&[(Longhand::BackgroundRepeat, "repeat", false)]);
    assert_eq!(Shorthand::Background.synthesize(&map), Ok(None));
}

#[test]
fn test_flex() {
    let full = map(&[
        (Longhand::FlexGrow, "1", false),
        (Longhand::FlexShrink, "0", false),
        (Longhand::FlexBasis, "auto", false),
    ]);
    assert_eq!(
        Shorthand::Flex.synthesize(&full),
        Ok(Some(ShorthandValue::new("1 0 auto", false)))
    );

    let partial = map(&[
        (Longhand::FlexGrow, "1", false),
        (Longhand::FlexShrink, "0", false),
    ]);
    assert_eq!(Shorthand::Flex.synthesize(&partial), Ok(None));
}

#[test]
fn test_font_minimal() {
    let map = map(&[
        (Longhand::FontWeight, "bold", true),
        (Longhand::FontSize, "12px", true),
        (Longhand::FontFamily, "serif", true),
    ]);
    assert_eq!(
        Shorthand::Font.synthesize(&map),
        Ok(Some(ShorthandValue::new("bold 12px serif", true)))
    );
}

#[test]
fn test_font_full() {
    let map = map(&[
        (Longhand::FontFamily, "\"Helvetica Neue\", sans-serif", false),
        (Longhand::LineHeight, "1.5", false),
        (Longhand::FontSize, "16px", false),
        (Longhand::FontStretch, "condensed", false),
        (Longhand::FontWeight, "400", false),
        (Longhand::FontVariant, "small-caps", false),
        (Longhand::FontStyle, "italic", false),
    ]);
    assert_eq!(
        Shorthand::Font.synthesize(&map),
        Ok(Some(ShorthandValue::new(
            "italic small-caps 400 condensed 16px/1.5 \"Helvetica Neue\", sans-serif",
            false
        )))
    );
}

#[test]
fn test_font_requires_size_and_family() {
    let map = map(&[(Longhand::FontFamily, "serif", false)]);
    assert_eq!(Shorthand::Font.synthesize(&map), Ok(None));
}

// ---------------------------------------------------------------------------
// naming
// ---------------------------------------------------------------------------

#[test]
fn test_shorthand_names() {
    assert_eq!(Shorthand::BorderTop.name(), "border-top");
    assert_eq!("Border-Radius".parse(), Ok(Shorthand::BorderRadius));
    assert!("borders".parse::<Shorthand>().is_err());
}
