//! CSS color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::match_keyword;

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// "CSS defines a large set of named colors, so that common colors can be
/// written and read more easily."
///
/// Also includes `currentcolor` ([§ 6.4](https://www.w3.org/TR/css-color-4/#currentcolor-color))
/// and `transparent` ([§ 6.3](https://www.w3.org/TR/css-color-4/#transparent-color)).
pub const NAMED_COLORS: [&str; 150] = [
    "currentcolor",
    "transparent",
    // CSS 2.1 basic colors
    "silver",
    "gray",
    "white",
    "maroon",
    "red",
    "purple",
    "fuchsia",
    "green",
    "lime",
    "olive",
    "yellow",
    "navy",
    "blue",
    "teal",
    "aqua",
    "black",
    "orange",
    // Extended color keywords
    "aliceblue",
    "antiquewhite",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "blanchedalmond",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkgrey",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkslategrey",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dimgrey",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "greenyellow",
    "grey",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightgrey",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightslategrey",
    "lightsteelblue",
    "lightyellow",
    "limegreen",
    "linen",
    "magenta",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "oldlace",
    "olivedrab",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "rebeccapurple",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "skyblue",
    "slateblue",
    "slategray",
    "slategrey",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "whitesmoke",
    "yellowgreen",
];

/// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
/// consists of 3, 4, 6, or 8 hexadecimal digits."
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex color grammar is a valid regex")
});

/// [§ 5.1 The RGB functions: rgb() and rgba()](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// The argument list is not inspected beyond forbidding a nested `)`.
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\([^)]*\)$").expect("rgb() grammar is a valid regex")
});

/// [§ 7.1 The HSL notation: hsl() and hsla()](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Legacy comma syntax: `hsl( <hue>, <percentage>, <percentage>, <alpha-value>? )`
/// with the hue and alpha as plain numbers.
static HSL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    const NUMBER: &str = r"(?:-?\d+|-?\d*\.\d+)";
    Regex::new(&format!(
        r"^hsla?\(\s*{NUMBER}\s*,\s*{NUMBER}%\s*,\s*{NUMBER}%\s*(?:,\s*{NUMBER}\s*)?\)$"
    ))
    .expect("hsl() grammar is a valid regex")
});

/// [§ 4 Representing Colors: the `<color>` type](https://www.w3.org/TR/css-color-4/#color-type)
///
/// Accepts a named color (case-insensitive, returned lower-cased), a hex
/// color, or an `rgb()`/`rgba()`/`hsl()`/`hsla()` function. Non-keyword forms
/// are returned unchanged.
#[must_use]
pub fn color(value: &str) -> Option<Cow<'_, str>> {
    if let Some(name) = match_keyword(value, &NAMED_COLORS) {
        return Some(Cow::Borrowed(name));
    }
    let is_color = HEX_COLOR.is_match(value)
        || RGB_FUNCTION.is_match(value)
        || HSL_FUNCTION.is_match(value);
    is_color.then_some(Cow::Borrowed(value))
}

/// Whether `value` is a named color keyword (any case).
#[must_use]
pub fn is_named_color(value: &str) -> bool {
    match_keyword(value, &NAMED_COLORS).is_some()
}
