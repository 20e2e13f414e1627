//! CSS gradient images
//!
//! [CSS Images Level 4 § 3 Gradients](https://www.w3.org/TR/css-images-4/#gradients)

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// [§ 3 Gradients](https://www.w3.org/TR/css-images-4/#gradients)
///
/// "A gradient is an image that smoothly fades from one color to another."
///
/// The argument list is opaque: one or more characters, none of them `)`.
static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(repeating-linear|linear|radial|repeating-radial|conic|repeating-conic)-gradient\([^)]+\)$",
    )
    .expect("gradient grammar is a valid regex")
});

/// [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-4/#linear-gradients),
/// [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-4/#radial-gradients),
/// [§ 3.3 Conic Gradients](https://www.w3.org/TR/css-images-4/#conic-gradients)
/// and their repeating forms ([§ 3.4](https://www.w3.org/TR/css-images-4/#repeating-gradients)).
///
/// NOTE: Gradients with nested functions (e.g. `rgb()` color stops) are
/// rejected because the interior may not contain `)`.
#[must_use]
pub fn gradient(value: &str) -> Option<Cow<'_, str>> {
    GRADIENT.is_match(value).then_some(Cow::Borrowed(value))
}
