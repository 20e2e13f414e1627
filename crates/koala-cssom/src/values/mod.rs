//! CSS value grammars
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Images Level 4](https://www.w3.org/TR/css-images-4/)
//!
//! Each grammar is a pure function from one token of text to either its
//! normalized form or `None`. The grammars never panic and never allocate:
//! accepted text is borrowed from the input or from a static keyword table.
//!
//! | Grammar | Normalization |
//! |---------|---------------|
//! | [`length`] | `0` → `0px` |
//! | [`percentage`] | `0` → `0%` |
//! | [`degree`] | `0` → `0deg` |
//! | [`measurement`] | length, then percentage |
//! | [`measurement_or_auto`] | `auto` lower-cased |
//! | [`integer`], [`float`], [`gradient`] | none |
//! | [`color`] | named colors lower-cased |
//! | [`url`] | `none`/`inherit` lower-cased |
//! | [`global`] | lower-cased |
//! | [`non_global_or_initial`] | none |

mod color;
mod image;
mod keyword;
mod numeric;
mod url;

use std::borrow::Cow;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::CssomError;

pub use color::{NAMED_COLORS, color, is_named_color};
pub use image::gradient;
pub use keyword::{CSS_WIDE_KEYWORDS, global, is_global, non_global_or_initial};
pub(crate) use keyword::match_keyword;
pub use numeric::{degree, float, integer, length, measurement, measurement_or_auto, percentage};
pub use url::url;

/// A value grammar, for callers that pick the grammar at runtime.
///
/// The string form is the kebab-case variant name, so `"measurement-or-auto"`
/// parses to [`GrammarCategory::MeasurementOrAuto`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GrammarCategory {
    /// [`length`]
    Length,
    /// [`percentage`]
    Percentage,
    /// [`degree`]
    Degree,
    /// [`measurement`]
    Measurement,
    /// [`measurement_or_auto`]
    MeasurementOrAuto,
    /// [`integer`]
    Integer,
    /// [`float`]
    Float,
    /// [`color`]
    Color,
    /// [`url`]
    Url,
    /// [`gradient`]
    Gradient,
    /// [`global`]
    Global,
    /// [`non_global_or_initial`]
    NonGlobalOrInitial,
}

impl GrammarCategory {
    /// Look up a grammar by its kebab-case name.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::UnknownGrammar`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, CssomError> {
        let name = name.trim();
        name.parse().map_err(|_| CssomError::UnknownGrammar(name.to_string()))
    }

    /// Validate and normalize `value` against this grammar.
    #[must_use]
    pub fn validate(self, value: &str) -> Option<Cow<'_, str>> {
        match self {
            Self::Length => length(value),
            Self::Percentage => percentage(value),
            Self::Degree => degree(value),
            Self::Measurement => measurement(value),
            Self::MeasurementOrAuto => measurement_or_auto(value),
            Self::Integer => integer(value),
            Self::Float => float(value),
            Self::Color => color(value),
            Self::Url => url(value),
            Self::Gradient => gradient(value),
            Self::Global => global(value).map(Cow::Borrowed),
            Self::NonGlobalOrInitial => non_global_or_initial(value),
        }
    }
}
