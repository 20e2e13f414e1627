//! Errors reported by the style declaration model.
//!
//! A grammar rejecting a value, or a shorthand that cannot represent its
//! longhands, is NOT an error: those are ordinary `None` outcomes. The
//! variants here are either caller mistakes (a required longhand key missing
//! from the map) or input that names something this crate does not know.

use thiserror::Error;

use crate::declaration::Longhand;
use crate::shorthand::Shorthand;

/// Errors produced by [`crate::shorthand`] and [`crate::declaration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssomError {
    /// A shorthand was synthesized from a map that omits one of the keys the
    /// shorthand cannot do without (see [`Shorthand::required`]).
    #[error("cannot synthesize '{shorthand}': required longhand '{longhand}' is missing")]
    MissingLonghand {
        /// The shorthand being synthesized.
        shorthand: Shorthand,
        /// The first missing required longhand.
        longhand: Longhand,
    },

    /// A raw value did not match the longhand's grammar.
    #[error("invalid value for '{longhand}': '{value}'")]
    InvalidValue {
        /// The longhand being set.
        longhand: Longhand,
        /// The rejected raw value.
        value: String,
    },

    /// A property name that is not a supported longhand.
    #[error("unknown longhand property '{0}'")]
    UnknownProperty(String),

    /// A property name that is not a supported shorthand.
    #[error("unknown shorthand property '{0}'")]
    UnknownShorthand(String),

    /// A grammar name that is not a [`crate::values::GrammarCategory`].
    #[error("unknown value grammar '{0}'")]
    UnknownGrammar(String),
}
