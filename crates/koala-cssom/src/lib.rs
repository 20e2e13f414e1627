//! CSS value grammars and shorthand synthesis for the Koala style declaration model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value grammars** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths, percentages, angles, integers and numbers
//!   - Colors: named, hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`
//!   - `url()` and gradient images
//!   - CSS-wide keywords
//!
//! - **Longhand declarations** ([CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks))
//!   - Per-property value validation and normalization
//!   - The longhand snapshot of one element ([`PropertyMap`])
//!   - Importance aggregation across longhands
//!
//! - **Shorthand synthesis** ([CSSOM § 6.7](https://drafts.csswg.org/cssom/#serializing-css-values))
//!   - `margin`, `padding`
//!   - `border`, `border-top/-right/-bottom/-left`, `border-color/-width/-style`
//!   - `border-radius`, `background`, `flex`, `font`
//!
//! # Not Implemented
//!
//! - The cascade and specificity
//! - Parsing of whole declaration blocks or stylesheets
//! - One- to three-value shorthand forms (four-value form only)
//!
//! Everything here is pure: no function touches global mutable state, so any
//! of them may be called concurrently.
//!
//! # Example
//!
//! ```
//! use koala_cssom::{Longhand, PropertyMap, Shorthand};
//!
//! let mut map = PropertyMap::new();
//! for longhand in [
//!     Longhand::MarginTop,
//!     Longhand::MarginRight,
//!     Longhand::MarginBottom,
//!     Longhand::MarginLeft,
//! ] {
//!     map.set(longhand, "10px", true).unwrap();
//! }
//!
//! let margin = Shorthand::Margin.synthesize(&map).unwrap().unwrap();
//! assert_eq!(margin.value, "10px 10px 10px 10px");
//! assert!(margin.important);
//! ```

/// Longhand declarations per [CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks).
pub mod declaration;
/// Error type shared by the crate.
pub mod error;
/// Shorthand synthesis per [CSSOM § 6.7](https://drafts.csswg.org/cssom/#serializing-css-values).
pub mod shorthand;
/// Value grammars per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use declaration::{Corner, Longhand, PropertyMap, PropertyValue, Side, aggregate_importance};
pub use error::CssomError;
pub use shorthand::{Shorthand, ShorthandResult, ShorthandValue};
pub use values::GrammarCategory;
