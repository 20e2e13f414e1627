//! Longhand declarations
//!
//! - [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)
//! - [CSS Cascading Level 4 § 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! The [`PropertyMap`] is the snapshot a style declaration hands to the
//! shorthand synthesizer: which longhands have entries, their (possibly
//! absent) values, and their important flags.

mod grammar;
mod importance;
mod longhand;
mod property_map;

pub use importance::aggregate_importance;
pub use longhand::{Corner, Longhand, Side};
pub use property_map::{PropertyMap, PropertyValue};
