//! Importance of a synthesized shorthand
//!
//! [CSS Cascading Level 4 § 6.3 Important Declarations](https://www.w3.org/TR/css-cascade-4/#importance)

/// [CSSOM § 6.7 serialize a CSS declaration block](https://drafts.csswg.org/cssom/#serialize-a-css-declaration-block)
///
/// Combine the important flags of a shorthand's longhands. Each item is the
/// flag of one longhand, or `None` if that longhand has no entry.
///
/// The shorthand is important unless some longhand that IS present has its
/// flag unset. Longhands without an entry do not count, so a group with no
/// entries at all is important.
#[must_use]
pub fn aggregate_importance<I>(flags: I) -> bool
where
    I: IntoIterator<Item = Option<bool>>,
{
    !flags.into_iter().any(|flag| flag == Some(false))
}
