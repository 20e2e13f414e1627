//! Declared longhand values for one element
//!
//! [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)

use std::collections::BTreeMap;

use serde::Serialize;

use super::Longhand;
use crate::error::CssomError;

/// [CSSOM § 6.7 CSS Declarations](https://drafts.csswg.org/cssom/#css-declarations)
///
/// "A CSS declaration is an abstract concept ... It has the following
/// associated properties: property name, value, important flag."
///
/// The value may be absent, which is distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PropertyValue {
    /// The declared value, if any.
    pub value: Option<String>,
    /// "important flag: Either set or unset."
    pub important: bool,
}

impl PropertyValue {
    /// A declaration with a value.
    #[must_use]
    pub fn new(value: impl Into<String>, important: bool) -> Self {
        Self {
            value: Some(value.into()),
            important,
        }
    }

    /// A declaration whose value is absent.
    #[must_use]
    pub const fn unset(important: bool) -> Self {
        Self {
            value: None,
            important,
        }
    }

    /// The value, including an empty one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value, if present and non-empty.
    #[must_use]
    pub fn non_empty(&self) -> Option<&str> {
        self.value().filter(|value| !value.is_empty())
    }
}

/// The longhand declarations of one element, keyed by [`Longhand`].
///
/// A longhand with no entry has never been set. That is different from an
/// entry whose [`PropertyValue::value`] is absent or empty, and the shorthand
/// rules distinguish the two.
///
/// Iteration is in [`Longhand`] declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: BTreeMap<Longhand, PropertyValue>,
}

impl PropertyMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `longhand` as given, without validation. Returns the
    /// previous entry.
    pub fn insert(&mut self, longhand: Longhand, value: PropertyValue) -> Option<PropertyValue> {
        self.entries.insert(longhand, value)
    }

    /// [CSSOM § 6.6.1 setProperty()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// "Let component value list be the result of parsing value for property
    /// property. If component value list is null, then return."
    ///
    /// Validates `raw` with [`Longhand::parse_value`] and stores the
    /// normalized value.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::InvalidValue`] and leaves the map unchanged if
    /// `raw` does not match the longhand's grammar.
    pub fn set(&mut self, longhand: Longhand, raw: &str, important: bool) -> Result<(), CssomError> {
        let value = longhand
            .parse_value(raw)
            .ok_or_else(|| CssomError::InvalidValue {
                longhand,
                value: raw.to_string(),
            })?;
        let _ = self
            .entries
            .insert(longhand, PropertyValue::new(value, important));
        Ok(())
    }

    /// [CSSOM § 6.6.1 removeProperty()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    pub fn remove(&mut self, longhand: Longhand) -> Option<PropertyValue> {
        self.entries.remove(&longhand)
    }

    /// The entry for `longhand`, if it has ever been set.
    #[must_use]
    pub fn get(&self, longhand: Longhand) -> Option<&PropertyValue> {
        self.entries.get(&longhand)
    }

    /// Whether `longhand` has an entry.
    #[must_use]
    pub fn contains(&self, longhand: Longhand) -> bool {
        self.entries.contains_key(&longhand)
    }

    /// The value of `longhand`, including an empty one.
    #[must_use]
    pub fn value(&self, longhand: Longhand) -> Option<&str> {
        self.get(longhand).and_then(PropertyValue::value)
    }

    /// The value of `longhand` if it is present and non-empty.
    #[must_use]
    pub fn non_empty(&self, longhand: Longhand) -> Option<&str> {
        self.get(longhand).and_then(PropertyValue::non_empty)
    }

    /// The importance flag of the longhands in `group` taken together.
    ///
    /// See [`super::aggregate_importance`].
    #[must_use]
    pub fn is_important(&self, group: &[Longhand]) -> bool {
        super::aggregate_importance(
            group
                .iter()
                .map(|&longhand| self.get(longhand).map(|entry| entry.important)),
        )
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in [`Longhand`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Longhand, &PropertyValue)> {
        self.entries.iter().map(|(&longhand, value)| (longhand, value))
    }
}

impl FromIterator<(Longhand, PropertyValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (Longhand, PropertyValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Longhand, PropertyValue)> for PropertyMap {
    fn extend<I: IntoIterator<Item = (Longhand, PropertyValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
