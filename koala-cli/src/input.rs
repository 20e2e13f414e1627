//! Parsing of `name: value [!important]` declarations given on the command line.

use anyhow::{Context, Result, bail};
use koala_cssom::Longhand;

/// One longhand declaration from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The longhand being declared.
    pub longhand: Longhand,
    /// The raw value, with any `!important` suffix removed.
    pub value: String,
    /// Whether the declaration ended in `!important`.
    pub important: bool,
}

/// Split `text` at its first `:` into a longhand and a value.
///
/// A trailing `!important` (any case, optional space after `!`) sets the
/// important flag.
///
/// # Errors
///
/// Fails if there is no `:` or the name is not a supported longhand.
pub fn parse_declaration(text: &str) -> Result<Declaration> {
    let Some((name, value)) = text.split_once(':') else {
        bail!("expected 'name: value', got '{text}'");
    };
    let longhand = Longhand::from_name(name)
        .with_context(|| format!("in declaration '{}'", text.trim()))?;
    let (value, important) = strip_important(value.trim().trim_end_matches(';').trim_end());
    Ok(Declaration {
        longhand,
        value: value.to_string(),
        important,
    })
}

fn strip_important(value: &str) -> (&str, bool) {
    if let Some(bang) = value.rfind('!') {
        let flag = value[bang + 1..].trim_start();
        if flag.eq_ignore_ascii_case("important") {
            return (value[..bang].trim_end(), true);
        }
    }
    (value, false)
}
