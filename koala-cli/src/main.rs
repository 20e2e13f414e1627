//! Koala CSSOM CLI - CSS value validation and shorthand synthesis
//!
//! Usage:
//!   koala-cssom validate <GRAMMAR> <VALUE>       Check a value against a grammar
//!   koala-cssom parse <LONGHAND> <VALUE>         Check a value for a longhand property
//!   koala-cssom shorthand <DECLARATION>...       Synthesize shorthands from longhands
//!
//! Examples:
//!   koala-cssom validate length 0
//!   koala-cssom parse border-top-style SOLID
//!   koala-cssom shorthand 'background-color: blue !important'

mod input;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use koala_common::warning::{set_quiet, warn_once};
use koala_cssom::{CssomError, GrammarCategory, Longhand, PropertyMap, Shorthand, ShorthandValue};
use owo_colors::OwoColorize;
use serde::Serialize;
use strum::IntoEnumIterator;

use input::parse_declaration;

/// Koala CSSOM - validate CSS values and synthesize shorthand properties
#[derive(Parser, Debug)]
#[command(name = "koala-cssom")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Normalize a length
    koala-cssom validate length 0

    # Validate a longhand value
    koala-cssom parse margin-top auto

    # Synthesize every shorthand the declarations allow
    koala-cssom shorthand 'font-size: 12px' 'font-family: serif' 'font-weight: bold'

    # Synthesize one shorthand as JSON
    koala-cssom shorthand --only background --json 'background-color: blue !important'
"#)]
struct Cli {
    /// Do not print warnings for rejected input
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a value against one of the value grammars
    Validate {
        /// Grammar name, e.g. `length` or `measurement-or-auto`
        grammar: String,
        /// The value to check
        value: String,
    },
    /// Validate a value for a longhand property
    Parse {
        /// Longhand property name, e.g. `border-top-width`
        longhand: String,
        /// The value to check
        value: String,
    },
    /// Synthesize shorthands from `name: value [!important]` declarations
    Shorthand {
        /// Only synthesize this shorthand
        #[arg(long, value_name = "SHORTHAND")]
        only: Option<String>,
        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
        /// Longhand declarations
        #[arg(value_name = "DECLARATION", required = true)]
        declarations: Vec<String>,
    },
}

/// One synthesized shorthand, as printed with `--json`.
#[derive(Serialize)]
struct Synthesized {
    property: Shorthand,
    #[serde(flatten)]
    value: ShorthandValue,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    match cli.command {
        Command::Validate { grammar, value } => {
            let grammar = GrammarCategory::from_name(&grammar)?;
            Ok(report(
                grammar.validate(&value).as_deref(),
                &format!("'{value}' is not a valid {grammar}"),
            ))
        }
        Command::Parse { longhand, value } => {
            let longhand = Longhand::from_name(&longhand)?;
            Ok(report(
                longhand.parse_value(&value).as_deref(),
                &format!("invalid value for '{longhand}': '{value}'"),
            ))
        }
        Command::Shorthand {
            only,
            json,
            declarations,
        } => {
            let map = build_map(&declarations);
            let results: Vec<Synthesized> = match only {
                Some(name) => {
                    let shorthand = Shorthand::from_name(&name)?;
                    let value = shorthand
                        .synthesize(&map)
                        .with_context(|| format!("while synthesizing '{shorthand}'"))?;
                    value
                        .map(|value| Synthesized {
                            property: shorthand,
                            value,
                        })
                        .into_iter()
                        .collect()
                }
                None => synthesize_all(&map),
            };
            print_results(&results, json)?;
            Ok(if results.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

/// Print an accepted value, or warn about a rejected one.
fn report(accepted: Option<&str>, rejection: &str) -> ExitCode {
    if let Some(value) = accepted {
        println!("{value}");
        ExitCode::SUCCESS
    } else {
        let _ = warn_once("CSS", rejection);
        ExitCode::FAILURE
    }
}

/// Collect the declarations into a map, skipping (and warning about) any
/// that do not parse or whose value is rejected.
fn build_map(declarations: &[String]) -> PropertyMap {
    let mut map = PropertyMap::new();
    for text in declarations {
        let result = parse_declaration(text).and_then(|decl| {
            map.set(decl.longhand, &decl.value, decl.important)
                .map_err(anyhow::Error::from)
        });
        if let Err(err) = result {
            let _ = warn_once("CSS", &format!("{err:#}"));
        }
    }
    map
}

/// Every shorthand the map can express. Families whose required longhands
/// are not all declared are skipped.
fn synthesize_all(map: &PropertyMap) -> Vec<Synthesized> {
    Shorthand::iter()
        .filter_map(|shorthand| match shorthand.synthesize(map) {
            Ok(value) => value.map(|value| Synthesized {
                property: shorthand,
                value,
            }),
            Err(CssomError::MissingLonghand { .. }) => None,
            Err(err) => {
                let _ = warn_once("CSS", &err.to_string());
                None
            }
        })
        .collect()
}

fn print_results(results: &[Synthesized], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("{}", "no shorthand can represent these declarations".dimmed());
    }
    for result in results {
        println!("{}: {};", result.property.bold(), result.value);
    }
    Ok(())
}
