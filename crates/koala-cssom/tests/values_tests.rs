//! Integration tests for the CSS value grammars.

use std::str::FromStr;

use koala_cssom::GrammarCategory;
use koala_cssom::values::{
    CSS_WIDE_KEYWORDS, NAMED_COLORS, color, degree, float, global, gradient, integer, length,
    measurement, measurement_or_auto, non_global_or_initial, percentage, url,
};
use strum::IntoEnumIterator;

#[test]
fn test_length() {
    assert_eq!(length("10px").as_deref(), Some("10px"));
    assert_eq!(length("2.5rem").as_deref(), Some("2.5rem"));
    assert_eq!(length("0").as_deref(), Some("0px"));
    assert_eq!(length("abc"), None);
    assert_eq!(length("10"), None);
    assert_eq!(length(""), None);
}

#[test]
fn test_percentage() {
    assert_eq!(percentage("50%").as_deref(), Some("50%"));
    assert_eq!(percentage("-12.5%").as_deref(), Some("-12.5%"));
    assert_eq!(percentage("0").as_deref(), Some("0%"));
    assert_eq!(percentage("50"), None);
    assert_eq!(percentage("%"), None);
}

#[test]
fn test_degree() {
    assert_eq!(degree("45deg").as_deref(), Some("45deg"));
    assert_eq!(degree("0").as_deref(), Some("0deg"));
    assert_eq!(degree("45rad"), None);
}

#[test]
fn test_measurement_prefers_length() {
    assert_eq!(measurement("0").as_deref(), Some("0px"));
    assert_eq!(measurement("3em").as_deref(), Some("3em"));
    assert_eq!(measurement("30%").as_deref(), Some("30%"));
    assert_eq!(measurement("auto"), None);
    assert_eq!(measurement_or_auto("Auto").as_deref(), Some("auto"));
}

#[test]
fn test_integer_and_float() {
    assert_eq!(integer("42").as_deref(), Some("42"));
    assert_eq!(integer("-42"), None);
    assert_eq!(float("0.5").as_deref(), Some("0.5"));
    assert_eq!(float("..").as_deref(), Some(".."));
    assert_eq!(float("1e3"), None);
}

#[test]
fn test_gradient() {
    let value = "radial-gradient(circle, red, blue)";
    assert_eq!(gradient(value).as_deref(), Some(value));
    assert_eq!(gradient("gradient(red)"), None);
}

#[test]
fn test_color_forms() {
    assert_eq!(color("BLUE").as_deref(), Some("blue"));
    assert_eq!(color("Transparent").as_deref(), Some("transparent"));
    assert_eq!(color("#ABC").as_deref(), Some("#ABC"));
    assert_eq!(color("rgba(0,0,0,0.5)").as_deref(), Some("rgba(0,0,0,0.5)"));
    assert_eq!(color("hsl(0,0%,0%)").as_deref(), Some("hsl(0,0%,0%)"));
    assert_eq!(color("bluish"), None);
    assert_eq!(color(""), None);
}

#[test]
fn test_every_named_color_is_accepted_in_upper_case() {
    for name in NAMED_COLORS {
        assert_eq!(color(&name.to_uppercase()).as_deref(), Some(name));
    }
}

#[test]
fn test_url() {
    assert_eq!(url("url(a.png)").as_deref(), Some("url(a.png)"));
    assert_eq!(url("url('a.png')").as_deref(), Some("url('a.png')"));
    assert_eq!(url("url('a.png\")"), None);
    assert_eq!(url("None").as_deref(), Some("none"));
    assert_eq!(url("a.png"), None);
}

#[test]
fn test_global_keywords() {
    for keyword in CSS_WIDE_KEYWORDS {
        assert_eq!(global(keyword), Some(keyword));
        assert_eq!(global(&keyword.to_uppercase()), Some(keyword));
    }
    assert_eq!(global(""), None);
    assert_eq!(global("auto"), None);
    assert_eq!(global("inherits"), None);
}

#[test]
fn test_non_global_or_initial() {
    assert_eq!(non_global_or_initial("solid").as_deref(), Some("solid"));
    assert_eq!(non_global_or_initial("initial").as_deref(), Some("initial"));
    assert_eq!(non_global_or_initial("revert"), None);
}

#[test]
fn test_grammar_category_dispatch() {
    assert_eq!(
        GrammarCategory::from_str("measurement-or-auto"),
        Ok(GrammarCategory::MeasurementOrAuto)
    );
    assert_eq!(GrammarCategory::Length.validate("0").as_deref(), Some("0px"));
    assert_eq!(GrammarCategory::Color.validate("RED").as_deref(), Some("red"));
    assert_eq!(GrammarCategory::Global.validate("Unset").as_deref(), Some("unset"));
    assert_eq!(GrammarCategory::Url.validate("url(a b)"), None);

    for category in GrammarCategory::iter() {
        assert_eq!(GrammarCategory::from_str(&category.to_string()), Ok(category));
    }
}
