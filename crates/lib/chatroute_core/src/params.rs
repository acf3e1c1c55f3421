//! Parameter extraction from free text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Signed integers and decimals over ASCII digits: `12`, `-3`, `+4`, `2.5`, `.5`.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?(?:[0-9]*\.[0-9]+|[0-9]+)").expect("valid number regex"));

/// A place named at the end of the message: `... in New York`.
static TRAILING_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in|at|for)\s+([a-z][a-z\s.\-]+)$").expect("valid location regex")
});

/// A bare place following the last weather keyword: `weather Mumbai`.
static PLACE_AFTER_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^.*\b(?:weather|forecast|temperature)\s+([a-z][a-z\s.\-]+)$")
        .expect("valid keyword location regex")
});

/// Location reported when the message names no place.
pub const DEFAULT_LOCATION: &str = "your city";

/// Values pulled out of a message. Absent fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num2: Option<f64>,
}

impl Parameters {
    pub fn from_location(location: String) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn from_operands(num1: f64, num2: f64) -> Self {
        Self {
            num1: Some(num1),
            num2: Some(num2),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.num1.is_none() && self.num2.is_none()
    }
}

/// Parses every numeric token in `text`, in order of appearance.
///
/// A token that does not parse to a finite `f64` keeps its position as `None`.
pub fn extract_numbers(text: &str) -> Vec<Option<f64>> {
    NUMBER.find_iter(text).map(|m| parse_finite(m.as_str())).collect()
}

/// Returns the first two numeric tokens.
///
/// `None` if there are fewer than two, or if either of them is malformed.
pub fn extract_operands(text: &str) -> Option<(f64, f64)> {
    let mut tokens = NUMBER.find_iter(text);
    let a = parse_finite(tokens.next()?.as_str())?;
    let b = parse_finite(tokens.next()?.as_str())?;
    Some((a, b))
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Returns the title-cased place the message asks about.
///
/// Prefers a trailing `in`/`at`/`for` phrase, then a bare place after the last
/// weather keyword, and falls back to [`DEFAULT_LOCATION`].
pub fn extract_location(text: &str) -> String {
    let trimmed = text.trim().trim_end_matches(['?', '!', '.']).trim_end();
    [&*TRAILING_PLACE, &*PLACE_AFTER_KEYWORD]
        .into_iter()
        .filter_map(|re| re.captures(trimmed))
        .filter_map(|caps| caps.get(1).map(|m| title_case(m.as_str())))
        .find(|place| !place.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
