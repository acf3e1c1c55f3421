//! Keyword-based intent detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "weather")]
    Weather,
    #[serde(rename = "joke")]
    Joke,
    #[serde(rename = "add")]
    Addition,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Intent {
    /// Wire label, matching the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Weather => "weather",
            Intent::Joke => "joke",
            Intent::Addition => "add",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword table. The first intent with a matching keyword wins.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Weather, &["weather", "forecast", "temperature"]),
    (Intent::Joke, &["joke", "funny", "make me laugh"]),
    (Intent::Addition, &["add", "sum", "plus", "+"]),
];

/// Detects the intent of `text` by case-insensitive keyword containment.
///
/// This only looks at keywords. An `Addition` result still needs two operands
/// before it can be answered; see [`crate::router::classify`].
pub fn identify_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_keywords_in_any_case() {
        assert_eq!(identify_intent("What's the WEATHER like?"), Intent::Weather);
        assert_eq!(identify_intent("forecast for tomorrow"), Intent::Weather);
        assert_eq!(identify_intent("Temperature in Oslo"), Intent::Weather);
    }

    #[test]
    fn joke_keywords() {
        assert_eq!(identify_intent("Tell me a joke"), Intent::Joke);
        assert_eq!(identify_intent("say something FUNNY"), Intent::Joke);
        assert_eq!(identify_intent("please make me laugh"), Intent::Joke);
    }

    #[test]
    fn addition_keywords() {
        assert_eq!(identify_intent("add 2 and 3"), Intent::Addition);
        assert_eq!(identify_intent("sum of 4, 5"), Intent::Addition);
        assert_eq!(identify_intent("1 plus 1"), Intent::Addition);
        assert_eq!(identify_intent("7+8"), Intent::Addition);
    }

    #[test]
    fn earlier_intent_wins() {
        assert_eq!(identify_intent("add a joke about the weather"), Intent::Weather);
        assert_eq!(identify_intent("a funny sum"), Intent::Joke);
    }

    #[test]
    fn no_keyword_is_unknown() {
        assert_eq!(identify_intent(""), Intent::Unknown);
        assert_eq!(identify_intent("hello there"), Intent::Unknown);
    }

    #[test]
    fn label_matches_serde() {
        for intent in [Intent::Weather, Intent::Joke, Intent::Addition, Intent::Unknown] {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.label()));
            assert_eq!(intent.to_string(), intent.label());
        }
    }
}
