//! Message routing: intent, parameters, reply.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::intent::{Intent, identify_intent};
use crate::params::{Parameters, extract_location, extract_operands};
use crate::responses::{UNKNOWN_REPLY, WEATHER_REPLY, addition_reply, pick_joke};

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Resolved intent. An addition without two operands resolves to `Unknown`.
    pub intent: Intent,
    pub parameters: Parameters,
    pub reply: String,
}

impl Classification {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            parameters: Parameters::default(),
            reply: UNKNOWN_REPLY.to_string(),
        }
    }
}

/// Classifies `message` and builds the reply, drawing jokes from `rng`.
///
/// Never fails: anything unrecognised ends up as [`Intent::Unknown`].
pub fn classify_with_rng<R: Rng + ?Sized>(message: &str, rng: &mut R) -> Classification {
    let classification = match identify_intent(message) {
        Intent::Weather => Classification {
            intent: Intent::Weather,
            parameters: Parameters::from_location(extract_location(message)),
            reply: WEATHER_REPLY.to_string(),
        },
        Intent::Joke => Classification {
            intent: Intent::Joke,
            parameters: Parameters::default(),
            reply: pick_joke(rng).to_string(),
        },
        Intent::Addition => {
            let answered = extract_operands(message)
                .and_then(|(a, b)| addition_reply(a, b).map(|reply| (a, b, reply)));
            match answered {
                Some((a, b, reply)) => Classification {
                    intent: Intent::Addition,
                    parameters: Parameters::from_operands(a, b),
                    reply,
                },
                None => {
                    debug!("addition keyword without two usable operands");
                    Classification::unknown()
                }
            }
        }
        Intent::Unknown => Classification::unknown(),
    };

    debug!(intent = %classification.intent, "classified message");
    classification
}

/// Classifies `message` using the thread-local RNG.
pub fn classify(message: &str) -> Classification {
    classify_with_rng(message, &mut rand::rng())
}

/// Returns only the reply for `message`.
pub fn respond(message: &str) -> String {
    classify(message).reply
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::params::DEFAULT_LOCATION;
    use crate::responses::JOKES;

    #[test]
    fn weather_returns_designated_string() {
        for msg in ["weather", "How's the WEATHER in Paris?", "forecast please"] {
            assert_eq!(respond(msg), WEATHER_REPLY);
        }
    }

    #[test]
    fn weather_reports_location() {
        let c = classify("what's the weather in mumbai");
        assert_eq!(c.intent, Intent::Weather);
        assert_eq!(c.parameters.location.as_deref(), Some("Mumbai"));

        let c = classify("weather please, right now?");
        assert_eq!(c.parameters.location.as_deref(), Some(DEFAULT_LOCATION));
    }

    #[test]
    fn joke_is_always_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = classify_with_rng("tell me a joke", &mut rng);
            assert_eq!(c.intent, Intent::Joke);
            assert!(JOKES.contains(&c.reply.as_str()));
        }
    }

    #[test]
    fn joke_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<String> = (0..1_000)
            .map(|_| classify_with_rng("joke", &mut rng).reply)
            .collect();
        assert_eq!(seen.len(), JOKES.len());
    }

    #[test]
    fn addition_embeds_sum() {
        assert!(respond("add 2 and 3").contains('5'));
        assert!(respond("add 2.5 and 1.5").ends_with("= 4"));
        assert_eq!(respond("Can you sum 3.5 plus 6?"), "3.5 + 6 = 9.5");
    }

    #[test]
    fn addition_uses_first_two_numbers() {
        let c = classify("add 1 and 2 and 100");
        assert_eq!(c.intent, Intent::Addition);
        assert_eq!(c.parameters, Parameters::from_operands(1.0, 2.0));
        assert_eq!(c.reply, "1 + 2 = 3");
    }

    #[test]
    fn addition_without_operands_falls_back_to_unknown() {
        for msg in ["add please", "add 5", "sum"] {
            let c = classify(msg);
            assert_eq!(c.intent, Intent::Unknown);
            assert_eq!(c.reply, UNKNOWN_REPLY);
            assert!(c.parameters.is_empty());
        }
    }

    #[test]
    fn malformed_first_operand_falls_back_to_unknown() {
        let huge = "9".repeat(400);
        let c = classify(&format!("add {huge} and 1 and 2"));
        assert_eq!(c.intent, Intent::Unknown);
        assert_eq!(c.reply, UNKNOWN_REPLY);
    }

    #[test]
    fn overflowing_sum_falls_back_to_unknown() {
        let max = format!("{:.0}", f64::MAX);
        let c = classify(&format!("add {max} and {max}"));
        assert_eq!(c.intent, Intent::Unknown);
        assert_eq!(c.reply, UNKNOWN_REPLY);
    }

    #[test]
    fn non_ascii_digits_are_not_operands() {
        assert_eq!(respond("add \u{0663} and 4"), UNKNOWN_REPLY);
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(respond(""), UNKNOWN_REPLY);
        assert_eq!(respond("hello there"), UNKNOWN_REPLY);
    }

    #[test]
    fn weather_and_addition_are_idempotent() {
        for msg in ["weather in Lima", "add 10 and 32"] {
            assert_eq!(classify(msg), classify(msg));
        }
    }
}
