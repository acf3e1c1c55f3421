//! Canned replies and the small computations behind them.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Mock forecast returned for every weather request.
pub const WEATHER_REPLY: &str = "Today's forecast: 31°C, partly cloudy, light breeze.";

/// Returned when no intent matches.
pub const UNKNOWN_REPLY: &str =
    "Sorry, I couldn't understand. Try asking for weather, a joke, or to add numbers.";

/// Joke pool, sampled uniformly.
pub const JOKES: &[&str] = &[
    "Why did the developer go broke? Because they used up all their cache!",
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "I would tell you a UDP joke, but you might not get it.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "A SQL query walks into a bar, walks up to two tables and asks: can I join you?",
];

/// Picks one joke uniformly at random.
pub fn pick_joke<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES.choose(rng).copied().unwrap_or(UNKNOWN_REPLY)
}

/// Formats the result of adding `a` and `b`, or `None` if the sum overflows.
pub fn addition_reply(a: f64, b: f64) -> Option<String> {
    let sum = a + b;
    sum.is_finite().then(|| format!("{a} + {b} = {sum}"))
}
