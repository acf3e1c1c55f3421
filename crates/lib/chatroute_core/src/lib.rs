//! # chatroute_core
//!
//! Intent classification and response selection for the Chatroute demo bot.
//!
//! A message is matched against an ordered keyword table, parameters are
//! pulled out of the text, and a reply is produced. Nothing here keeps state
//! between calls.

pub mod intent;
pub mod params;
pub mod responses;
pub mod router;

pub use intent::Intent;
pub use params::Parameters;
pub use router::{Classification, classify, classify_with_rng, respond};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Greeting reported by the health endpoint.
pub fn greeting() -> String {
    format!("Chatroute bot v{} is listening", version())
}
