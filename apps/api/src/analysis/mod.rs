// Member analysis: tag extraction and pairwise matching.
// All model calls go through llm_client::TextGenerator; nothing here talks HTTP upstream.

pub mod coerce;
pub mod handlers;
pub mod matching;
pub mod prompts;
pub mod tags;
