// Keyword analysis engine.
// Implements: keyword extraction, stop-word filtering, job-vs-resume matching.
// The extractor and matcher are pure functions; handlers.rs is the only
// place that touches HTTP.

pub mod extract;
pub mod handlers;
pub mod matcher;
