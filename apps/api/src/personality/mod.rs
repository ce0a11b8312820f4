// Personality analysis: required profile (from a company analysis), current
// profile (from user facts) and the gap report between them.

pub mod analyzer;
pub mod models;
pub mod prompts;
