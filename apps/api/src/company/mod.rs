// Company analysis: placeholder business data + model-written analysis,
// and likely interview questions derived from it.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod source;
