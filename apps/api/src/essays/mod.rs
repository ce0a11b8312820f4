// Essay drafting: self-PR, motivation letter, scored critique, static templates.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod templates;
