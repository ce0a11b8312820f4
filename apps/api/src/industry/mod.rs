// Industry matching: aptitude across a fixed list of industries, industry
// briefings and industry-level motivation templates.

pub mod handlers;
pub mod matcher;
pub mod prompts;
