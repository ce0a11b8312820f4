// Interview preparation: candidate questions with keyword difficulty,
// answer templates and mock interview sessions.

pub mod difficulty;
pub mod handlers;
pub mod prep;
pub mod prompts;
