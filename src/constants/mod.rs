pub mod quiz_prompt;

pub use quiz_prompt::QUIZ_GENERATION_PROMPT;
