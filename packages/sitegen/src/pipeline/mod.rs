//! Generation pipeline: answers in, three-part site out.

pub mod generate;
pub mod prompts;

pub use generate::generate_site;
pub use prompts::{build_user_prompt, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT};
