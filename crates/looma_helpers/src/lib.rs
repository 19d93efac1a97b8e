mod app;
pub use app::*;

pub mod emoji;
pub mod floating_text;
pub mod input;
pub mod journal;
pub mod palette;
pub mod prompts;
pub mod token_field;
