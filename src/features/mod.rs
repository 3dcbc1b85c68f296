pub mod collect;
pub mod summarize;

pub use collect::record_message;
pub use summarize::summarize_chat;
