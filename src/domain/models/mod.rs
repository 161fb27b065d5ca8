mod chat_message;
mod completion;
pub mod prompts;
mod response_format;
mod tool;

pub use chat_message::*;
pub use completion::*;
pub use response_format::*;
pub use tool::*;
