mod consultation;
mod dispatch_tool;

pub use consultation::*;
pub use dispatch_tool::*;
