pub mod consultation_controller;
pub mod tools_controller;

pub use consultation_controller::ConsultationController;
pub use tools_controller::ToolsController;
