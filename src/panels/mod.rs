pub mod canvas_panel;
pub mod tools_panel;
