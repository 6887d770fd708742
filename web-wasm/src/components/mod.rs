pub mod header;
pub mod settings_panel;
pub mod upload_area;
pub mod result_panel;
