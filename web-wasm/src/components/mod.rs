pub mod camera_panel;
pub mod header;
pub mod results;
pub mod settings_panel;
pub mod upload_area;
