pub mod render;
pub mod templates;
