pub mod iteration;
pub mod placeholder;
pub mod render;
pub mod shared;
pub mod template;
