pub mod canvas;
pub mod data_manager;
pub mod preview_player;
pub mod shared_preview;
pub mod studio;
