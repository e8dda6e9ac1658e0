//! Editor and player behavior that does not depend on the DOM.
//!
//! The frontend components own a [`TemplateDocument`](crate::model::template::TemplateDocument)
//! and call into the operations defined here; the components only translate
//! browser events into these calls and render the result.
//!
//! - `canvas`: placeholder placement, dragging, property edits and deletion.
//! - `data`: iteration list management and duration conversion.
//! - `media`: upload validation and data URL encoding.
//! - `player`: the preview slideshow state machine.

pub mod canvas;
pub mod data;
pub mod media;
pub mod player;
