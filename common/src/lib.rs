//! Shared model and UI-independent logic for the template studio.
//!
//! Both the `backend` and the `frontend` crates depend on this crate, so every
//! type that crosses the wire lives under [`model`], and every piece of editor
//! or player behavior that does not touch the DOM lives under [`studio`] where
//! it can be tested natively.

pub mod api;
pub mod error;
pub mod jobs;
pub mod model;
pub mod requests;
pub mod studio;
pub mod timeline;
