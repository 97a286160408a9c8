//! Client-side engine for a remote project context picker.
//!
//! The crate turns a flat file listing delivered by a project-metadata
//! service into a navigable tree with tri-state directory checkboxes,
//! maintains the selection set consistently with that tree, and plans the
//! path list that is sent to the content service when the user asks for the
//! aggregated text. Rendering and the actual network transport live outside
//! this crate, behind the `EventProxy` and `ProjectProvider` seams.

pub mod app;
pub mod config;
pub mod core;
pub mod utils;
