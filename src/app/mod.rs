//! The session layer: an explicit, owned state container plus the commands
//! that mutate it.
//!
//! The state lives in a `SessionState` behind an `Arc<Mutex<...>>` rather
//! than in ambient global storage; observers register through the
//! [`proxy::EventProxy`] seam and receive a full [`view_model::UiState`]
//! snapshot after every mutation.

pub mod commands;
pub mod events;
pub mod helpers;
pub mod provider;
pub mod proxy;
pub mod state;
pub mod view_model;
