//! Core domain models and state transitions for the learning platform

pub mod ai;
#[cfg(feature = "ssr")]
pub mod ai_api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod forms;
pub mod ids;
pub mod live_room;
pub mod mock_data;
mod models;
mod state;

pub use models::*;
pub use state::{AppAction, AppState, Screen, StateError};
