//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm`
//! key, mouse and resize events into [`crate::types::Event`]s for the
//! interaction state machine.

pub mod map;

pub use tui_life_types as types;

pub use map::{key_name, map_event, map_key_event, map_mouse_event};
