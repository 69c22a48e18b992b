//! Scheduler adapter (engine-facing).
//!
//! The state machine never touches a clock. It returns
//! [`Effect::ScheduleTick`](crate::core::Effect) and the host loop hands that
//! request to a [`Ticker`], which remembers when the next `Tick` is due and
//! tells the loop how long it may block waiting for input.

pub mod ticker;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use ticker::Ticker;
