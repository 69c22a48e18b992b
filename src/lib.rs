//! TUI Life (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_life::{core,engine,input,term,types}` and adds the
//! host-side pieces the binary needs: [`config`] and [`logging`].

pub mod config;
pub mod logging;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
