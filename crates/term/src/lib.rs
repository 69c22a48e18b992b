//! Terminal renderer module.
//!
//! A small rendering layer for terminal display. It avoids widget/layout
//! libraries and instead renders into a simple framebuffer that is flushed to
//! the terminal with crossterm.
//!
//! - [`LifeView`] projects an `AppState` into a [`FrameBuffer`] and never mutates state
//! - [`TerminalRenderer`] owns raw mode and writes frames (full or diffed)

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use life_view::{gradient, overlay_lines, LifeView, FLAT_BG};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
