//! Core logic module - pure, deterministic, and testable
//!
//! This module contains the simulation rules and the interaction state machine.
//! It has **zero dependencies** on terminals or timers, making it:
//!
//! - **Deterministic**: the same event sequence always yields the same state
//! - **Testable**: scheduling shows up as a returned [`Effect`], not a live timer
//! - **Portable**: runs in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`grid`]: dense `height x width` cell field
//! - [`life`]: the generation step (`B3/S23`, edges count as dead)
//! - [`coords`]: mapping between screen characters and grid cells
//! - [`state`]: [`AppState`], which consumes events and returns follow-up effects
//!
//! # Example
//!
//! ```
//! use tui_life_core::{AppState, Effect};
//! use tui_life_types::{Action, Event, PointerButton};
//!
//! let mut state = AppState::new();
//! state.update(Event::Resize { height: 10, width: 20 });
//!
//! // Paint a horizontal blinker with the mouse (two columns per cell).
//! for x in [6, 8, 10] {
//!     state.update(Event::Pointer { x, y: 5, button: PointerButton::Left });
//! }
//!
//! // Unpausing asks the host for the first tick.
//! let effect = state.update(Event::Key(Action::TogglePause));
//! assert!(matches!(effect, Some(Effect::ScheduleTick(_))));
//!
//! state.update(Event::Tick { at_ms: 100 });
//! assert_eq!(state.generation(), 1);
//! assert_eq!(state.grid().alive_cells(), vec![(4, 4), (5, 4), (6, 4)]);
//! ```

pub mod coords;
pub mod grid;
pub mod life;
pub mod state;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use coords::{grid_size, to_grid, to_screen};
pub use grid::{Cell, Grid};
pub use life::{alive_neighbors, step, step_into};
pub use state::{AppState, Cursor, Effect};
