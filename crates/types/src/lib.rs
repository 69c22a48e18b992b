//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Screen Geometry
//!
//! Each logical cell occupies two terminal columns and one terminal row so that
//! cells render roughly square:
//!
//! - **Grid width**: `screen_width / CELL_WIDTH`
//! - **Grid height**: `screen_height`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Delay between simulation generations |
//!
//! # Events
//!
//! Everything the interaction state machine reacts to arrives as one [`Event`]:
//!
//! | Variant | Source |
//! |---------|--------|
//! | `Resize` | terminal size changes (and the initial size) |
//! | `Key` | recognized key presses, already mapped to an [`Action`] |
//! | `Pointer` | mouse presses (and drags) in screen coordinates |
//! | `Tick` | the scheduler, when a requested tick comes due |
//! | `Quit` | `q` or `ctrl+c` |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Action, Direction, Event, CELL_WIDTH, TICK_MS};
//!
//! assert_eq!(Event::from_key_name("p"), Some(Event::Key(Action::TogglePause)));
//! assert_eq!(
//!     Event::from_key_name("up"),
//!     Some(Event::Key(Action::Move(Direction::Up)))
//! );
//! assert_eq!(Event::from_key_name("ctrl+c"), Some(Event::Quit));
//! assert_eq!(Event::from_key_name("x"), None);
//!
//! assert_eq!(CELL_WIDTH, 2);
//! assert_eq!(TICK_MS, 100);
//! ```

/// Terminal columns per logical grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Default delay between generations while running (100ms).
pub const TICK_MS: u64 = 100;

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// User commands produced by key presses.
///
/// Quitting is not an action: it is its own [`Event::Quit`] so the host loop
/// can recognize it without inspecting key payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show or hide the help/status overlay
    ToggleHelp,
    /// Pause or resume the simulation
    TogglePause,
    /// Move the cursor one cell (only while paused)
    Move(Direction),
    /// Flip the cell under the cursor (only while paused)
    ToggleCell,
}

impl Action {
    /// Parse an action from a key name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::{Action, Direction};
    ///
    /// assert_eq!(Action::from_key_name("?"), Some(Action::ToggleHelp));
    /// assert_eq!(Action::from_key_name("h"), Some(Action::Move(Direction::Left)));
    /// assert_eq!(Action::from_key_name("q"), None);
    /// ```
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "?" => Some(Action::ToggleHelp),
            "p" => Some(Action::TogglePause),
            "w" | "up" | "k" => Some(Action::Move(Direction::Up)),
            "s" | "down" | "j" => Some(Action::Move(Direction::Down)),
            "a" | "left" | "h" => Some(Action::Move(Direction::Left)),
            "d" | "right" | "l" => Some(Action::Move(Direction::Right)),
            "t" | " " => Some(Action::ToggleCell),
            _ => None,
        }
    }

    /// Short name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ToggleHelp => "toggleHelp",
            Action::TogglePause => "togglePause",
            Action::Move(dir) => dir.as_str(),
            Action::ToggleCell => "toggleCell",
        }
    }
}

/// Mouse buttons as seen by the state machine.
///
/// Left paints a cell alive, right paints it dead, anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Other,
}

/// One input to the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Terminal size in screen characters
    Resize { height: u16, width: u16 },
    /// A recognized key press
    Key(Action),
    /// Mouse press at a screen coordinate (may be negative or out of range)
    Pointer {
        x: i32,
        y: i32,
        button: PointerButton,
    },
    /// Scheduled simulation tick; `at_ms` is milliseconds since the session started
    Tick { at_ms: u64 },
    /// End the session
    Quit,
}

impl Event {
    /// Parse the textual key codes used by terminal drivers.
    ///
    /// Recognized: `q`, `ctrl+c`, `?`, `p`, `w`/`up`/`k`, `s`/`down`/`j`,
    /// `a`/`left`/`h`, `d`/`right`/`l`, `t` and `" "`. Anything else is `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "q" | "ctrl+c" => Some(Event::Quit),
            other => Action::from_key_name(other).map(Event::Key),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Resize { .. } => "resize",
            Event::Key(_) => "key",
            Event::Pointer { .. } => "pointer",
            Event::Tick { .. } => "tick",
            Event::Quit => "quit",
        }
    }
}
