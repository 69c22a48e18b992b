//! App state module - the interaction state machine
//!
//! [`AppState`] owns the grid plus the UI flags and reacts to one [`Event`] at a
//! time. Every call to [`AppState::update`] is a complete transition and may
//! return a single follow-up [`Effect`] for the host loop to carry out.
//!
//! Flags are orthogonal rather than one enum:
//!
//! - **Uninitialized / Initialized**: the grid has non-zero dimensions. Until the
//!   first `Resize`, every other event is dropped.
//! - **Paused / Running**: only a running machine advances on `Tick`, and it
//!   re-arms the timer exactly once per tick it consumes.
//! - **Overlay**: shown or hidden, independent of pausing.
//! - **Cursor**: movable and editable only while paused.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::coords::{grid_size, to_grid};
use crate::grid::Grid;
use crate::life::step_into;
use crate::types::{Action, Direction, Event, PointerButton, TICK_MS};

/// Follow-up request returned by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver one `Tick` after the given delay
    ScheduleTick(Duration),
    /// End the session
    Quit,
}

/// Selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Complete interactive state.
#[derive(Debug, Clone)]
pub struct AppState {
    grid: Grid,
    /// Reused as the destination of each step and swapped with `grid`.
    scratch: Grid,
    cursor: Cursor,
    paused: bool,
    overlay_shown: bool,
    /// Completed steps since the last resize.
    generation: u64,
    finished: bool,
    tick_interval: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create an unsized state ticking every [`TICK_MS`].
    pub fn new() -> Self {
        Self::with_tick_interval(Duration::from_millis(TICK_MS))
    }

    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self {
            grid: Grid::default(),
            scratch: Grid::default(),
            cursor: Cursor::default(),
            paused: true,
            overlay_shown: true,
            generation: 0,
            finished: false,
            tick_interval,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn overlay_shown(&self) -> bool {
        self.overlay_shown
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// True once the grid has non-zero height and width.
    pub fn is_initialized(&self) -> bool {
        self.grid.height() != 0 && self.grid.width() != 0
    }

    /// True after a `Quit` event; no further events are processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether `(row, col)` is where the cursor glyph is drawn.
    pub fn shows_cursor_at(&self, row: usize, col: usize) -> bool {
        self.paused && self.cursor.row == row && self.cursor.col == col
    }

    /// Apply one event.
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        if self.finished {
            trace!(kind = event.kind(), "event after quit ignored");
            return None;
        }
        if !self.is_initialized() && !matches!(event, Event::Resize { .. }) {
            trace!(kind = event.kind(), "event before first resize ignored");
            return None;
        }

        match event {
            Event::Resize { height, width } => {
                self.resize(height, width);
                None
            }
            Event::Quit => {
                info!(generation = self.generation, "quit requested");
                self.finished = true;
                Some(Effect::Quit)
            }
            Event::Key(action) => self.apply_action(action),
            Event::Pointer { x, y, button } => {
                self.paint(x, y, button);
                None
            }
            Event::Tick { at_ms } => self.tick(at_ms),
        }
    }

    fn resize(&mut self, screen_height: u16, screen_width: u16) {
        let (height, width) = grid_size(screen_height, screen_width);
        self.grid.reset(height, width);
        self.scratch.reset(height, width);
        self.cursor = Cursor {
            row: height / 2,
            col: width / 2,
        };
        self.paused = true;
        self.overlay_shown = true;
        self.generation = 0;
        info!(height, width, screen_height, screen_width, "grid resized");
    }

    fn apply_action(&mut self, action: Action) -> Option<Effect> {
        debug!(action = action.as_str(), paused = self.paused, "key");
        match action {
            Action::ToggleHelp => {
                self.overlay_shown = !self.overlay_shown;
                None
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, generation = self.generation, "pause toggled");
                if self.paused {
                    None
                } else {
                    Some(Effect::ScheduleTick(self.tick_interval))
                }
            }
            Action::Move(dir) => {
                if self.paused {
                    self.move_cursor(dir);
                }
                None
            }
            Action::ToggleCell => {
                if self.paused {
                    self.grid.toggle(self.cursor.row, self.cursor.col);
                }
                None
            }
        }
    }

    fn move_cursor(&mut self, dir: Direction) {
        let (dr, dc) = dir.delta();
        let max_row = self.grid.height().saturating_sub(1);
        let max_col = self.grid.width().saturating_sub(1);
        self.cursor.row = self
            .cursor
            .row
            .saturating_add_signed(dr as isize)
            .min(max_row);
        self.cursor.col = self
            .cursor
            .col
            .saturating_add_signed(dc as isize)
            .min(max_col);
    }

    fn paint(&mut self, x: i32, y: i32, button: PointerButton) {
        let alive = match button {
            PointerButton::Left => true,
            PointerButton::Right => false,
            PointerButton::Other => return,
        };
        let Some((row, col)) = to_grid(x, y) else {
            return;
        };
        if self.grid.set(row, col, alive) {
            debug!(row, col, alive, "cell painted");
        }
    }

    fn tick(&mut self, at_ms: u64) -> Option<Effect> {
        if self.paused {
            trace!(at_ms, "tick dropped while paused");
            return None;
        }
        step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        trace!(at_ms, generation = self.generation, "generation advanced");
        Some(Effect::ScheduleTick(self.tick_interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(height: u16, width: u16) -> AppState {
        let mut state = AppState::new();
        assert_eq!(state.update(Event::Resize { height, width }), None);
        state
    }

    #[test]
    fn starts_uninitialized_and_ignores_everything_but_resize() {
        let mut state = AppState::new();
        assert!(!state.is_initialized());
        assert_eq!(state.update(Event::Quit), None);
        assert_eq!(state.update(Event::Key(Action::TogglePause)), None);
        assert_eq!(state.update(Event::Tick { at_ms: 0 }), None);
        assert!(!state.is_finished());
        assert!(state.paused());
    }

    #[test]
    fn resize_halves_width_and_centers_cursor() {
        let state = sized(24, 80);
        assert!(state.is_initialized());
        assert_eq!(state.grid().height(), 24);
        assert_eq!(state.grid().width(), 40);
        assert_eq!(state.cursor(), Cursor { row: 12, col: 20 });
        assert!(state.paused());
        assert!(state.overlay_shown());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn unpause_requests_exactly_one_tick() {
        let mut state = sized(10, 20);
        assert_eq!(
            state.update(Event::Key(Action::TogglePause)),
            Some(Effect::ScheduleTick(Duration::from_millis(TICK_MS)))
        );
        assert_eq!(state.update(Event::Key(Action::TogglePause)), None);
    }

    #[test]
    fn tick_while_running_steps_and_rearms() {
        let mut state = sized(10, 20);
        state.update(Event::Key(Action::TogglePause));
        let effect = state.update(Event::Tick { at_ms: 100 });
        assert_eq!(effect, Some(Effect::ScheduleTick(state.tick_interval())));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn cursor_clamps_at_edges() {
        let mut state = sized(2, 4);
        for _ in 0..5 {
            state.update(Event::Key(Action::Move(Direction::Up)));
            state.update(Event::Key(Action::Move(Direction::Left)));
        }
        assert_eq!(state.cursor(), Cursor { row: 0, col: 0 });
        for _ in 0..5 {
            state.update(Event::Key(Action::Move(Direction::Down)));
            state.update(Event::Key(Action::Move(Direction::Right)));
        }
        assert_eq!(state.cursor(), Cursor { row: 1, col: 1 });
    }

    #[test]
    fn quit_finishes_the_session() {
        let mut state = sized(4, 8);
        assert_eq!(state.update(Event::Quit), Some(Effect::Quit));
        assert!(state.is_finished());
        assert_eq!(state.update(Event::Key(Action::TogglePause)), None);
        assert!(state.paused());
    }
}
