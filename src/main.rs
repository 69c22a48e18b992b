//! Terminal Game of Life runner (default binary).
//!
//! It uses crossterm for input and the framebuffer-based renderer from
//! `tui_life::term`. Events from the keyboard, mouse, resizes and the tick
//! timer are serialized into one stream and applied to a single `AppState`.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{cursor, event, terminal};
use tracing::{error, info};

use tui_life::config::Config;
use tui_life::core::AppState;
use tui_life::engine::Ticker;
use tui_life::input::map_event;
use tui_life::logging;
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer};
use tui_life::types::Event;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "session failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut state = AppState::with_tick_interval(config.tick_interval());
    let mut ticker = Ticker::new(Instant::now());
    let view = LifeView::default();
    let mut fb = FrameBuffer::default();

    let (width, height) = terminal::size()?;
    info!(width, height, tick_ms = config.tick_ms, "session started");
    state.update(Event::Resize { height, width });

    let mut dirty = true;
    loop {
        if dirty {
            view.render_into(&state, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Block on input until the next tick is due, or indefinitely when
        // nothing is scheduled.
        let ready = match ticker.timeout(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };

        if ready {
            let raw = event::read()?;
            if let Some(ev) = map_event(&raw) {
                if matches!(ev, Event::Resize { .. }) {
                    term.invalidate();
                }
                let effect = state.update(ev);
                if ticker.apply(effect, Instant::now()) {
                    return Ok(());
                }
                dirty = true;
            }
        }

        let now = Instant::now();
        if ticker.take_due(now) {
            let effect = state.update(Event::Tick {
                at_ms: ticker.elapsed_ms(now),
            });
            if ticker.apply(effect, now) {
                return Ok(());
            }
            dirty = true;
        }
    }
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        error!(target: "runtime.panic", %info, "panic");
        default_hook(info);
    }));
}
