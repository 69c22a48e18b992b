use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{step, step_into, AppState, Grid};
use tui_life::types::{Action, Event};

/// R-pentomino in the middle of a 50x100 grid (a 200-column terminal).
fn seeded_grid() -> Grid {
    Grid::from_alive(50, 100, &[(24, 50), (24, 51), (25, 49), (25, 50), (26, 50)])
}

fn bench_step_alloc(c: &mut Criterion) {
    let grid = seeded_grid();
    c.bench_function("step_50x100", |b| b.iter(|| step(black_box(&grid))));
}

fn bench_step_into(c: &mut Criterion) {
    let grid = seeded_grid();
    let mut scratch = Grid::new(50, 100);
    c.bench_function("step_into_50x100", |b| {
        b.iter(|| step_into(black_box(&grid), &mut scratch))
    });
}

fn bench_running_tick(c: &mut Criterion) {
    let mut state = AppState::new();
    state.update(Event::Resize {
        height: 50,
        width: 200,
    });
    for x in [98, 100, 102] {
        state.update(Event::Pointer {
            x,
            y: 25,
            button: tui_life::types::PointerButton::Left,
        });
    }
    state.update(Event::Key(Action::TogglePause));

    let mut at_ms = 0;
    c.bench_function("running_tick", |b| {
        b.iter(|| {
            at_ms += 100;
            state.update(black_box(Event::Tick { at_ms }));
        })
    });
}

criterion_group!(benches, bench_step_alloc, bench_step_into, bench_running_tick);
criterion_main!(benches);
