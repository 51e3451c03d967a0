use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Instant;

use tui_arcade::blocks::{BlockColor, BlocksGame, Grid, GRID_COLS};
use tui_arcade::fighter::{FighterGame, FighterInputs, Phase};
use tui_arcade::shooter::{EnemyKind, ShooterGame};

fn bench_blocks_step(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    c.bench_function("blocks_step_16ms", |b| {
        b.iter(|| {
            game.step(black_box(16));
        })
    });
}

fn bench_grid_sweep(c: &mut Criterion) {
    c.bench_function("grid_sweep_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..GRID_COLS as i8 {
                    grid.set(x, y, Some(BlockColor::Cyan));
                }
            }
            black_box(grid.sweep())
        })
    });
}

fn bench_shooter_frame(c: &mut Criterion) {
    let mut game = ShooterGame::new(12345);
    game.set_firing(true);
    // A busy but steady field.
    for i in 0..20 {
        game.spawn_enemy(20.0 + i as f32 * 18.0, 40.0, 30.0, 0.0, EnemyKind::Chaser);
    }
    c.bench_function("shooter_frame_busy", |b| {
        b.iter(|| {
            game.step();
        })
    });
}

fn bench_fighter_frame(c: &mut Criterion) {
    let mut game = FighterGame::new(12345);
    game.confirm_selection(Instant::now());
    let inputs = FighterInputs {
        right: true,
        punch: true,
        ..FighterInputs::default()
    };
    c.bench_function("fighter_frame_brawl", |b| {
        b.iter(|| {
            game.step(black_box(inputs));
            if matches!(game.phase(), Phase::RoundOver { .. }) {
                game.rematch(Instant::now());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_blocks_step,
    bench_grid_sweep,
    bench_shooter_frame,
    bench_fighter_frame
);
criterion_main!(benches);
