/// Simple custom benchmarking without criterion
use std::time::{Duration, Instant};

use bevy::math::IVec2;
use sand2d::{GridSimulator, PointerState, SimParams};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn half_full(side: u32, diagonal_fall: bool) -> GridSimulator {
    let params = SimParams::landing_sand()
        .with_diagonal_fall(diagonal_fall)
        .with_grid_size(side, side);
    let mut simulator = GridSimulator::seeded(params, 0xC0FFEE).unwrap();

    // Checkerboard over the top half keeps every pass busy
    for x in 0..side as i32 {
        for y in 0..side as i32 / 2 {
            if (x + y) % 2 == 0 {
                simulator.grid_mut().set(IVec2::new(x, y), true);
            }
        }
    }
    simulator
}

fn main() {
    println!("\n=== sand2d Benchmarks ===\n");

    println!("--- Settle ---");
    for &side in &[100, 200, 400] {
        for diagonal_fall in [false, true] {
            let mut simulator = half_full(side, diagonal_fall);
            time_it(
                &format!("settle (grid={side}x{side}, diagonal={diagonal_fall})"),
                50,
                || {
                    simulator.settle();
                },
            );
        }
    }

    println!("\n--- Paint + Settle ---");
    for &side in &[100, 400] {
        let mut simulator = half_full(side, true);
        let mut now = Duration::ZERO;
        let center = side as i32 / 2;
        time_it(&format!("tick (grid={side}x{side})"), 50, || {
            now += simulator.params().update_interval;
            simulator.tick(now, PointerState::pressed_at(center, center));
        });
    }

    println!("\n=== Benchmark Complete ===\n");
}
