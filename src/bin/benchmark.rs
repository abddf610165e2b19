//! Tick timing at common viewport sizes (step + metadata + render)

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use life_canvas::{GameState, domain::CELL_SIZE};

fn benchmark_tick(width: u32, height: u32, iterations: u32) -> f64 {
    let mut state = GameState::new(Some(0x5EED));
    state.resize(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        state.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "=== Life Canvas Tick Benchmark ===\n")?;

    let viewports = [(640, 480), (1280, 800), (1920, 1080), (2560, 1440), (3840, 2160)];
    let iterations = 20;

    writeln!(out, "{:>12} {:>12} {:>12} {:>10}", "Viewport", "Grid", "ms/tick", "In 30ms")?;
    writeln!(out, "{:-<50}", "")?;

    for (width, height) in viewports {
        let ms = benchmark_tick(width, height, iterations);
        let fits = if ms <= 30.0 { "yes" } else { "no" };
        writeln!(
            out,
            "{:>12} {:>12} {:>12.2} {:>10}",
            format!("{}x{}", width, height),
            format!("{}x{}", width as usize / CELL_SIZE, height as usize / CELL_SIZE),
            ms,
            fits
        )
        .with_context(|| format!("writing result for {width}x{height}"))?;
    }
    Ok(())
}
