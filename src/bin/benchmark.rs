//! Generation throughput of the automaton at several grid sizes

use std::time::Instant;
use immortal_life::Automaton;

fn benchmark_update(size: usize, iterations: u32, immortal_every: usize) -> f64 {
    let mut life = Automaton::new(size, size);
    life.randomize();

    // Pin a sprinkling of live cells so the immortal branch is exercised
    if immortal_every > 0 {
        let (w, h) = life.grid_size();
        for i in (0..w * h).step_by(immortal_every) {
            let (x, y) = ((i % w) as i32, (i / w) as i32);
            if life.is_cell_alive(x, y) {
                life.toggle_immortal(x, y);
            }
        }
    }

    let start = Instant::now();
    for _ in 0..iterations {
        life.update();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Update Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>14} {:>14} {:>14}", "Size", "Mortal ms", "Immortal ms", "Mcells/s");
    println!("{:-<56}", "");

    for size in sizes {
        let mortal_ms = benchmark_update(size, iterations, 0);
        let immortal_ms = benchmark_update(size, iterations, 97);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>14.3} {:>14.3} {:>14.1}",
            format!("{}x{}", size, size),
            mortal_ms,
            immortal_ms,
            cells / (mortal_ms / 1000.0) / 1_000_000.0
        );
    }
}
