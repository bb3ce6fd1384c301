//! Performance benchmark comparing the serial and parallel step engines

use std::time::Instant;
use sparse_life::domain::{Algorithm, LiveSet, advance_by, presets, random_soup};

/// Milliseconds per generation for `iterations` steps starting from `seed`
fn benchmark(algorithm: Algorithm, seed: &LiveSet, iterations: u32) -> f64 {
    let mut live = seed.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        live = algorithm.advance(&live);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

const PRESET_GENERATIONS: u32 = 200;

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    for algorithm in Algorithm::all() {
        println!("{:<10} {}", algorithm.name(), algorithm.description());
    }
    println!();

    let iterations = 20;
    let seeds = [
        ("Gun @ gen 0", presets::glider_gun().at(0, 0)),
        ("Gun @ gen 3000", advance_by(&presets::glider_gun().at(0, 0), 3000)),
        ("Acorn @ gen 2000", advance_by(&presets::acorn().at(0, 0), 2000)),
        ("Soup 200x200", random_soup(0, 0, 200, 200, 0.3, 1)),
        ("Soup 1000x1000", random_soup(0, 0, 1000, 1000, 0.3, 1)),
    ];

    println!("{:>18} {:>10} {:>12} {:>12} {:>10}",
        "Seed", "Cells", "Serial", "Parallel", "Speedup");
    println!("{:-<68}", "");

    for (name, seed) in &seeds {
        let serial_ms = benchmark(Algorithm::Serial, seed, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, seed, iterations);

        println!(
            "{:>18} {:>10} {:>12.3} {:>12.3} {:>9.1}x",
            name,
            seed.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Presets ({} generations) ===\n", PRESET_GENERATIONS);

    println!("{:>14} {:>7} {:>6} {:>10} {:>10}  {}",
        "Pattern", "Size", "Cells", "Final", "ms/gen", "Description");
    println!("{:-<80}", "");

    for pattern in presets::all_patterns() {
        let seed = pattern.at(0, 0);
        let ms = benchmark(Algorithm::Serial, &seed, PRESET_GENERATIONS);
        let last = advance_by(&seed, PRESET_GENERATIONS as usize);
        println!(
            "{:>14} {:>7} {:>6} {:>10} {:>10.4}  {}",
            pattern.name,
            format!("{}x{}", pattern.width, pattern.height),
            seed.len(),
            last.len(),
            ms,
            pattern.description
        );
    }

    println!("\n=== Throughput ===\n");

    let (name, seed) = &seeds[seeds.len() - 1];
    for algorithm in Algorithm::all() {
        let ms = benchmark(algorithm, seed, iterations);
        println!("{:<10} {}: {:.2} ms/gen, {:.1}M live cells/sec",
            algorithm.name(), name, ms, (seed.len() as f64) / (ms / 1000.0) / 1_000_000.0);
    }
}
