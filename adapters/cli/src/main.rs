#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line demo that drives the gamekit utility crates.

use anyhow::{ensure, Context};
use clap::{Parser, Subcommand};
use gamekit_collections::Window;
use gamekit_num::map_between_ranges;
use gamekit_sampling::ShuffleRandom;
use gamekit_values::SpringF32;

/// Demo harness exercising the gamekit utility crates.
#[derive(Debug, Parser)]
#[command(name = "gamekit")]
struct Cli {
    #[command(subcommand)]
    command: DemoCommand,
}

#[derive(Debug, Subcommand)]
enum DemoCommand {
    /// Draw values from the deck-based shuffle sampler.
    Sample {
        /// Seed for the deterministic generator.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Exclusive upper bound of the sampled values.
        #[arg(long, default_value_t = 6)]
        range: u32,
        /// Number of decks shuffled together per refill.
        #[arg(long, default_value_t = 2)]
        decks: u32,
        /// Number of values to draw.
        #[arg(long, default_value_t = 24)]
        count: usize,
    },
    /// Step a spring toward a target and chart its trajectory.
    Spring {
        /// Value the spring pulls toward.
        #[arg(long, default_value_t = 1.0)]
        target: f32,
        /// Spring constant k.
        #[arg(long, default_value_t = 10.0)]
        stiffness: f32,
        /// Damping applied per multiple of velocity.
        #[arg(long, default_value_t = 1.0)]
        damping: f32,
        /// Number of simulation steps.
        #[arg(long, default_value_t = 48)]
        steps: u32,
        /// Seconds advanced per step.
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
    },
}

/// Entry point for the gamekit demo binary.
fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        DemoCommand::Sample {
            seed,
            range,
            decks,
            count,
        } => run_sample(seed, range, decks, count),
        DemoCommand::Spring {
            target,
            stiffness,
            damping,
            steps,
            dt,
        } => run_spring(target, stiffness, damping, steps, dt),
    }
}

fn run_sample(seed: u64, range: u32, decks: u32, count: usize) -> anyhow::Result<()> {
    let mut sampler =
        ShuffleRandom::from_seed(seed, range, decks).context("invalid sampler configuration")?;

    let draws: Vec<u32> = (0..count).map(|_| sampler.next()).collect();
    println!("draws: {draws:?}");

    let mut counts = vec![0_usize; range as usize];
    for &value in &draws {
        counts[value as usize] += 1;
    }
    for (value, count) in counts.iter().enumerate() {
        println!("{value:>4} | {}", "#".repeat(*count));
    }

    Ok(())
}

fn run_spring(target: f32, stiffness: f32, damping: f32, steps: u32, dt: f32) -> anyhow::Result<()> {
    ensure!(dt > 0.0, "step duration must be positive");

    let mut spring = SpringF32::new(stiffness, damping);
    spring.target = target;
    let mut recent = Window::new(8);

    let chart_limit = target.abs().max(1.0) * 1.5;
    for step in 0..steps {
        spring.step(dt);
        recent.push(spring.current);

        let mean = recent.values().copied().sum::<f32>() / recent.len() as f32;
        let columns = map_between_ranges(spring.current.abs(), 0.0, chart_limit, 0.0, 40.0) as usize;
        println!(
            "{step:>4} {current:>9.4} (window mean {mean:>9.4}) |{bar}",
            current = spring.current,
            bar = "*".repeat(columns),
        );
    }

    Ok(())
}
