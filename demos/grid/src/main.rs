//! grid — smallest demo for the cruise parking-search framework.
//!
//! One agent crosses a 4×4 grid of streets whose traffic is redrawn after
//! every step, picks the best of three parking lots near its destination,
//! and walks the last leg.  Run with `RUST_LOG=debug` for the per-step
//! planning trace.

use std::time::Instant;

use anyhow::Result;

use cruise_agent::Agent;
use cruise_core::NodeId;
use cruise_sim::{Sim, SimConfig, SimObserver};
use cruise_world::{World, WorldConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const START: NodeId = NodeId(0);
const DESTINATION: NodeId = NodeId(15);
const MAX_WALKING_DIST: f64 = 3.0;
const MAX_STEPS: u64 = 1_000;

// ── Observer ──────────────────────────────────────────────────────────────────

struct StepPrinter;

impl SimObserver for StepPrinter {
    fn on_step_end(&mut self, step: u64, agent: &Agent, arrived: bool) {
        println!(
            "{:<6} {:<12} {:<12} {}",
            step,
            agent.current_position().to_string(),
            agent
                .target_lot()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".into()),
            if arrived { "arrived" } else { "driving" },
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("=== grid — cruise parking-search demo ===");
    println!("Seed: {SEED}  |  Start: {START}  |  Destination: {DESTINATION}");
    println!();

    let world = World::generate(WorldConfig::default(), SEED)?;
    println!(
        "Street grid: {} nodes, lots at {:?}",
        world.node_count(),
        world.parking_lot_nodes()
    );
    println!();
    println!("{:<6} {:<12} {:<12} {}", "Step", "Position", "Target", "State");
    println!("{}", "-".repeat(44));

    let agent = Agent::new(START, DESTINATION, MAX_WALKING_DIST, &world)?;
    let mut sim = Sim::new(world, agent, SimConfig { max_steps: Some(MAX_STEPS) });

    let t0 = Instant::now();
    let steps = sim.run(&mut StepPrinter)?;
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Parked at {} after {} steps ({:.3} ms)",
        sim.agent().current_position(),
        steps,
        elapsed.as_secs_f64() * 1e3
    );
    Ok(())
}
