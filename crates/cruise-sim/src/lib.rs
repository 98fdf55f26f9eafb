//! `cruise-sim` — step loop orchestrator for the cruise framework.
//!
//! # Step loop
//!
//! ```text
//! loop:
//!   ① Step     — Agent::step re-plans and advances one hop.
//!   ② Refresh  — World::refresh publishes fresh traffic.
//! until the agent arrives (or an optional step limit trips).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cruise_agent::Agent;
//! use cruise_core::NodeId;
//! use cruise_sim::{NoopObserver, Sim, SimConfig};
//! use cruise_world::{World, WorldConfig};
//!
//! let world = World::generate(WorldConfig::default(), 42)?;
//! let agent = Agent::new(NodeId(0), NodeId(15), 3.0, &world)?;
//! let mut sim = Sim::new(world, agent, SimConfig { max_steps: Some(1_000) });
//! let steps = sim.run(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod runner;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use runner::{Sim, SimConfig};
