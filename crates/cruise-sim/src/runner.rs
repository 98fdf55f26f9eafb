//! The `Sim` struct and its step loop.

use cruise_agent::Agent;
use cruise_world::World;

use crate::{SimError, SimObserver, SimResult};

/// Driver-level configuration.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    /// Abort with [`SimError::StepLimitExceeded`] after this many steps.
    ///
    /// The core never bounds the loop itself — a destination that no lot can
    /// serve re-plans forever — so drivers that cannot tolerate that should
    /// set a limit.  `None` runs unbounded.
    pub max_steps: Option<u64>,
}

/// The simulation runner: owns one world and one agent and drives the
/// step/refresh loop until arrival.
///
/// ```text
/// loop:
///   ① Step     — agent re-plans against the current snapshot and moves
///                one hop (or arrives).
///   ② Refresh  — the world publishes a new snapshot with fresh traffic.
/// ```
///
/// Refreshing strictly between steps is what keeps a step atomic: the
/// snapshot an agent planned against is never replaced under it.
pub struct Sim {
    world: World,
    agent: Agent,
    config: SimConfig,
}

impl Sim {
    pub fn new(world: World, agent: Agent, config: SimConfig) -> Self {
        Self { world, agent, config }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Run until the agent arrives at its lot.
    ///
    /// Calls observer hooks around every step.  Returns the number of steps
    /// taken.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        let mut steps: u64 = 0;

        loop {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    return Err(SimError::StepLimitExceeded { limit });
                }
            }

            observer.on_step_start(steps, self.agent.current_position());
            let arrived = self.agent.step(&self.world)?;
            steps += 1;
            observer.on_step_end(steps, &self.agent, arrived);

            if arrived {
                break;
            }
            self.world.refresh()?;
        }

        if let Some(lot) = self.agent.target_lot() {
            log::info!("sim: agent arrived at lot {lot} after {steps} steps");
            observer.on_finish(steps, lot);
        }
        Ok(steps)
    }
}
