//! Simulation observer trait for progress reporting.

use cruise_agent::Agent;
use cruise_core::NodeId;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, agent: &Agent, arrived: bool) {
///         println!("step {step}: at {}", agent.current_position());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each step, with the agent's pre-step position.
    fn on_step_start(&mut self, _step: u64, _position: NodeId) {}

    /// Called after each completed step.
    ///
    /// `step` counts completed steps (so the first call passes 1).  The
    /// agent is borrowed read-only for position, target, and planned path.
    fn on_step_end(&mut self, _step: u64, _agent: &Agent, _arrived: bool) {}

    /// Called once when the agent reaches its lot.
    fn on_finish(&mut self, _steps: u64, _lot: NodeId) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
