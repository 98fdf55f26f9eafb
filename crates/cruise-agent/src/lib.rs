//! `cruise-agent` — lot selection policy and the agent step state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`agent`]    | `Agent`: per-step re-plan, advance, arrival   |
//! | [`selector`] | `select_lot`: filter, rank, compromise policy |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                |

pub mod agent;
pub mod error;
pub mod selector;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use selector::select_lot;
