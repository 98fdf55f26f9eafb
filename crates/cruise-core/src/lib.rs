//! `cruise-core` — foundational types for the `cruise` parking-search
//! simulation framework.
//!
//! This crate is a dependency of every other `cruise-*` crate.  It
//! intentionally has no `cruise-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                         |
//! |---------|----------------------------------|
//! | [`ids`] | `NodeId`, `EdgeId`               |
//! | [`rng`] | `SimRng` (deterministic, seeded) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EdgeId, NodeId};
pub use rng::SimRng;
