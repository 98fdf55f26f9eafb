//! `cruise-world` — the environment: street graph snapshots and parking lots.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`config`] | `WorldConfig` (grid shape, bounds, lot count)    |
//! | [`world`]  | `World`: snapshot publication, refresh, lot table|
//! | [`error`]  | `WorldError`, `WorldResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod config;
pub mod error;
pub mod world;


pub use config::WorldConfig;
pub use error::{WorldError, WorldResult};
pub use world::World;
