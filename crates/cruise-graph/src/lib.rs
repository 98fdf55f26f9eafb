//! `cruise-graph` — street-graph snapshot and routing algorithms.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`graph`] | `StreetGraph` (CSR), `StreetGraphBuilder`                 |
//! | [`algo`]  | `shortest_paths_from`, `hop_matrix`, `bfs_order`          |
//! | [`error`] | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod algo;
pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use algo::{bfs_order, hop_matrix, shortest_paths_from, HopMatrix, ShortestPaths};
pub use error::{GraphError, GraphResult};
pub use graph::{StreetGraph, StreetGraphBuilder};
