//! `er-network`: the weighted road graph and its mutation protocol.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`network`]   | `RoadGraph`, `OutEdge`, `CLOSED`, spatial snapping        |
//! | [`node`]      | `NodeRole`, `Capacity`, `NodeAttributes`                  |
//! | [`road`]      | `RoadType` (metadata only)                                |
//! | [`mutator`]   | closure / reopen / toggle / reset, `RoadStatus`           |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Weight semantics
//!
//! Every undirected road stores one immutable base weight and one mutable
//! current weight.  Both travel directions read the same record, so a
//! closure applied from either end is observed from both.  A closed road's
//! current weight is [`CLOSED`] (`f64::INFINITY`).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod mutator;
pub mod network;
pub mod node;
pub mod road;


pub use error::{NetworkError, NetworkResult};
pub use mutator::RoadStatus;
pub use network::{CLOSED, OutEdge, RoadGraph, Weight};
pub use node::{Capacity, NodeAttributes, NodeRole};
pub use road::RoadType;
