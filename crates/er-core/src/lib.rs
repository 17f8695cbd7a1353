//! `er-core`: foundational types for the emergency routing engine.
//!
//! This crate is a dependency of every other `er-*` crate.  It has no `er-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `EdgeId`                                        |
//! | [`geo`]       | `Position` (planar canvas coordinates)                    |
//! | [`severity`]  | `SeverityMode`, `TrafficFactor`, `QueryParams`            |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                          |
//! | [`error`]     | `EngineError`, `EngineResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod severity;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EngineError, EngineResult};
pub use geo::Position;
pub use ids::{EdgeId, NodeId};
pub use rng::SimRng;
pub use severity::{QueryParams, SeverityMode, TrafficFactor};
