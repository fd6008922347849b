//! `gv-core`: foundational types for the `gridvis` reconciliation engine.
//!
//! This crate is a dependency of every other `gv-*` crate.  It has no `gv-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`time`]        | `Day`, `Millis`                                       |
//! | [`status`]      | `Status` (per node), `Category` (per tally bucket)    |
//! | [`stats`]       | `TargetStats`, two-decimal rounding helpers           |
//! | [`config`]      | `VisConfig`                                           |
//! | [`rng`]         | `GridRng`                                             |
//! | [`error`]       | `GvError`, `GvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and stats types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod stats;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::VisConfig;
pub use error::{GvError, GvResult};
pub use ids::NodeId;
pub use rng::GridRng;
pub use stats::{TargetStats, round_count, round_pct};
pub use status::{Category, Status};
pub use time::{Day, Millis};
