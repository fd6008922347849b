//! `gv-grid`: node state and grid storage for the `gridvis` engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`palette`]     | `Rgb`, status colours, per-channel stepping               |
//! | [`node`]        | `Node`: status plus colour-shift animation state          |
//! | [`grid`]        | `Grid`, `PresentationMode`, `GridView`, `Cell`            |
//!
//! The grid exclusively owns every node.  Status changes go through
//! [`Grid::convert`], which is the only path to a node's `convert_*`
//! transitions, so the grid's dirty flags always agree with node state.

pub mod grid;
pub mod node;
pub mod palette;


pub use grid::{Cell, Grid, GridView, PresentationMode};
pub use node::{DEFAULT_MAX_STEP, Node};
pub use palette::{Rgb, status_colour};
