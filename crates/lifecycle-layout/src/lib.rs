//! Lifecycle Layout
//!
//! Assigns coordinates to the visible nodes of a [`lifecycle_tree::DiagramTree`].
//!
//! - **Radial**: angle by leaf slot over `[0, 2π)`, radius by depth.
//! - **Linear**: x by depth, y by leaf slot.
//!
//! Only visible nodes are placed, and edges are emitted only between a visible
//! node and its visible parent.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod mode;
mod tidy;

pub use engine::{compute, Layout, LayoutEdge, Placement};
pub use error::LayoutError;
pub use geometry::{Bounds, Point, Polar};
pub use mode::{LayoutMode, LayoutParams};
