//! Element geometry: box-model measurement, positioned-ancestor offsets
//! and viewport collision flags over the page model.

#![forbid(unsafe_code)]

pub mod boxes;
pub mod offset;
pub mod viewport;

pub use boxes::{BoxPolicy, ElementBox, Point, measure, within_bounds};
pub use offset::{Offset, positioned_parent_offset};
pub use viewport::{EdgeFlags, EdgeOffsets, ViewportEdges, outside_viewport, viewport_edges, viewport_offset};
