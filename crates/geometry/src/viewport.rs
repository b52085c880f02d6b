//! Viewport edges and element collision flags.

use dom::{NodeId, Page};

use crate::boxes::{BoxPolicy, measure};

/// The viewport's four edges in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportEdges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Current viewport edges from the scroll position and window size.
pub fn viewport_edges(page: &Page) -> ViewportEdges {
    let view = page.viewport();
    ViewportEdges {
        top: view.scroll_top,
        bottom: view.scroll_top + view.height,
        left: view.scroll_left,
        right: view.scroll_left + view.width,
    }
}

/// Signed distances of an element's edges from the viewport's edges.
///
/// Top and left are measured from the near viewport edges (negative means
/// the element starts above or left of the viewport). Bottom and right are
/// the element's far edge minus the viewport's far edge (positive means
/// the element extends past it).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeOffsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

pub fn viewport_offset(page: &Page, node: NodeId) -> EdgeOffsets {
    let style = page.style(node);
    let outer = measure(page, node, BoxPolicy::IncludePaddingAndBorder);
    let edges = viewport_edges(page);
    EdgeOffsets {
        top: style.page_top - edges.top,
        bottom: style.page_top + outer.height - edges.bottom,
        left: style.page_left - edges.left,
        right: style.page_left + outer.width - edges.right,
    }
}

/// Which edges of an element lie outside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

pub fn outside_viewport(page: &Page, node: NodeId) -> EdgeFlags {
    let offsets = viewport_offset(page, node);
    EdgeFlags {
        top: offsets.top < 0.0,
        right: offsets.right > 0.0,
        bottom: offsets.bottom > 0.0,
        left: offsets.left < 0.0,
    }
}
