//! Box-model measurement under the four inclusion policies.

use dom::{NodeId, Page};

/// Which box edges a measurement includes, from the content box out to the
/// margin box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxPolicy {
    ContentOnly,
    IncludePadding,
    IncludePaddingAndBorder,
    IncludeAll,
}

/// Width and height of an element under some [`BoxPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ElementBox {
    pub width: f32,
    pub height: f32,
}

/// A point in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Measure the element under `policy`, matching the native box model:
/// content, plus padding, plus padding and border, plus margin.
pub fn measure(page: &Page, node: NodeId, policy: BoxPolicy) -> ElementBox {
    let style = page.style(node);
    let mut width = style.width;
    let mut height = style.height;

    if !matches!(policy, BoxPolicy::ContentOnly) {
        width += style.padding.left + style.padding.right;
        height += style.padding.top + style.padding.bottom;
    }
    if matches!(policy, BoxPolicy::IncludePaddingAndBorder | BoxPolicy::IncludeAll) {
        width += style.border_width.left + style.border_width.right;
        height += style.border_width.top + style.border_width.bottom;
    }
    if matches!(policy, BoxPolicy::IncludeAll) {
        width += style.margin.left + style.margin.right;
        height += style.margin.top + style.margin.bottom;
    }

    ElementBox { width, height }
}

/// Inclusive bounds test against the element's margin box at its page
/// offset.
pub fn within_bounds(page: &Page, point: Point, node: NodeId) -> bool {
    let style = page.style(node);
    let bounds = measure(page, node, BoxPolicy::IncludeAll);

    point.y >= style.page_top
        && point.y <= style.page_top + bounds.height
        && point.x >= style.page_left
        && point.x <= style.page_left + bounds.width
}
