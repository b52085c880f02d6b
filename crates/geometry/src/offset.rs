//! Positioned-ancestor offset, with the legacy IE scroll correction.

use dom::{NodeId, Page};
use useragent::BrowserProfile;

/// A page-coordinate offset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub left: f32,
    pub top: f32,
}

/// Page offset of the element's nearest positioned ancestor.
///
/// Zero when no positioned ancestor exists or when that ancestor is the
/// document root or body. IE 7 and below fold an ancestor's scroll offsets
/// into its reported offset, so they are subtracted back out there.
pub fn positioned_parent_offset(page: &Page, node: NodeId, profile: &BrowserProfile) -> Offset {
    let Some(ancestor) = page.positioned_ancestor(node) else {
        return Offset::default();
    };
    if page.tag(ancestor) == Some("body") {
        return Offset::default();
    }

    let style = page.style(ancestor);
    let mut parent_offset = Offset {
        left: style.page_left,
        top: style.page_top,
    };
    if profile.is_ie_at_most(7.0) {
        log::trace!("applying IE<=7 scroll correction to positioned ancestor offset");
        parent_offset.left -= style.scroll_left;
        parent_offset.top -= style.scroll_top;
    }
    parent_offset
}
