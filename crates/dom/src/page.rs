//! The page: node tree plus viewport, focus, cookies and environment.

use cookies::CookieJar;
use indextree::{Arena, NodeId};

use crate::node::{NodeData, NodeKind, Visibility};
use crate::style::ElementStyle;

/// Scroll position and visible size of the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_left: f32,
    pub scroll_top: f32,
    pub width: f32,
    pub height: f32,
}

/// Environment the page was loaded into.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub user_agent: String,
    /// `window.orientation` in degrees; desktop browsers expose none.
    pub orientation_degrees: Option<i32>,
    /// Whether the host natively supports the `placeholder` attribute on
    /// text inputs and textareas.
    pub native_placeholder: bool,
    pub viewport: Viewport,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_owned(),
            orientation_degrees: None,
            native_placeholder: true,
            viewport: Viewport {
                scroll_left: 0.0,
                scroll_top: 0.0,
                width: 1024.0,
                height: 768.0,
            },
        }
    }
}

/// A single browser page context. All mutation happens synchronously from
/// whichever handler is active; nodes are never freed, so node ids stay
/// valid for the lifetime of the page.
pub struct Page {
    arena: Arena<NodeData>,
    root: NodeId,
    body: NodeId,
    viewport: Viewport,
    focused: Option<NodeId>,
    cookies: CookieJar,
    user_agent: String,
    orientation_degrees: Option<i32>,
    native_placeholder: bool,
    fallback_style: ElementStyle,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::default());
        let body = arena.new_node(NodeData::element("body"));
        root.append(body, &mut arena);
        log::trace!(
            "page created: ua={:?} orientation={:?} native_placeholder={}",
            config.user_agent,
            config.orientation_degrees,
            config.native_placeholder
        );
        Self {
            arena,
            root,
            body,
            viewport: config.viewport,
            focused: None,
            cookies: CookieJar::new(),
            user_agent: config.user_agent,
            orientation_degrees: config.orientation_degrees,
            native_placeholder: config.native_placeholder,
            fallback_style: ElementStyle::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.arena.get(node).map(indextree::Node::get)
    }

    fn data_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.arena.get_mut(node).map(indextree::Node::get_mut)
    }

    // --- tree construction ---

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(NodeData::element(tag))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(NodeData::text(text))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Insert `new_node` as the previous sibling of `reference`.
    pub fn insert_before(&mut self, reference: NodeId, new_node: NodeId) {
        reference.insert_before(new_node, &mut self.arena);
    }

    /// Put `wrapper` at `node`'s position and move `node` inside it.
    pub fn wrap(&mut self, node: NodeId, wrapper: NodeId) {
        node.insert_before(wrapper, &mut self.arena);
        node.detach(&mut self.arena);
        wrapper.append(node, &mut self.arena);
    }

    // --- tree queries ---

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(indextree::Node::parent)
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.data(node).and_then(NodeData::tag)
    }

    /// First descendant of `scope` (excluding `scope` itself) that carries
    /// `class_name`, optionally restricted to a tag.
    pub fn find_by_class(
        &self,
        scope: NodeId,
        tag: Option<&str>,
        class_name: &str,
    ) -> Option<NodeId> {
        scope.descendants(&self.arena).skip(1).find(|&candidate| {
            self.data(candidate).is_some_and(|data| {
                tag.is_none_or(|wanted| data.tag() == Some(wanted)) && data.has_class(class_name)
            })
        })
    }

    /// First element anywhere in the document with the given `id`
    /// attribute.
    pub fn find_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.root.descendants(&self.arena).find(|&candidate| {
            self.data(candidate)
                .is_some_and(|data| data.attribute("id") == Some(dom_id))
        })
    }

    /// Nearest ancestor with non-static positioning, the `offsetParent`
    /// analog. `None` means the document root is the offset origin.
    pub fn positioned_ancestor(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.parent(node);
        while let Some(candidate) = current {
            let positioned = self.data(candidate).is_some_and(|data| {
                data.tag().is_some() && data.style.position.is_positioned()
            });
            if positioned {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    // --- attributes, text, state ---

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.data(node).and_then(|data| data.attribute(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.data_mut(node) {
            data.set_attribute(name, value);
        }
    }

    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.data(node).is_some_and(|data| data.has_class(class_name))
    }

    /// Text of the node's first text child.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        node.children(&self.arena).find_map(|child| {
            match &self.data(child)?.kind {
                NodeKind::Text { text } => Some(text.as_str()),
                _ => None,
            }
        })
    }

    /// Replace the node's text content, creating a text child if needed.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let existing = node.children(&self.arena).find(|&child| {
            self.data(child)
                .is_some_and(|data| matches!(data.kind, NodeKind::Text { .. }))
        });
        match existing {
            Some(child) => {
                if let Some(data) = self.data_mut(child) {
                    data.kind = NodeKind::Text {
                        text: text.to_owned(),
                    };
                }
            }
            None => {
                let child = self.arena.new_node(NodeData::text(text));
                node.append(child, &mut self.arena);
            }
        }
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.data(node).is_some_and(|data| data.checked)
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(data) = self.data_mut(node) {
            data.checked = checked;
        }
    }

    // --- style ---

    pub fn style(&self, node: NodeId) -> &ElementStyle {
        self.data(node)
            .map_or(&self.fallback_style, |data| &data.style)
    }

    pub fn style_mut(&mut self, node: NodeId) -> Option<&mut ElementStyle> {
        self.data_mut(node).map(|data| &mut data.style)
    }

    // --- visibility ---

    pub fn visibility(&self, node: NodeId) -> Visibility {
        self.data(node)
            .map_or(Visibility::Visible, |data| data.visibility)
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.visibility(node).is_visible()
    }

    pub fn show(&mut self, node: NodeId) {
        if let Some(data) = self.data_mut(node) {
            data.visibility = Visibility::Visible;
        }
    }

    /// Hide immediately, no transition.
    pub fn hide(&mut self, node: NodeId) {
        if let Some(data) = self.data_mut(node) {
            data.visibility = Visibility::Hidden { animated: false };
        }
    }

    /// Hide with a transition.
    pub fn fade_out(&mut self, node: NodeId) {
        if let Some(data) = self.data_mut(node) {
            data.visibility = Visibility::Hidden { animated: true };
        }
    }

    // --- focus ---

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_focus(&mut self, node: Option<NodeId>) {
        self.focused = node;
    }

    // --- environment ---

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    pub fn cookies_mut(&mut self) -> &mut CookieJar {
        &mut self.cookies
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn orientation_degrees(&self) -> Option<i32> {
        self.orientation_degrees
    }

    pub fn native_placeholder(&self) -> bool {
        self.native_placeholder
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::style::CssPosition;

    fn page() -> Page {
        Page::new(PageConfig::default())
    }

    #[test]
    fn attributes_and_classes() {
        let mut page = page();
        let node = page.create_element("input");
        page.append_child(page.body(), node);
        page.set_attribute(node, "class", "plus check");
        assert!(page.has_class(node, "plus"));
        assert!(page.has_class(node, "check"));
        assert!(!page.has_class(node, "chec"));
        page.set_attribute(node, "class", "minus");
        assert!(!page.has_class(node, "plus"));
    }

    #[test]
    fn find_by_class_is_scoped_and_tag_filtered() {
        let mut page = page();
        let container = page.create_element("div");
        page.append_child(page.body(), container);
        let image = page.create_element("img");
        page.set_attribute(image, "class", "plus");
        page.append_child(container, image);
        let input = page.create_element("input");
        page.set_attribute(input, "class", "plus");
        page.append_child(container, input);

        assert_eq!(page.find_by_class(container, Some("input"), "plus"), Some(input));
        assert_eq!(page.find_by_class(container, Some("img"), "plus"), Some(image));
        assert_eq!(page.find_by_class(container, None, "plus"), Some(image));
        assert_eq!(page.find_by_class(image, None, "plus"), None);
    }

    #[test]
    fn wrap_moves_node_inside_wrapper_at_its_position() {
        let mut page = page();
        let before = page.create_element("span");
        let input = page.create_element("input");
        let after = page.create_element("span");
        for node in [before, input, after] {
            page.append_child(page.body(), node);
        }

        let wrapper = page.create_element("div");
        page.wrap(input, wrapper);

        assert_eq!(page.parent(input), Some(wrapper));
        assert_eq!(page.parent(wrapper), Some(page.body()));
        let order: Vec<NodeId> = page.children(page.body()).collect();
        assert_eq!(order, vec![before, wrapper, after]);
    }

    #[test]
    fn set_text_replaces_existing_content() {
        let mut page = page();
        let node = page.create_element("p");
        page.append_child(page.body(), node);
        assert_eq!(page.text(node), None);
        page.set_text(node, "first");
        assert_eq!(page.text(node), Some("first"));
        page.set_text(node, "second");
        assert_eq!(page.text(node), Some("second"));
        assert_eq!(page.children(node).count(), 1);
    }

    #[test]
    fn positioned_ancestor_skips_static_parents() {
        let mut page = page();
        let outer = page.create_element("div");
        let inner = page.create_element("div");
        let leaf = page.create_element("span");
        page.append_child(page.body(), outer);
        page.append_child(outer, inner);
        page.append_child(inner, leaf);

        assert_eq!(page.positioned_ancestor(leaf), None);
        if let Some(style) = page.style_mut(outer) {
            style.position = CssPosition::Relative;
        }
        assert_eq!(page.positioned_ancestor(leaf), Some(outer));
    }
}
