//! Node data stored in the page arena.

use smallvec::SmallVec;

use crate::style::ElementStyle;

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
}

/// Whether a node is rendered, and how it was last hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// `animated` records whether the hide ran a transition or was
    /// immediate.
    Hidden { animated: bool },
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Data carried by every node in the tree.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
    pub style: ElementStyle,
    /// Checkbox checked state; meaningless for non-input nodes.
    pub checked: bool,
    pub visibility: Visibility,
}

impl NodeData {
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_owned(),
            },
            ..Self::default()
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            ..Self::default()
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_owned();
        } else {
            self.attrs.push((name.to_owned(), value.to_owned()));
        }
    }

    /// Whether the `class` attribute contains `class_name` as a
    /// whitespace-separated token.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|token| token == class_name))
    }
}
