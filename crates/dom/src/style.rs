//! Per-element style metrics.

/// Widths on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// CSS positioning scheme of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssPosition {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl CssPosition {
    /// Whether the element establishes a coordinate origin for absolutely
    /// positioned descendants.
    pub fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// Resolved style of one element.
///
/// Sizes are in px. `width`/`height` describe the content box;
/// `page_left`/`page_top` the border-box origin in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    pub position: CssPosition,
    pub margin: Edges,
    pub padding: Edges,
    pub border_width: Edges,
    pub width: f32,
    pub height: f32,
    pub page_left: f32,
    pub page_top: f32,
    /// Scroll offsets of the element's own scrolling box.
    pub scroll_left: f32,
    pub scroll_top: f32,
    pub font_size: f32,
    /// Unitless multiplier of `font_size`.
    pub line_height: f32,
    declarations: Vec<(String, String)>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            position: CssPosition::default(),
            margin: Edges::default(),
            padding: Edges::default(),
            border_width: Edges::default(),
            width: 0.0,
            height: 0.0,
            page_left: 0.0,
            page_top: 0.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
            font_size: 16.0,
            line_height: 1.2,
            declarations: Vec::new(),
        }
    }
}

impl ElementStyle {
    /// Set a free-form declaration; the last write per key wins.
    pub fn set_declaration(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.declarations.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_owned();
        } else {
            self.declarations.push((name.to_owned(), value.to_owned()));
        }
    }

    pub fn declaration(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
