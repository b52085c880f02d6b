//! Placeholder text emulation for hosts without native support.
//!
//! When the page reports native `placeholder` support the widget is a pure
//! passthrough. Otherwise it wraps the input, overlays a label styled from
//! the input's own border, padding and font metrics, and keeps the label's
//! visibility in sync with focus and the trimmed input value.

use dom::{NodeId, Page, PageEvent};
use geometry::{BoxPolicy, measure};

use crate::{ConfigurationError, EventFlow, Widget};

/// Caller-supplied label styling, merged over the computed defaults with
/// the caller winning on conflicting keys.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderConfig {
    pub custom_label_style: Vec<(String, String)>,
}

pub struct PlaceholderTextWidget {
    input: NodeId,
    /// `None` in passthrough mode.
    label: Option<NodeId>,
}

impl PlaceholderTextWidget {
    /// # Errors
    /// [`ConfigurationError::MissingStructure`] when emulation is needed
    /// but the input carries no `placeholder` attribute to display.
    pub fn attach(
        page: &mut Page,
        input: NodeId,
        config: &PlaceholderConfig,
    ) -> Result<Self, ConfigurationError> {
        if page.native_placeholder() {
            log::debug!("native placeholder support present, passthrough");
            return Ok(Self { input, label: None });
        }

        let hint = page
            .attribute(input, "placeholder")
            .map(str::to_owned)
            .ok_or(ConfigurationError::MissingStructure {
                widget: "placeholder-text",
                role: "placeholder attribute",
            })?;

        // Wrapper takes the input's place and its outer footprint, so the
        // absolutely positioned label lands on top of the input.
        let outer = measure(page, input, BoxPolicy::IncludePaddingAndBorder);
        let wrapper = page.create_element("div");
        page.set_attribute(wrapper, "class", "placeholder-wrapper");
        page.wrap(input, wrapper);
        if let Some(style) = page.style_mut(wrapper) {
            style.set_declaration("display", "inline-block");
            style.set_declaration("position", "relative");
            style.set_declaration("width", &format!("{}px", outer.width));
            style.set_declaration("height", &format!("{}px", outer.height));
        }

        let label = page.create_element("label");
        page.set_attribute(label, "class", "placeholder-text");
        page.insert_before(input, label);
        page.set_text(label, &hint);

        let metrics = page.style(input).clone();
        let top = metrics.border_width.top + metrics.padding.top;
        let left = metrics.border_width.left + metrics.padding.left;
        if let Some(style) = page.style_mut(label) {
            style.set_declaration("display", "inline-block");
            style.set_declaration("position", "absolute");
            style.set_declaration("cursor", "text");
            style.set_declaration("color", "#a0a0a0");
            style.set_declaration("top", &format!("{top}px"));
            style.set_declaration("left", &format!("{left}px"));
            style.set_declaration("font-size", &format!("{}px", metrics.font_size));
            style.set_declaration("line-height", &metrics.line_height.to_string());
            for (name, value) in &config.custom_label_style {
                style.set_declaration(name, value);
            }
        }

        if trimmed_value_empty(page, input) {
            page.show(label);
        } else {
            page.hide(label);
        }
        log::debug!("placeholder label injected for {hint:?}");
        Ok(Self {
            input,
            label: Some(label),
        })
    }
}

impl Widget for PlaceholderTextWidget {
    fn on_event(&mut self, page: &mut Page, event: &PageEvent) -> EventFlow {
        let Some(label) = self.label else {
            return EventFlow::Continue;
        };
        match event {
            PageEvent::Focus { target } if *target == self.input => {
                page.hide(label);
            }
            PageEvent::Blur { target } if *target == self.input => {
                if trimmed_value_empty(page, self.input) {
                    page.show(label);
                }
            }
            PageEvent::Click { target } if *target == label => {
                page.set_focus(Some(self.input));
            }
            _ => {}
        }
        EventFlow::Continue
    }
}

fn trimmed_value_empty(page: &Page, input: NodeId) -> bool {
    page.attribute(input, "value")
        .unwrap_or("")
        .trim()
        .is_empty()
}
