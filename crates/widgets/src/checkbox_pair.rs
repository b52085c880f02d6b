//! Mutually-exclusive checkbox pair rendered as swappable images.
//!
//! The pair lives inside one container: two `input` nodes classed `plus`
//! and `minus`, and two `img` nodes classed `check-graphic-plus` and
//! `check-graphic-minus` whose `src` filename doubles as the rendered
//! state (`-grey` suffix on the stem means unchecked). At most one of the
//! two checkboxes is ever checked.

use dom::{NodeId, Page, PageEvent};

use crate::{ConfigurationError, EventFlow, Widget};

#[derive(Clone, Copy, Debug)]
enum Control {
    Plus,
    Minus,
}

pub struct CheckboxPairWidget {
    plus_box: NodeId,
    minus_box: NodeId,
    plus_image: NodeId,
    minus_image: NodeId,
}

impl CheckboxPairWidget {
    /// Resolve the pair's checkboxes and images inside `container`.
    ///
    /// # Errors
    /// [`ConfigurationError::MissingStructure`] when any of the four
    /// expected children is absent.
    pub fn attach(page: &Page, container: NodeId) -> Result<Self, ConfigurationError> {
        let plus_box = page
            .find_by_class(container, Some("input"), "plus")
            .ok_or(missing("plus checkbox"))?;
        let minus_box = page
            .find_by_class(container, Some("input"), "minus")
            .ok_or(missing("minus checkbox"))?;
        let plus_image = page
            .find_by_class(container, Some("img"), "check-graphic-plus")
            .ok_or(missing("plus image"))?;
        let minus_image = page
            .find_by_class(container, Some("img"), "check-graphic-minus")
            .ok_or(missing("minus image"))?;
        log::debug!("checkbox pair attached");
        Ok(Self {
            plus_box,
            minus_box,
            plus_image,
            minus_image,
        })
    }

    fn toggle(&self, page: &mut Page, control: Control) {
        let (own_box, own_image, other_box, other_image) = match control {
            Control::Plus => (self.plus_box, self.plus_image, self.minus_box, self.minus_image),
            Control::Minus => (self.minus_box, self.minus_image, self.plus_box, self.plus_image),
        };
        let Some(source) = page.attribute(own_image, "src").map(str::to_owned) else {
            return;
        };

        if is_greyed(&source) {
            // Checking one side forces the other unchecked, whatever its
            // prior state.
            page.set_checked(own_box, true);
            page.set_attribute(own_image, "src", &colored(&source));
            page.set_checked(other_box, false);
            if let Some(other_source) = page.attribute(other_image, "src").map(str::to_owned) {
                page.set_attribute(other_image, "src", &greyed(&other_source));
            }
            log::debug!("{control:?} checked, counterpart cleared");
        } else {
            page.set_checked(own_box, false);
            page.set_attribute(own_image, "src", &greyed(&source));
            log::debug!("{control:?} unchecked");
        }
    }
}

impl Widget for CheckboxPairWidget {
    fn on_event(&mut self, page: &mut Page, event: &PageEvent) -> EventFlow {
        if let PageEvent::Click { target } = event {
            if *target == self.plus_image {
                self.toggle(page, Control::Plus);
            } else if *target == self.minus_image {
                self.toggle(page, Control::Minus);
            }
        }
        EventFlow::Continue
    }
}

fn missing(role: &'static str) -> ConfigurationError {
    ConfigurationError::MissingStructure {
        widget: "checkbox-pair",
        role,
    }
}

fn is_greyed(source: &str) -> bool {
    source.contains("-grey")
}

fn colored(source: &str) -> String {
    source.replacen("-grey", "", 1)
}

fn greyed(source: &str) -> String {
    if is_greyed(source) {
        return source.to_owned();
    }
    // The extension dot is only meaningful in the final path segment;
    // directory names may contain dots of their own.
    let name_start = source.rfind('/').map_or(0, |slash| slash + 1);
    match source[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            format!("{}-grey{}", &source[..dot], &source[dot..])
        }
        None => format!("{source}-grey"),
    }
}

#[cfg(test)]
mod tests {
    use super::{colored, greyed, is_greyed};

    #[test]
    fn grey_suffix_round_trips_on_the_file_stem() {
        assert_eq!(greyed("add.gif"), "add-grey.gif");
        assert_eq!(colored("add-grey.gif"), "add.gif");
        assert_eq!(greyed("remove-grey.gif"), "remove-grey.gif");
        assert!(is_greyed("icons/remove-grey.gif"));
        assert!(!is_greyed("icons/remove.gif"));
    }

    #[test]
    fn dots_in_directory_names_are_not_extension_dots() {
        assert_eq!(greyed("icons.v2/add.gif"), "icons.v2/add-grey.gif");
        assert_eq!(greyed("icons.v2/add"), "icons.v2/add-grey");
        assert_eq!(colored("icons.v2/add-grey.gif"), "icons.v2/add.gif");
    }
}
