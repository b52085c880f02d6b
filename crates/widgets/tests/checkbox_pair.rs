#![allow(clippy::unwrap_used)]

use dom::{NodeId, Page, PageConfig, PageEvent};
use widgets::{CheckboxPairWidget, ConfigurationError, Widget as _};

struct Pair {
    page: Page,
    container: NodeId,
    plus_box: NodeId,
    minus_box: NodeId,
    plus_image: NodeId,
    minus_image: NodeId,
}

fn build_pair() -> Pair {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut page = Page::new(PageConfig::default());
    let container = page.create_element("div");
    page.append_child(page.body(), container);

    let plus_box = page.create_element("input");
    page.set_attribute(plus_box, "class", "plus");
    let minus_box = page.create_element("input");
    page.set_attribute(minus_box, "class", "minus");
    let plus_image = page.create_element("img");
    page.set_attribute(plus_image, "class", "check-graphic-plus");
    page.set_attribute(plus_image, "src", "add-grey.gif");
    let minus_image = page.create_element("img");
    page.set_attribute(minus_image, "class", "check-graphic-minus");
    page.set_attribute(minus_image, "src", "remove-grey.gif");
    for node in [plus_box, minus_box, plus_image, minus_image] {
        page.append_child(container, node);
    }

    Pair {
        page,
        container,
        plus_box,
        minus_box,
        plus_image,
        minus_image,
    }
}

fn click(widget: &mut CheckboxPairWidget, page: &mut Page, target: NodeId) {
    widget.on_event(page, &PageEvent::Click { target });
}

#[test]
fn checking_one_side_clears_the_other() {
    let mut pair = build_pair();
    let mut widget = CheckboxPairWidget::attach(&pair.page, pair.container).unwrap();

    click(&mut widget, &mut pair.page, pair.plus_image);
    assert!(pair.page.is_checked(pair.plus_box));
    assert!(!pair.page.is_checked(pair.minus_box));
    assert_eq!(pair.page.attribute(pair.plus_image, "src"), Some("add.gif"));
    assert_eq!(
        pair.page.attribute(pair.minus_image, "src"),
        Some("remove-grey.gif")
    );

    click(&mut widget, &mut pair.page, pair.minus_image);
    assert!(!pair.page.is_checked(pair.plus_box));
    assert!(pair.page.is_checked(pair.minus_box));
    assert_eq!(
        pair.page.attribute(pair.plus_image, "src"),
        Some("add-grey.gif")
    );
    assert_eq!(
        pair.page.attribute(pair.minus_image, "src"),
        Some("remove.gif")
    );
}

#[test]
fn clicking_a_colored_control_unchecks_only_itself() {
    let mut pair = build_pair();
    let mut widget = CheckboxPairWidget::attach(&pair.page, pair.container).unwrap();

    click(&mut widget, &mut pair.page, pair.plus_image);
    click(&mut widget, &mut pair.page, pair.plus_image);
    assert!(!pair.page.is_checked(pair.plus_box));
    assert!(!pair.page.is_checked(pair.minus_box));
    assert_eq!(
        pair.page.attribute(pair.plus_image, "src"),
        Some("add-grey.gif")
    );
    assert_eq!(
        pair.page.attribute(pair.minus_image, "src"),
        Some("remove-grey.gif")
    );
}

#[test]
fn both_checked_is_unreachable_under_any_click_sequence() {
    let mut pair = build_pair();
    let mut widget = CheckboxPairWidget::attach(&pair.page, pair.container).unwrap();

    let sequence = [
        pair.plus_image,
        pair.minus_image,
        pair.minus_image,
        pair.plus_image,
        pair.plus_image,
        pair.minus_image,
        pair.plus_image,
    ];
    for target in sequence {
        click(&mut widget, &mut pair.page, target);
        let both = pair.page.is_checked(pair.plus_box) && pair.page.is_checked(pair.minus_box);
        assert!(!both, "mutual exclusion violated");
        // The image always mirrors its checkbox.
        let plus_src = pair.page.attribute(pair.plus_image, "src").unwrap();
        assert_eq!(
            pair.page.is_checked(pair.plus_box),
            !plus_src.contains("-grey")
        );
    }
}

#[test]
fn clicks_elsewhere_are_ignored() {
    let mut pair = build_pair();
    let mut widget = CheckboxPairWidget::attach(&pair.page, pair.container).unwrap();
    let container = pair.container;
    click(&mut widget, &mut pair.page, container);
    assert!(!pair.page.is_checked(pair.plus_box));
    assert!(!pair.page.is_checked(pair.minus_box));
}

#[test]
fn missing_structure_is_a_configuration_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut page = Page::new(PageConfig::default());
    let container = page.create_element("div");
    page.append_child(page.body(), container);
    let plus_box = page.create_element("input");
    page.set_attribute(plus_box, "class", "plus");
    page.append_child(container, plus_box);

    let result = CheckboxPairWidget::attach(&page, container);
    assert_eq!(
        result.err(),
        Some(ConfigurationError::MissingStructure {
            widget: "checkbox-pair",
            role: "minus checkbox",
        })
    );
}
