#![allow(clippy::unwrap_used)]

use dom::{Edges, Page, PageConfig};
use geometry::{BoxPolicy, Point, measure, within_bounds};

fn page_with_box() -> (Page, dom::NodeId) {
    let mut page = Page::new(PageConfig::default());
    let node = page.create_element("div");
    page.append_child(page.body(), node);
    let style = page.style_mut(node).unwrap();
    style.width = 100.0;
    style.height = 50.0;
    style.padding = Edges::uniform(5.0);
    style.border_width = Edges::uniform(2.0);
    style.margin = Edges::uniform(10.0);
    style.page_left = 200.0;
    style.page_top = 300.0;
    (page, node)
}

#[test]
fn four_policies_match_the_box_model() {
    let (page, node) = page_with_box();

    let content = measure(&page, node, BoxPolicy::ContentOnly);
    assert_eq!((content.width, content.height), (100.0, 50.0));

    let padded = measure(&page, node, BoxPolicy::IncludePadding);
    assert_eq!((padded.width, padded.height), (110.0, 60.0));

    let bordered = measure(&page, node, BoxPolicy::IncludePaddingAndBorder);
    assert_eq!((bordered.width, bordered.height), (114.0, 64.0));

    let all = measure(&page, node, BoxPolicy::IncludeAll);
    assert_eq!((all.width, all.height), (134.0, 84.0));
}

#[test]
fn policies_are_monotone_for_non_negative_metrics() {
    let (page, node) = page_with_box();
    let widths: Vec<f32> = [
        BoxPolicy::ContentOnly,
        BoxPolicy::IncludePadding,
        BoxPolicy::IncludePaddingAndBorder,
        BoxPolicy::IncludeAll,
    ]
    .into_iter()
    .map(|policy| measure(&page, node, policy).width)
    .collect();
    assert!(widths.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn bounds_test_is_inclusive_on_the_margin_box() {
    let (page, node) = page_with_box();
    // Margin box: origin (200, 300), 134 x 84.
    assert!(within_bounds(&page, Point { x: 200.0, y: 300.0 }, node));
    assert!(within_bounds(&page, Point { x: 334.0, y: 384.0 }, node));
    assert!(within_bounds(&page, Point { x: 250.0, y: 350.0 }, node));
    assert!(!within_bounds(&page, Point { x: 199.9, y: 350.0 }, node));
    assert!(!within_bounds(&page, Point { x: 250.0, y: 384.1 }, node));
}
