//! Sample home page: builds a small document, attaches every widget and
//! drives a scripted event sequence, logging the observable state.

use anyhow::Result;
use dom::{NodeId, Page, PageConfig, PageEvent, Viewport};
use useragent::{BrowserProfile, ie_style_classes};
use widgets::{
    CheckboxPairWidget, Dispatcher, PageTimestamp, PlaceholderConfig, PlaceholderTextWidget,
    UnsupportedBrowserWarningWidget, WarningConfig,
};

struct HomePage {
    banner: NodeId,
    dismiss: NodeId,
    query: NodeId,
    pair: NodeId,
    plus_image: NodeId,
    minus_image: NodeId,
    timestamp: NodeId,
}

fn build_home_page(page: &mut Page) -> HomePage {
    let body = page.body();

    let banner = page.create_element("div");
    page.set_attribute(banner, "id", "unsupported-browser-warning");
    page.append_child(body, banner);
    page.set_text(banner, "Your browser is no longer supported.");
    let dismiss = page.create_element("a");
    page.set_attribute(dismiss, "class", "dismiss");
    page.append_child(banner, dismiss);
    page.set_text(dismiss, "Dismiss");

    let timestamp = page.create_element("p");
    page.set_attribute(timestamp, "id", "timestamp");
    page.append_child(body, timestamp);
    let update = page.create_element("a");
    page.set_attribute(update, "id", "update-timestamp");
    page.append_child(body, update);

    let query = page.create_element("input");
    page.set_attribute(query, "placeholder", "Search");
    page.append_child(body, query);
    if let Some(style) = page.style_mut(query) {
        style.width = 160.0;
        style.height = 18.0;
        style.padding = dom::Edges::uniform(3.0);
        style.border_width = dom::Edges::uniform(1.0);
    }

    let pair = page.create_element("div");
    page.append_child(body, pair);
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
        page.append_child(pair, node);
    }

    HomePage {
        banner,
        dismiss,
        query,
        pair,
        plus_image,
        minus_image,
        timestamp,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // An IE7 visitor without native placeholder support, to exercise every
    // widget path.
    let mut page = Page::new(PageConfig {
        user_agent: "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1)".to_owned(),
        orientation_degrees: None,
        native_placeholder: false,
        viewport: Viewport {
            scroll_left: 0.0,
            scroll_top: 0.0,
            width: 1024.0,
            height: 768.0,
        },
    });
    let home = build_home_page(&mut page);

    let profile = BrowserProfile::from_environment(page.user_agent(), page.orientation_degrees());
    log::info!(
        "visitor profile: ie={:?} classes={:?} mobile={}",
        profile.ie_version,
        ie_style_classes(page.user_agent()),
        profile.is_mobile
    );

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(UnsupportedBrowserWarningWidget::attach(
        &mut page,
        home.banner,
        WarningConfig::default(),
    )?));
    dispatcher.register(Box::new(PlaceholderTextWidget::attach(
        &mut page,
        home.query,
        &PlaceholderConfig::default(),
    )?));
    dispatcher.register(Box::new(CheckboxPairWidget::attach(&page, home.pair)?));
    dispatcher.register(Box::new(PageTimestamp::attach(
        home.timestamp,
        page.find_by_id("update-timestamp")
            .ok_or_else(|| anyhow::anyhow!("update-timestamp trigger missing"))?,
    )));

    dispatcher.dispatch(&mut page, &PageEvent::Ready);
    dispatcher.dispatch(&mut page, &PageEvent::Click { target: home.plus_image });
    dispatcher.dispatch(&mut page, &PageEvent::Click { target: home.minus_image });
    dispatcher.dispatch(&mut page, &PageEvent::Focus { target: home.query });
    dispatcher.dispatch(&mut page, &PageEvent::Blur { target: home.query });
    dispatcher.dispatch(&mut page, &PageEvent::Click { target: home.dismiss });

    log::info!("timestamp: {:?}", page.text(home.timestamp));
    log::info!(
        "banner visible: {} (cookie string {:?})",
        page.is_visible(home.banner),
        page.cookies().document_cookie()
    );
    log::info!(
        "banner outside viewport: {:?}",
        geometry::outside_viewport(&page, home.banner)
    );
    log::info!(
        "positioned parent offset of query: {:?}",
        geometry::positioned_parent_offset(&page, home.query, &profile)
    );
    Ok(())
}
