//! Home-page timestamp display.

use chrono::{Local, NaiveDateTime};
use dom::{NodeId, Page, PageEvent};

use crate::{EventFlow, Widget};

// Abbreviated weekday, zero-padded day, abbreviated month, four-digit
// year, 24-hour time.
const TIMESTAMP_FORMAT: &str = "%a %d %b %Y %H:%M:%S";

/// Renders the current local time into `display` on page ready and every
/// activation of `trigger`. A trigger click consumes the event.
pub struct PageTimestamp {
    display: NodeId,
    trigger: NodeId,
}

impl PageTimestamp {
    pub fn attach(display: NodeId, trigger: NodeId) -> Self {
        Self { display, trigger }
    }

    /// Render a specific instant, for callers with their own clock.
    pub fn render_at(&self, page: &mut Page, at: NaiveDateTime) {
        page.set_text(self.display, &at.format(TIMESTAMP_FORMAT).to_string());
    }

    fn render_now(&self, page: &mut Page) {
        self.render_at(page, Local::now().naive_local());
    }
}

impl Widget for PageTimestamp {
    fn on_event(&mut self, page: &mut Page, event: &PageEvent) -> EventFlow {
        match event {
            PageEvent::Ready => {
                self.render_now(page);
                EventFlow::Continue
            }
            PageEvent::Click { target } if *target == self.trigger => {
                self.render_now(page);
                EventFlow::Stop
            }
            _ => EventFlow::Continue,
        }
    }
}
