//! Synchronous widget event dispatch.

use dom::{Page, PageEvent};

/// Whether an event continues to later-registered widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Stop,
}

/// A widget driven by the page event loop. Handlers run to completion
/// synchronously; they cannot fail once attached.
pub trait Widget {
    fn on_event(&mut self, page: &mut Page, event: &PageEvent) -> EventFlow;
}

/// Invokes registered widgets in registration order; a [`EventFlow::Stop`]
/// ends propagation for that event.
#[derive(Default)]
pub struct Dispatcher {
    widgets: Vec<Box<dyn Widget>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, widget: Box<dyn Widget>) {
        self.widgets.push(widget);
    }

    pub fn dispatch(&mut self, page: &mut Page, event: &PageEvent) {
        for widget in &mut self.widgets {
            if widget.on_event(page, event) == EventFlow::Stop {
                log::trace!("propagation stopped for {event:?}");
                break;
            }
        }
    }
}
