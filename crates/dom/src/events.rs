//! Page event vocabulary.
//!
//! Events are delivered synchronously on the page's single event loop;
//! every handler runs to completion before the next fires.

use indextree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished loading.
    Ready,
    Click { target: NodeId },
    Focus { target: NodeId },
    Blur { target: NodeId },
}
