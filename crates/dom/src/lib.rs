//! In-memory page model: the node tree, style metrics, viewport and
//! environment surface that the widget layer drives.
//!
//! There is no layout engine behind this — callers provide resolved
//! geometry the way a real engine's computed style would, and the model
//! keeps it queryable and mutable from synchronous event handlers.

#![forbid(unsafe_code)]

pub mod events;
pub mod node;
pub mod page;
pub mod style;

pub use cookies::{CookieJar, StoredCookie};
pub use events::PageEvent;
pub use indextree::NodeId;
pub use node::{NodeData, NodeKind, Visibility};
pub use page::{Page, PageConfig, Viewport};
pub use style::{CssPosition, Edges, ElementStyle};
