//! Page widgets and the synchronous dispatcher that drives them.
//!
//! Each widget resolves the structure it needs once at attach time and
//! reacts to [`dom::PageEvent`]s afterwards. Widgets are independent of
//! one another; there is no inter-widget messaging.

#![forbid(unsafe_code)]

pub mod browser_warning;
pub mod checkbox_pair;
mod dispatch;
pub mod placeholder_text;
pub mod timestamp;

pub use browser_warning::{UnsupportedBrowserWarningWidget, WarningConfig};
pub use checkbox_pair::CheckboxPairWidget;
pub use dispatch::{Dispatcher, EventFlow, Widget};
pub use placeholder_text::{PlaceholderConfig, PlaceholderTextWidget};
pub use timestamp::PageTimestamp;

/// A widget was attached to markup missing the structure it requires.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{widget}: required {role} not found")]
    MissingStructure {
        widget: &'static str,
        role: &'static str,
    },
}
