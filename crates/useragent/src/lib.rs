//! Browser classification from the user-agent string and orientation angle.
//!
//! Every function here is total: malformed input classifies as "not matched"
//! or unknown, never as an error.

#![forbid(unsafe_code)]

pub mod ie;
pub mod orientation;
pub mod platform;
pub mod profile;

pub use ie::{detect_ie_version, ie_style_classes, msie_version};
pub use orientation::{Orientation, device_orientation};
pub use platform::{is_firefox, is_mobile};
pub use profile::BrowserProfile;

/// Compile a marker pattern known at build time.
pub(crate) fn pattern(source: &str) -> regex::Regex {
    #[allow(
        clippy::unwrap_used,
        reason = "patterns are literals exercised by every test"
    )]
    let compiled = regex::Regex::new(source).unwrap();
    compiled
}
