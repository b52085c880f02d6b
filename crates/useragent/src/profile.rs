//! Aggregate browser profile, derived on demand.

use crate::ie::{detect_ie_version, msie_version};
use crate::orientation::{Orientation, device_orientation};
use crate::platform::{is_firefox, is_mobile};

/// Classification of the current browser, recomputed from the live
/// environment whenever asked. Nothing here is cached or invalidated.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserProfile {
    pub is_ie: bool,
    pub ie_version: Option<f32>,
    pub is_firefox: bool,
    pub is_mobile: bool,
    pub orientation: Option<Orientation>,
}

impl BrowserProfile {
    /// Derive a profile from the user-agent string and the
    /// `window.orientation` angle, when the host exposes one.
    pub fn from_environment(user_agent: &str, orientation_degrees: Option<i32>) -> Self {
        Self {
            is_ie: detect_ie_version(user_agent, None),
            ie_version: msie_version(user_agent),
            is_firefox: is_firefox(user_agent),
            is_mobile: is_mobile(user_agent),
            orientation: orientation_degrees.and_then(device_orientation),
        }
    }

    /// Whether this is Internet Explorer at or below the given version,
    /// under the same threshold arithmetic as [`detect_ie_version`].
    pub fn is_ie_at_most(&self, threshold: f32) -> bool {
        self.ie_version
            .is_some_and(|version| version < (threshold + 1.0).floor())
    }
}
