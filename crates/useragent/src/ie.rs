//! Internet Explorer detection from the `MSIE` marker token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pattern;

static MSIE: Lazy<Regex> = Lazy::new(|| pattern(r"MSIE (\d\.\d+)"));

/// Version number following the `MSIE ` marker, if any.
pub fn msie_version(user_agent: &str) -> Option<f32> {
    MSIE.captures(user_agent)
        .and_then(|caps| caps.get(1))
        .and_then(|found| found.as_str().parse().ok())
}

/// Whether the user agent is Internet Explorer, optionally at or below a
/// version threshold.
///
/// With no threshold, any `MSIE` match counts. With a threshold `t`, the
/// matched version must be `< (t + 1.0).floor()`, so a 7.5 threshold still
/// admits IE 7.9.
pub fn detect_ie_version(user_agent: &str, threshold: Option<f32>) -> bool {
    match (msie_version(user_agent), threshold) {
        (Some(version), Some(limit)) => version < (limit + 1.0).floor(),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Style classes for version-targeted CSS.
///
/// Buckets are cumulative (`lte` reads less-than-or-equal) and mutually
/// exclusive: the first match wins, in descending specificity. Non-IE
/// agents get the empty string.
pub fn ie_style_classes(user_agent: &str) -> &'static str {
    if detect_ie_version(user_agent, Some(6.0)) {
        return "ie ie6 lte9 lte8 lte7 lte6";
    }
    if detect_ie_version(user_agent, Some(7.0)) {
        return "ie ie7 lte9 lte8 lte7";
    }
    if detect_ie_version(user_agent, Some(8.0)) {
        return "ie ie8 lte9 lte8";
    }
    if detect_ie_version(user_agent, Some(9.0)) {
        return "ie ie9 lte9";
    }
    if detect_ie_version(user_agent, None) {
        return "ie";
    }
    ""
}
