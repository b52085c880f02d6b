//! Platform and engine-family probes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pattern;

// Handheld platform tokens, matched case-insensitively anywhere in the
// user-agent string.
static MOBILE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)android|webos|ipad|iphone|ipod"));

static FIREFOX: Lazy<Regex> = Lazy::new(|| pattern(r"Firefox/(\d\.\d+)"));

/// Whether the user agent reports a handheld platform (Android, webOS or
/// an iOS device).
pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE.is_match(user_agent)
}

/// Whether the user agent is Firefox, which handles a handful of CSS
/// properties differently from every other engine.
pub fn is_firefox(user_agent: &str) -> bool {
    FIREFOX.is_match(user_agent)
}
