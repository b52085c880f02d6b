//! Browser cookie store: `document.cookie` string lookup and an in-memory
//! jar recording value, expiry and path per name.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

/// Plain string lookup over a `name=value; other=value` cookie string.
/// No decoding is applied beyond trimming the separators.
pub fn read_cookie<'doc>(document_cookie: &'doc str, name: &str) -> Option<&'doc str> {
    document_cookie
        .split(';')
        .map(str::trim)
        .find_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            (key == name).then_some(value)
        })
}

/// HTTP-date form used by the cookie `expires` attribute.
pub fn format_expires(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// A cookie as held by the jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    pub expires: DateTime<Utc>,
    pub path: String,
}

/// In-memory stand-in for the browser cookie store.
///
/// A single page context mutates this synchronously from its event
/// handlers, so there is no interior mutability or locking.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: BTreeMap<String, StoredCookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cookie valid for `duration_days` from now under `path`.
    pub fn set(&mut self, name: &str, value: &str, duration_days: i64, path: &str) {
        self.set_at(name, value, duration_days, path, Utc::now());
    }

    /// [`set`](Self::set) with an explicit clock.
    pub fn set_at(
        &mut self,
        name: &str,
        value: &str,
        duration_days: i64,
        path: &str,
        now: DateTime<Utc>,
    ) {
        let expires = now + Duration::days(duration_days);
        log::debug!(
            "set cookie {name}={value}; expires={}; path={path}",
            format_expires(expires)
        );
        self.cookies.insert(
            name.to_owned(),
            StoredCookie {
                value: value.to_owned(),
                expires,
                path: path.to_owned(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&StoredCookie> {
        self.cookies.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|cookie| cookie.value.as_str())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Render the jar in `document.cookie` form: names and values only,
    /// attributes elided.
    pub fn document_cookie(&self) -> String {
        let entries: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, cookie)| format!("{name}={}", cookie.value))
            .collect();
        entries.join("; ")
    }
}
