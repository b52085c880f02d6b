//! Dismissible unsupported-browser banner with a persistence cookie.

use dom::{NodeId, Page, PageEvent};

use crate::{ConfigurationError, EventFlow, Widget};

/// Cookie settings for remembering a dismissal.
#[derive(Clone, Debug)]
pub struct WarningConfig {
    pub cookie_name: String,
    /// Days the dismissal stays valid.
    pub duration_days: i64,
    pub path: String,
}

impl Default for WarningConfig {
    fn default() -> Self {
        Self {
            cookie_name: "unsupportedBrowserWarningDismissed".to_owned(),
            duration_days: 1,
            path: "/".to_owned(),
        }
    }
}

pub struct UnsupportedBrowserWarningWidget {
    banner: NodeId,
    dismiss: NodeId,
    config: WarningConfig,
}

impl UnsupportedBrowserWarningWidget {
    /// Resolve the dismiss link and apply any prior dismissal. A present
    /// dismissal cookie hides the banner immediately, with no animation;
    /// the cookie is only consulted here, never re-checked within the
    /// page load.
    ///
    /// # Errors
    /// [`ConfigurationError::MissingStructure`] when the banner has no
    /// `a.dismiss` descendant.
    pub fn attach(
        page: &mut Page,
        banner: NodeId,
        config: WarningConfig,
    ) -> Result<Self, ConfigurationError> {
        let dismiss = page.find_by_class(banner, Some("a"), "dismiss").ok_or(
            ConfigurationError::MissingStructure {
                widget: "unsupported-browser-warning",
                role: "dismiss link",
            },
        )?;
        if page.cookies().is_set(&config.cookie_name) {
            log::debug!("dismissal cookie present, hiding warning");
            page.hide(banner);
        }
        Ok(Self {
            banner,
            dismiss,
            config,
        })
    }
}

impl Widget for UnsupportedBrowserWarningWidget {
    fn on_event(&mut self, page: &mut Page, event: &PageEvent) -> EventFlow {
        if let PageEvent::Click { target } = event {
            if *target == self.dismiss {
                page.cookies_mut().set(
                    &self.config.cookie_name,
                    "true",
                    self.config.duration_days,
                    &self.config.path,
                );
                page.fade_out(self.banner);
                log::debug!("warning dismissed");
            }
        }
        EventFlow::Continue
    }
}
