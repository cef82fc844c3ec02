//! Page chrome: the shared header, navigation, sidebar, and footer wrapped
//! around every intranet page.
//!
//! # Purpose
//! Two template generations are served side by side. [`ChromeVersion::Classic`]
//! is the original UMN grid template; [`ChromeVersion::Bootstrap`] is the
//! 2015 UMN header/footer with a Bootstrap top nav. Both implement
//! [`Chrome`] and are composed the same way by [`render`].
//!
//! # Key invariants
//! - Strings taken from the request or the directory (title, identity, host,
//!   short names) are escaped with [`escape_html`].
//! - Stylesheet markup, module sidebars, and page content are trusted
//!   fragments and are written verbatim.
//! - Every `<div>` a chrome opens in `header`/`sidebar`/`start_content` is
//!   closed by `end_content`/`finish`.
use crate::config::SiteConfig;
use crate::context::PageContext;
use intranet_access::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;

mod bootstrap;
mod classic;
pub mod nav;
mod page;

pub use bootstrap::BootstrapChrome;
pub use classic::ClassicChrome;
pub use page::{Breadcrumb, Page, format_modified};

pub const ACCESS_DENIED_TITLE: &str = "Access Denied";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeVersion {
    Classic,
    #[default]
    Bootstrap,
}

impl ChromeVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            ChromeVersion::Classic => "classic",
            ChromeVersion::Bootstrap => "bootstrap",
        }
    }

    pub fn chrome(self) -> &'static dyn Chrome {
        match self {
            ChromeVersion::Classic => &ClassicChrome,
            ChromeVersion::Bootstrap => &BootstrapChrome,
        }
    }
}

impl fmt::Display for ChromeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chrome version: {0}")]
pub struct UnknownChromeVersion(pub String);

impl std::str::FromStr for ChromeVersion {
    type Err = UnknownChromeVersion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" | "old" => Ok(ChromeVersion::Classic),
            "bootstrap" | "new" => Ok(ChromeVersion::Bootstrap),
            other => Err(UnknownChromeVersion(other.to_string())),
        }
    }
}

/// Everything a chrome needs to render one page.
#[derive(Clone, Copy)]
pub struct PageView<'a> {
    pub ctx: &'a PageContext,
    pub page: &'a Page,
    pub site: &'a SiteConfig,
}

impl PageView<'_> {
    /// Absolute URL on the requesting host, or a root-relative path when the
    /// host is unknown.
    pub fn host_url(&self, path: &str) -> String {
        match self.ctx.host() {
            Some(host) => format!("https://{host}{path}"),
            None => path.to_string(),
        }
    }

    pub fn webmaster_link(&self) -> String {
        format!(
            "<a href=\"mailto:{}\">{}</a>",
            escape_html(&self.site.webmaster_email),
            escape_html(&self.site.webmaster_name)
        )
    }
}

pub trait Chrome: Send + Sync {
    fn header(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result;
    fn breadcrumbs(&self, _out: &mut String, _view: &PageView<'_>) -> fmt::Result {
        Ok(())
    }
    fn sidebar(&self, out: &mut String, view: &PageView<'_>, suppress_default: bool)
    -> fmt::Result;
    fn start_content(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result;
    fn end_content(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result;
    fn footer(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result;
    fn finish(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result;
}

/// Render a full page with the given chrome version.
pub fn render(version: ChromeVersion, view: &PageView<'_>) -> Result<String, fmt::Error> {
    let chrome = version.chrome();
    let mut out = String::with_capacity(16 * 1024);
    chrome.header(&mut out, view)?;
    chrome.breadcrumbs(&mut out, view)?;
    if view.page.prints_sidebar() {
        chrome.sidebar(&mut out, view, view.page.suppresses_default_menu())?;
    }
    chrome.start_content(&mut out, view)?;
    out.push_str(view.page.content());
    chrome.end_content(&mut out, view)?;
    chrome.footer(&mut out, view)?;
    chrome.finish(&mut out, view)?;
    metrics::counter!(
        crate::observability::PAGES_RENDERED_TOTAL,
        "chrome" => version.as_str()
    )
    .increment(1);
    Ok(out)
}

/// Render the "Access Denied" page for a failed [`PageContext::authorize`].
///
/// The denied page keeps the requested page's stylesheets but always shows
/// the sidebar with the default menu.
pub fn render_denied(
    version: ChromeVersion,
    view: &PageView<'_>,
    err: &AccessError,
) -> Result<String, fmt::Error> {
    if let AccessError::AccessDenied { reason, .. } = err {
        tracing::debug!(reason = %reason, "rendering access denied page");
    }
    let mut body = String::new();
    body.push_str("<p class=\"subheadline\">You are not authorized to view this page.</p>\n");
    writeln!(
        body,
        "<p>User: {}<br />Please contact {} if you believe you have received this message in error.</p>",
        escape_html(view.ctx.identity().as_str()),
        view.webmaster_link()
    )?;
    let denied = view.page.denied(ACCESS_DENIED_TITLE, body);
    let denied_view = PageView {
        page: &denied,
        ..*view
    };
    render(version, &denied_view)
}

/// Google Analytics snippet, emitted when a tracking id is configured.
pub(crate) fn analytics_snippet(out: &mut String, site: &SiteConfig) -> fmt::Result {
    let Some(id) = site.analytics_id.as_deref() else {
        return Ok(());
    };
    writeln!(out, "<script type=\"text/javascript\">")?;
    out.push_str(
        "(function(i,s,o,g,r,a,m){i['GoogleAnalyticsObject']=r;i[r]=i[r]||function(){\n\
         (i[r].q=i[r].q||[]).push(arguments)},i[r].l=1*new Date();a=s.createElement(o),\n\
         m=s.getElementsByTagName(o)[0];a.async=1;a.src=g;m.parentNode.insertBefore(a,m)\n\
         })(window,document,'script','//www.google-analytics.com/analytics.js','ga');\n",
    );
    writeln!(out, "ga('create', '{}', 'umn.edu');", escape_html(id))?;
    writeln!(out, "ga('send', 'pageview');")?;
    writeln!(out, "</script>")
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}


#[cfg(test)]
mod tests {
    use super::test_support::context;
    use super::*;
    use intranet_access::{DenyReason, Identity};

    #[test]
    fn version_parses_aliases() {
        assert_eq!("old".parse::<ChromeVersion>(), Ok(ChromeVersion::Classic));
        assert_eq!(" Bootstrap ".parse::<ChromeVersion>(), Ok(ChromeVersion::Bootstrap));
        assert!("fancy".parse::<ChromeVersion>().is_err());
        assert_eq!(ChromeVersion::default().to_string(), "bootstrap");
    }

    #[test]
    fn escape_html_covers_specials() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[tokio::test]
    async fn both_versions_wrap_content_once() {
        let ctx = context(Identity::user("jdoe"), 0, "/index.php").await;
        let site = SiteConfig::default();
        let page = Page::new(&site.default_title).with_content("<p id=\"body\">Hello</p>");
        for version in [ChromeVersion::Classic, ChromeVersion::Bootstrap] {
            let html = render(
                version,
                &PageView {
                    ctx: &ctx,
                    page: &page,
                    site: &site,
                },
            )
            .expect("render");
            assert_eq!(html.matches("<p id=\"body\">Hello</p>").count(), 1);
            assert!(html.contains("<title>Intercollegiate Athletics Intranet</title>"));
            assert!(html.trim_end().ends_with("</html>"));
            assert_eq!(
                html.matches("<div").count(),
                html.matches("</div>").count(),
                "{version} leaves divs unbalanced"
            );
        }
    }

    #[tokio::test]
    async fn denied_page_names_user_and_webmaster() {
        let ctx = context(Identity::user("smit<0001>"), 132, "/compliance/index.php").await;
        let site = SiteConfig::default();
        let page = Page::new(&site.default_title).with_content("<p>secret</p>");
        let err = AccessError::AccessDenied {
            identity: ctx.identity().clone(),
            reason: DenyReason::Class,
        };
        for version in [ChromeVersion::Classic, ChromeVersion::Bootstrap] {
            let html = render_denied(
                version,
                &PageView {
                    ctx: &ctx,
                    page: &page,
                    site: &site,
                },
                &err,
            )
            .expect("render");
            assert!(html.contains("<title>Access Denied</title>"));
            assert!(html.contains("You are not authorized to view this page."));
            assert!(html.contains("User: smit&lt;0001&gt;"));
            assert!(html.contains(
                "<a href=\"mailto:icaweb@umn.edu\">ICA Technology Services</a>"
            ));
            assert!(!html.contains("secret"));
        }
    }

    #[tokio::test]
    async fn analytics_only_when_configured() {
        let ctx = context(Identity::Guest, 0, "/index.php").await;
        let mut site = SiteConfig::default();
        let page = Page::new(&site.default_title);
        let view = PageView {
            ctx: &ctx,
            page: &page,
            site: &site,
        };
        let html = render(ChromeVersion::Bootstrap, &view).expect("render");
        assert!(!html.contains("google-analytics"));

        site.analytics_id = Some("UA-50275315-1".to_string());
        let view = PageView {
            ctx: &ctx,
            page: &page,
            site: &site,
        };
        let html = render(ChromeVersion::Classic, &view).expect("render");
        assert!(html.contains("ga('create', 'UA-50275315-1', 'umn.edu');"));
    }
}
