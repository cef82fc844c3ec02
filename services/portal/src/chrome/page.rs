//! Per-page settings a handler fills in before rendering.
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, href: Option<String>) -> Self {
        Self {
            label: label.into(),
            href,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    stylesheet: String,
    print_sidebar: bool,
    print_top_nav: bool,
    suppress_default_menu: bool,
    breadcrumbs: Vec<Breadcrumb>,
    content: String,
    modified_at: Option<DateTime<Utc>>,
}

impl Page {
    pub fn new(default_title: &str) -> Self {
        Self {
            title: default_title.to_string(),
            stylesheet: String::new(),
            print_sidebar: true,
            print_top_nav: true,
            suppress_default_menu: false,
            breadcrumbs: Vec::new(),
            content: String::new(),
            modified_at: None,
        }
    }

    /// Replace the title. Blank titles are ignored.
    pub fn set_title(&mut self, title: &str) {
        if !title.trim().is_empty() {
            self.title = title.to_string();
        }
    }

    /// Append head markup (`<link>`/`<style>` tags). Blank input is ignored.
    pub fn add_stylesheet(&mut self, markup: &str) {
        if !markup.trim().is_empty() {
            self.stylesheet.push_str(markup);
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_stylesheet(mut self, markup: &str) -> Self {
        self.add_stylesheet(markup);
        self
    }

    pub fn with_sidebar(mut self, print_sidebar: bool) -> Self {
        self.print_sidebar = print_sidebar;
        self
    }

    pub fn with_top_nav(mut self, print_top_nav: bool) -> Self {
        self.print_top_nav = print_top_nav;
        self
    }

    /// Show only the module sidebar, without the site-wide main menu.
    pub fn suppress_default_menu(mut self, suppress: bool) -> Self {
        self.suppress_default_menu = suppress;
        self
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = Some(modified_at);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn prints_sidebar(&self) -> bool {
        self.print_sidebar
    }

    pub fn prints_top_nav(&self) -> bool {
        self.print_top_nav
    }

    pub fn suppresses_default_menu(&self) -> bool {
        self.suppress_default_menu
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn modification_date(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Copy of this page turned into a denial notice.
    pub(crate) fn denied(&self, title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            stylesheet: self.stylesheet.clone(),
            print_sidebar: true,
            print_top_nav: self.print_top_nav,
            suppress_default_menu: false,
            breadcrumbs: Vec::new(),
            content: body,
            modified_at: None,
        }
    }
}

/// Long-form date with an ordinal day, e.g. `March 3rd, 2016`.
pub fn format_modified(date: DateTime<Utc>) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blank_title_is_ignored() {
        let mut page = Page::new("Intercollegiate Athletics Intranet");
        page.set_title("   ");
        assert_eq!(page.title(), "Intercollegiate Athletics Intranet");
        page.set_title("Compliance Forms");
        assert_eq!(page.title(), "Compliance Forms");
    }

    #[test]
    fn stylesheets_append() {
        let page = Page::new("t")
            .with_stylesheet("<link href=\"a.css\" rel=\"stylesheet\" />")
            .with_stylesheet("")
            .with_stylesheet("<link href=\"b.css\" rel=\"stylesheet\" />");
        assert_eq!(
            page.stylesheet(),
            "<link href=\"a.css\" rel=\"stylesheet\" /><link href=\"b.css\" rel=\"stylesheet\" />"
        );
    }

    #[test]
    fn ordinal_dates() {
        let date = |d| Utc.with_ymd_and_hms(2016, 3, d, 12, 0, 0).unwrap();
        assert_eq!(format_modified(date(1)), "March 1st, 2016");
        assert_eq!(format_modified(date(2)), "March 2nd, 2016");
        assert_eq!(format_modified(date(3)), "March 3rd, 2016");
        assert_eq!(format_modified(date(11)), "March 11th, 2016");
        assert_eq!(format_modified(date(13)), "March 13th, 2016");
        assert_eq!(format_modified(date(22)), "March 22nd, 2016");
        assert_eq!(format_modified(date(31)), "March 31st, 2016");
    }

    #[test]
    fn denied_copy_keeps_stylesheet_only() {
        let page = Page::new("t")
            .with_stylesheet("<style></style>")
            .with_sidebar(false)
            .with_breadcrumbs(vec![Breadcrumb::new("Home", None)])
            .with_content("secret");
        let denied = page.denied("Access Denied", "nope".to_string());
        assert_eq!(denied.title(), "Access Denied");
        assert_eq!(denied.stylesheet(), "<style></style>");
        assert!(denied.prints_sidebar());
        assert!(denied.breadcrumbs().is_empty());
        assert_eq!(denied.content(), "nope");
    }
}
