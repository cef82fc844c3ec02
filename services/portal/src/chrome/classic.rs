//! Classic UMN grid template (XHTML, `container_12` layout).
use super::nav::{CLASSIC_SIDEBAR, NavSection};
use super::{Chrome, PageView, analytics_snippet, escape_html, format_modified};
use std::fmt;
use std::fmt::Write;

pub struct ClassicChrome;

const CAMPUS_LINKS: &[(&str, &str)] = &[
    ("http://www.umn.edu", "Twin Cities"),
    ("http://www.crk.umn.edu", "Crookston"),
    ("http://www.d.umn.edu", "Duluth"),
    ("http://www.morris.umn.edu", "Morris"),
    ("http://www.r.umn.edu", "Rochester"),
    ("http://www.umn.edu/campuses.php", "Other Locations"),
];

const HEAD_STYLESHEETS: &[(&str, &str)] = &[
    ("/include/lib/css/reset.css", "screen"),
    ("/include/lib/css/template.css", "screen"),
    ("/include/lib/css/optional.css", "screen"),
    ("/include/lib/css/athletics.css", "screen"),
    ("/include/lib/css/print.css", "print"),
];

impl ClassicChrome {
    fn is_testing_host(view: &PageView<'_>) -> bool {
        let Some(production) = view.site.production_host.as_deref() else {
            return false;
        };
        let host = view
            .ctx
            .host()
            .map(|host| host.split(':').next().unwrap_or(host));
        host != Some(production)
    }

    fn write_section(out: &mut String, view: &PageView<'_>, section: &NavSection) -> fmt::Result {
        writeln!(out, "<li class=\"relatedlinks\">{}</li>", section.title)?;
        for link in section.links {
            let lock = if link.locked {
                " <i class=\"icon-lock\"></i>"
            } else {
                ""
            };
            writeln!(out, "<li>{}{lock}</li>", link.anchor(view))?;
        }
        Ok(())
    }
}

impl Chrome for ClassicChrome {
    fn header(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        out.push_str(
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"\n    \
             \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n",
        );
        out.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head>\n");
        out.push_str(
            "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />\n\
             <meta name=\"Description\" content=\"University of Minnesota\" />\n",
        );
        writeln!(out, "<title>{}</title>", escape_html(view.page.title()))?;
        out.push_str(
            "<link rel=\"shortcut icon\" href=\"/faviconICA.ico\" type=\"image/x-icon\" />\n",
        );
        for (href, media) in HEAD_STYLESHEETS {
            writeln!(
                out,
                "<link href=\"{href}\" rel=\"stylesheet\" type=\"text/css\" media=\"{media}\" />"
            )?;
        }
        out.push_str(view.page.stylesheet());
        out.push_str(
            "\n<link href=\"/include/font-awesome/css/font-awesome.min.css\" rel=\"stylesheet\" />\n\
             <script type=\"text/javascript\" src=\"/include/lib/js/searchfield.js\"></script>\n",
        );
        analytics_snippet(out, view.site)?;
        out.push_str("</head>\n<body>\n<div class=\"bodycontainer\">\n");

        if Self::is_testing_host(view) {
            out.push_str(
                "<h1 style=\"background-color:#FFCC33; border:1px solid #8C1919;\">Testing Server</h1>\n",
            );
        }

        out.push_str(
            "<p id=\"skipLinks\"><a href=\"#main_nav\">Main navigation</a> | \
             <a href=\"#maincontent\">Main content</a></p>\n",
        );
        out.push_str("<div id=\"header\">\n<div id=\"campus_links\">\n<p>Campuses: </p>\n<ul>\n");
        for (href, label) in CAMPUS_LINKS {
            writeln!(out, "<li><a href=\"{href}\">{label}</a></li>")?;
        }
        out.push_str("</ul>\n</div>\n");
        out.push_str(
            "<div id=\"headerUofM\">\n\
             <div id=\"logo_uofm\"><a href=\"http://www.umn.edu/\">Go to the U of M home page</a></div>\n\
             <div id=\"search_area\">\n\
             <div id=\"search_nav\"><a href=\"http://onestop.umn.edu/\" id=\"btn_onestop\">OneStop</a> \
             <a href=\"https://www.myu.umn.edu/\" id=\"btn_myu\">myU</a></div>\n\
             <div class=\"search\">\n\
             <form action=\"http://google.umn.edu/search\" method=\"get\" name=\"gsearch\" id=\"gsearch\" title=\"Search U of M Web sites\">\n\
             <label for=\"search_field\">Search U of M Web sites</label>\n\
             <input type=\"text\" id=\"search_field\" name=\"q\" value=\"Search U of M Web sites\" title=\"Search text\" />\n\
             <input class=\"search_btn\" type=\"image\" src=\"/include/images/assets/img/search_button.gif\" alt=\"Submit Search\" value=\"Search\" />\n\
             <input name=\"client\" value=\"searchumn\" type=\"hidden\" />\n\
             </form>\n\
             </div>\n\
             </div>\n\
             </div>\n\
             </div>\n",
        );
        out.push_str("<div class=\"container_12\" id=\"bg354\">\n");
        Ok(())
    }

    fn sidebar(
        &self,
        out: &mut String,
        view: &PageView<'_>,
        suppress_default: bool,
    ) -> fmt::Result {
        out.push_str("<div class=\"grid_3\" id=\"main_nav_3\">\n");
        if let Some(sidebar) = view.ctx.page_module_record().and_then(|m| m.sidebar()) {
            out.push_str(sidebar);
            out.push('\n');
        }
        if !suppress_default {
            out.push_str("<ul class=\"main_nav\">\n");
            for section in CLASSIC_SIDEBAR {
                Self::write_section(out, view, section)?;
            }
            out.push_str("</ul>\n");
            if view.ctx.is_signed_in() {
                writeln!(
                    out,
                    "<ul class=\"main_nav\">\n<li><a href=\"{}\"><strong>Log Out</strong></a></li>\n</ul>",
                    escape_html(&view.site.logout_url)
                )?;
            }
        }
        out.push_str("</div>\n");
        Ok(())
    }

    fn start_content(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        if view.page.prints_sidebar() {
            writeln!(
                out,
                "<div class=\"grid_9\" id=\"nospace\">\n<p class=\"nopadding\" id=\"main_head\"> \
                 <a href=\"{}index.php\"><img src=\"/include/images/icabanner.jpg\" \
                 alt=\"Go to unit's home page.\" width=\"720\" height=\"48\" /></a></p>",
                view.ctx.root_path()
            )
        } else {
            writeln!(out, "<div class=\"grid_12\" id=\"nospace\">")
        }
    }

    fn end_content(&self, out: &mut String, _view: &PageView<'_>) -> fmt::Result {
        out.push_str("</div>\n</div>\n<br class=\"clearabove\" />\n");
        Ok(())
    }

    fn footer(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        out.push_str(
            "<div class=\"grid_12\" id=\"unit_footer2\">\n<ul class=\"unit_footer_links\">\n\
             <li>Address: 516 15th <acronym class=\"acronym_border\" title=\"Avenue Southeast\">Ave. SE</acronym>, \
             Suite 250, Minneapolis, MN 55455 Phone: 612-624-4497 Fax: 612-626-7859</li>\n\
             <li><a href=\"http://www.gophersports.com\">GopherSports.com</a></li>\n</ul>\n</div>\n",
        );
        out.push_str(
            "<div class=\"grid_7 alpha\" id=\"footer_inner\">\n<ul class=\"copyright\">\
             <li>&copy; Regents of the University of Minnesota. All rights reserved.</li>\n\
             <li>The University of Minnesota is an equal opportunity educator and employer</li>\n",
        );
        match view.page.modification_date() {
            Some(date) => writeln!(out, "<li>Last modified on {}</li>", format_modified(date))?,
            None => out.push_str("<li></li>\n"),
        }
        out.push_str("</ul>\n</div>\n");
        out.push_str(
            "<div class=\"grid_5 omega\" id=\"footer_right\">\n\
             <ul class=\"footer_links\">\n<li>Twin Cities Campus: </li>\n\
             <li><a href=\"http://www1.umn.edu/pts/\">Parking &amp; Transportation</a></li>\n\
             <li><a href=\"http://www.umn.edu/twincities/maps/index.html\">Maps &amp; Directions</a></li></ul>\n\
             <br class=\"clearabove\" />\n\
             <ul class=\"footer_links\"><li><a href=\"http://www.directory.umn.edu/\">Directories</a></li>\n\
             <li><a href=\"http://www.umn.edu/twincities/contact/\">Contact U of M</a></li>\n\
             <li><a href=\"http://www.privacy.umn.edu/\">Privacy</a></li>\n</ul>\n\
             <br class=\"clearabove\" />\n</div>\n",
        );
        Ok(())
    }

    fn finish(&self, out: &mut String, _view: &PageView<'_>) -> fmt::Result {
        out.push_str("</div>\n</body>\n</html>\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::chrome::test_support::context;
    use crate::chrome::{ChromeVersion, Page, PageView, render};
    use crate::config::SiteConfig;
    use chrono::{TimeZone, Utc};
    use intranet_access::Identity;

    fn site() -> SiteConfig {
        SiteConfig {
            production_host: Some("intranet.test".to_string()),
            ..SiteConfig::default()
        }
    }

    #[tokio::test]
    async fn xhtml_doctype_and_unit_banner() {
        let ctx = context(Identity::Guest, 0, "/index.php").await;
        let site = site();
        let page = Page::new(&site.default_title);
        let html = render(
            ChromeVersion::Classic,
            &PageView {
                ctx: &ctx,
                page: &page,
                site: &site,
            },
        )
        .expect("render");
        assert!(html.starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\""));
        assert!(html.contains("<div class=\"grid_9\" id=\"nospace\">"));
        assert!(html.contains("<li class=\"relatedlinks\">Athletics Units</li>"));
        assert!(!html.contains("Testing Server"));
        assert!(!html.contains("Log Out"));
    }

    #[tokio::test]
    async fn testing_banner_off_production_host() {
        let ctx = context(Identity::Guest, 0, "/index.php").await;
        let site = SiteConfig {
            production_host: Some("www.athletics.umn.edu".to_string()),
            ..SiteConfig::default()
        };
        let page = Page::new(&site.default_title);
        let html = render(
            ChromeVersion::Classic,
            &PageView {
                ctx: &ctx,
                page: &page,
                site: &site,
            },
        )
        .expect("render");
        assert!(html.contains("Testing Server"));
    }

    #[tokio::test]
    async fn module_sidebar_precedes_default_menu() {
        let ctx = context(Identity::user("jdoe"), 132, "/compliance/index.php").await;
        let site = site();
        let page = Page::new(&site.default_title);
        let html = render(
            ChromeVersion::Classic,
            &PageView {
                ctx: &ctx,
                page: &page,
                site: &site,
            },
        )
        .expect("render");
        let module_menu = html.find("Compliance Forms").expect("module sidebar");
        let main_menu = html.find("Main Menu").expect("main menu");
        assert!(module_menu < main_menu);
        assert!(html.contains("<a href=\"../training/\">Athletic Medicine</a>"));
        assert!(html.contains("<strong>Log Out</strong>"));

        let suppressed = Page::new(&site.default_title).suppress_default_menu(true);
        let html = render(
            ChromeVersion::Classic,
            &PageView {
                ctx: &ctx,
                page: &suppressed,
                site: &site,
            },
        )
        .expect("render");
        assert!(html.contains("Compliance Forms"));
        assert!(!html.contains("Main Menu"));
    }

    #[tokio::test]
    async fn no_sidebar_uses_full_width_and_footer_date() {
        let ctx = context(Identity::Guest, 0, "/index.php").await;
        let site = site();
        let page = Page::new(&site.default_title)
            .with_sidebar(false)
            .modified_at(Utc.with_ymd_and_hms(2014, 5, 2, 8, 0, 0).unwrap());
        let html = render(
            ChromeVersion::Classic,
            &PageView {
                ctx: &ctx,
                page: &page,
                site: &site,
            },
        )
        .expect("render");
        assert!(html.contains("<div class=\"grid_12\" id=\"nospace\">"));
        assert!(!html.contains("main_nav_3"));
        assert!(html.contains("Last modified on May 2nd, 2014"));
    }
}
