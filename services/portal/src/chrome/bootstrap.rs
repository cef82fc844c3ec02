//! 2015 UMN header/footer with a Bootstrap 3 layout.
//!
//! The sidebar opens the `row` and the `col-md-10` content column; pages
//! without a sidebar get a full-width column from `start_content` instead.
use super::nav::TOP_NAV;
use super::{Chrome, PageView, analytics_snippet, escape_html};
use std::fmt;
use std::fmt::Write;

pub struct BootstrapChrome;

impl BootstrapChrome {
    fn top_nav(out: &mut String, view: &PageView<'_>) -> fmt::Result {
        out.push_str(
            "<div class=\"container\" style=\"padding: 0px\">\n<nav class=\"navbar navbar-default\">\n\
             <div class=\"navbar-header\">\n\
             <button type=\"button\" class=\"navbar-toggle collapsed\" data-toggle=\"collapse\" \
             data-target=\"#intranet-navbar-collapse\" aria-expanded=\"false\">\n\
             <span class=\"sr-only\">Toggle navigation</span>\n\
             <span class=\"icon-bar\"></span>\n<span class=\"icon-bar\"></span>\n<span class=\"icon-bar\"></span>\n\
             </button>\n",
        );
        writeln!(
            out,
            "<a class=\"navbar-brand\" href=\"{}index.php\">Intranet Home</a>\n</div>",
            view.ctx.root_path()
        )?;
        out.push_str(
            "<div class=\"collapse navbar-collapse\" id=\"intranet-navbar-collapse\">\n\
             <ul class=\"nav navbar-nav\">\n",
        );
        let page_module = view.ctx.page_module();
        for section in TOP_NAV {
            writeln!(
                out,
                "<li class=\"dropdown\">\n<a href=\"#\" class=\"dropdown-toggle\" data-toggle=\"dropdown\" \
                 role=\"button\" aria-haspopup=\"true\" aria-expanded=\"false\">{} <span class=\"caret\"></span></a>\n\
                 <ul class=\"dropdown-menu\">",
                section.title
            )?;
            for link in section.links {
                let class = if link.is_active(page_module) {
                    " class=\"active\""
                } else {
                    ""
                };
                writeln!(out, "<li{class}>{}</li>", link.anchor(view))?;
            }
            out.push_str("</ul>\n</li>\n");
        }
        out.push_str(
            "</ul>\n<ul class=\"nav navbar-nav navbar-right\">\n</ul>\n\
             </div>\n</nav>\n</div>\n",
        );
        Ok(())
    }

    fn sidebar_nav(out: &mut String, home_href: &str) -> fmt::Result {
        out.push_str(
            "<div class=\"sidebar-nav\">\n<div class=\"navbar navbar-default\" role=\"navigation\">\n\
             <div class=\"navbar-header\">\n\
             <button type=\"button\" class=\"navbar-toggle\" data-toggle=\"collapse\" data-target=\".sidebar-navbar-collapse\">\n\
             <span class=\"sr-only\">Toggle navigation</span>\n\
             <span class=\"icon-bar\"></span>\n<span class=\"icon-bar\"></span>\n<span class=\"icon-bar\"></span>\n\
             </button>\n<span class=\"visible-xs navbar-brand\"></span>\n</div>\n\
             <div class=\"navbar-collapse collapse sidebar-navbar-collapse\">\n<ul class=\"nav navbar-nav\">\n",
        );
        writeln!(
            out,
            "<li class=\"active\"><a href=\"{}\">Home</a></li>",
            escape_html(home_href)
        )?;
        out.push_str("</ul>\n</div>\n</div>\n</div>\n");
        Ok(())
    }
}

impl Chrome for BootstrapChrome {
    fn header(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        out.push_str(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        writeln!(out, "<title>{}</title>", escape_html(view.page.title()))?;
        out.push_str(
            "<link rel=\"stylesheet\" href=\"/include/HeaderFooter/css/2015-tc.css\">\n\
             <link href=\"/include/bootstrap/css/bootstrap.css\" rel=\"stylesheet\">\n\
             <link href=\"/include/css/addedCss.css\" rel=\"stylesheet\">\n\
             <script src=\"/include/HeaderFooter/js/umnhf-2015.js\" type=\"text/javascript\"></script>\n\
             <script src=\"/include/HeaderFooter/js/html5shiv-printshiv.js\" type=\"text/javascript\"></script>\n\
             <script src=\"https://ajax.googleapis.com/ajax/libs/jquery/1.12.4/jquery.min.js\"></script>\n\
             <script src=\"/include/bootstrap/js/bootstrap.min.js\"></script>\n",
        );
        out.push_str(view.page.stylesheet());
        out.push('\n');
        analytics_snippet(out, view.site)?;
        out.push_str("</head>\n<body>\n");
        out.push_str(
            "<header class=\"umnhf\" id=\"umnhf-h\" role=\"banner\">\n\
             <div id=\"skipLinks\"><a href=\"#main-nav\">Main navigation</a><a href=\"#main-content\">Main content</a></div>\n\
             <div class=\"printer\"><div class=\"left\"></div><div class=\"right\"><strong>University of Minnesota</strong>\
             <br />http://twin-cities.umn.edu/<br />612-625-5000</div></div>\n\
             <div class=\"umnhf\" id=\"umnhf-h-mast\">\n\
             <a class=\"umnhf\" id=\"umnhf-h-logo\" href=\"http://twin-cities.umn.edu/\"><span>Go to the U of M home page</span></a>\n\
             <ul class=\"umnhf\" id=\"umnhf-h-ql\">\n\
             <li><a href=\"http://onestop.umn.edu/\">One Stop</a></li>\n\
             <li class=\"umnhf\"><a href=\"https://www.myu.umn.edu/\">MyU <span></span>: For Students, Faculty, and Staff</a></li>\n\
             </ul>\n<button class=\"umnhf\" id=\"umnhf-m-search\">Search</button>\n</div>\n\
             <form class=\"umnhf\" id=\"umnhf-h-search\" action=\"//search.umn.edu/tc/\" method=\"get\" \
             title=\"Search Websites and People\" role=\"search\">\n\
             <label class=\"umnhf\" for=\"umnhf-h-st\">Search</label>\n\
             <input class=\"umnhf\" id=\"umnhf-h-st\" type=\"text\" name=\"q\" />\n\
             <label class=\"umnhf\" for=\"umnhf-h-sb\">Submit search query</label>\n\
             <input class=\"umnhf\" id=\"umnhf-h-sb\" type=\"submit\" value=\"\">\n\
             </form>\n</header>\n",
        );
        if view.page.prints_top_nav() {
            Self::top_nav(out, view)?;
        }
        out.push_str("<div class=\"container\">\n");
        Ok(())
    }

    fn breadcrumbs(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        let crumbs = view.page.breadcrumbs();
        if crumbs.is_empty() {
            return Ok(());
        }
        out.push_str("<ol class=\"breadcrumb\">\n");
        let last = crumbs.len() - 1;
        for (idx, crumb) in crumbs.iter().enumerate() {
            match crumb.href.as_deref() {
                Some(href) if idx != last => writeln!(
                    out,
                    "<li><a href=\"{}\">{}</a></li>",
                    escape_html(href),
                    escape_html(&crumb.label)
                )?,
                _ => writeln!(
                    out,
                    "<li class=\"active\">{}</li>",
                    escape_html(&crumb.label)
                )?,
            }
        }
        out.push_str("</ol>\n");
        Ok(())
    }

    fn sidebar(
        &self,
        out: &mut String,
        view: &PageView<'_>,
        _suppress_default: bool,
    ) -> fmt::Result {
        out.push_str("<div class=\"row\">\n<div class=\"col-md-2\">\n");
        let module = view.ctx.page_module_record();
        match (module, module.and_then(|m| m.sidebar())) {
            (_, Some(sidebar)) => {
                out.push_str(sidebar);
                out.push('\n');
            }
            (Some(module), None) => {
                let home = format!("{}{}/index.php", view.ctx.root_path(), module.short_name);
                Self::sidebar_nav(out, &home)?;
            }
            (None, None) => Self::sidebar_nav(out, "index.php")?,
        }
        out.push_str("</div>\n<div class=\"col-md-10\">\n");
        Ok(())
    }

    fn start_content(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        if !view.page.prints_sidebar() {
            out.push_str("<div class=\"row\">\n<div class=\"col-md-12\">\n");
        }
        Ok(())
    }

    fn end_content(&self, out: &mut String, _view: &PageView<'_>) -> fmt::Result {
        out.push_str("</div>\n</div>\n</div>\n");
        Ok(())
    }

    fn footer(&self, out: &mut String, view: &PageView<'_>) -> fmt::Result {
        out.push_str(
            "<section id=\"umnhf-uf\" class=\"umnhf\">\n<div class=\"umnhf-uf-sub\">\n\
             <h2 class=\"visually-hidden\">Contact Information</h2>\n\
             <address id=\"umnhf-uf-ci\" class=\"umnhf\">\n\
             <p class=\"umnhf-f-title\">Intercollegiate Athletics</p>\n\
             <p>516 15th Ave. SE, Suite 250</p>\n<p>Minneapolis, MN 55455</p>\n\
             <p><abbr title=\"Phone Number\">P</abbr>: <a href=\"tel:6126244497\">612-624-4497</a> | \
             <abbr title=\"Fax Number\">F</abbr>: 612-626-7859</p>\n\
             </address>\n</div>\n",
        );
        writeln!(
            out,
            "<div class=\"umnhf-uf-control\">\n<div id=\"umnhf-uf-ctrl\">\n<a href=\"{}\">Control Panel</a>\n</div>\n</div>",
            escape_html(&view.host_url("/admin"))
        )?;
        out.push_str("<div class=\"umnhf-uf-logout\">\n<div id=\"umnhf-uf-lgt\">\n");
        if view.ctx.is_signed_in() {
            writeln!(
                out,
                "<a href=\"{}\">Log Out</a>",
                escape_html(&view.site.logout_url)
            )?;
        }
        out.push_str("</div>\n</div>\n</section>\n");
        out.push_str(
            "<footer id=\"umnhf-f\" class=\"umnhf\" role=\"contentinfo\">\n<nav id=\"umnhf-f-myu\">\n\
             <h3 class=\"umnhf-f-title visually-hidden\">For Students, Faculty, and Staff</h3>\n<ul>\n\
             <li><a href=\"http://onestop.umn.edu/\">One Stop</a></li>\n\
             <li><a href=\"https://www.myu.umn.edu/\">My U <span></span></a></li>\n</ul>\n</nav>\n\
             <small>&copy; Regents of the University of Minnesota. All rights reserved. \
             The University of Minnesota is an equal opportunity educator and employer. \
             <a href=\"http://privacy.umn.edu\">Privacy Statement</a></small>\n</footer>\n",
        );
        Ok(())
    }

    fn finish(&self, out: &mut String, _view: &PageView<'_>) -> fmt::Result {
        out.push_str("</body>\n</html>\n");
        Ok(())
    }
}
