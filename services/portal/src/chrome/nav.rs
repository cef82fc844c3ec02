//! Static navigation tables shared by the chrome versions.
use super::{PageView, escape_html};
use intranet_access::ModuleId;

/// Where a navigation link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Relative to the site root, prefixed with the page's root path.
    Site(&'static str),
    /// Absolute path on the requesting host, served over https.
    Host(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: LinkTarget,
    /// Marks the link active when the page belongs to this module.
    pub module: Option<ModuleId>,
    pub new_window: bool,
    /// Requires sign-in; the classic menu shows a lock icon.
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

impl NavLink {
    const fn new(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            module: None,
            new_window: false,
            locked: false,
        }
    }

    const fn module(mut self, id: u32) -> Self {
        self.module = Some(ModuleId::new(id));
        self
    }

    const fn new_window(mut self) -> Self {
        self.new_window = true;
        self
    }

    const fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn href(&self, view: &PageView<'_>) -> String {
        match self.target {
            LinkTarget::Site(path) => format!("{}{}", view.ctx.root_path(), path),
            LinkTarget::Host(path) => view.host_url(path),
        }
    }

    pub fn is_active(&self, page_module: ModuleId) -> bool {
        !page_module.is_none() && self.module == Some(page_module)
    }

    /// `<a>` tag for this link with escaped href and label.
    pub fn anchor(&self, view: &PageView<'_>) -> String {
        let target = if self.new_window {
            " target=\"_blank\""
        } else {
            ""
        };
        format!(
            "<a href=\"{}\"{target}>{}</a>",
            escape_html(&self.href(view)),
            escape_html(self.label)
        )
    }
}

const DIRECTORY_PDF: &str = "athladministration/files/ICA%20Phone%20&%20Email%20Directory.pdf";
const ORG_CHART_PDF: &str = "athladministration/files/Athletic_Org_Chart.pdf";
const STAFF_ASSIGNMENTS_PDF: &str =
    "athladministration/files/16-17%20Sport%20Staff%20Assignment.pdf";

const MAIN_MENU: &[NavLink] = &[
    NavLink::new("Home", LinkTarget::Host("/")),
    NavLink::new(
        "Athletics Directory",
        LinkTarget::Host("/athladministration/files/ICA%20Phone%20&%20Email%20Directory.pdf"),
    )
    .new_window(),
    NavLink::new(
        "Athletics Org Chart",
        LinkTarget::Host("/athladministration/files/Athletic_Org_Chart.pdf"),
    )
    .new_window(),
    NavLink::new(
        "Athletics Sports Staff Assignments",
        LinkTarget::Host("/athladministration/files/16-17%20Sport%20Staff%20Assignment.pdf"),
    )
    .new_window(),
    NavLink::new("New Employee Resources", LinkTarget::Host("/newemployee/private/")).locked(),
    NavLink::new("Letterwinner", LinkTarget::Host("/letterwinner/")).locked(),
    NavLink::new("Control Panel", LinkTarget::Host("/admin/")).locked(),
];

const ATHLETICS_UNITS: &[NavLink] = &[
    NavLink::new("Administration", LinkTarget::Site("athladministration/")).module(163),
    NavLink::new("Athletic Medicine", LinkTarget::Site("training/")).module(134),
    NavLink::new("Business Office", LinkTarget::Site("finance/")).module(135),
    NavLink::new("Communications", LinkTarget::Site("communications/")).module(159),
    NavLink::new("Compliance", LinkTarget::Site("compliance/")).module(132),
    NavLink::new("Creative Services", LinkTarget::Site("creativeservices/")).module(183),
    NavLink::new("Credentials Request", LinkTarget::Site("credentials/")).module(161),
    NavLink::new("Facilities", LinkTarget::Site("facilities/")).module(136),
    NavLink::new("Human Resources", LinkTarget::Site("hr/")).module(190),
    NavLink::new("Marketing", LinkTarget::Site("marketing/")).module(158),
    NavLink::new("Technology Services", LinkTarget::Site("technology1/")).module(100),
    NavLink::new("Ticket Office", LinkTarget::Host("/ticketoffice/")).module(133),
];

const STUDENT_ATHLETES: &[NavLink] = &[
    NavLink::new(
        "Student-Athlete Development",
        LinkTarget::Site("sadevelopment2/"),
    )
    .module(186),
    NavLink::new("Athlete Surveys", LinkTarget::Host("/athletesurvey/"))
        .module(185)
        .locked(),
    NavLink::new(
        "New Athlete Questionnaire",
        LinkTarget::Site("newAthleteQuestionnaire/"),
    )
    .module(188),
];

/// Default left-hand menu of the classic template.
pub const CLASSIC_SIDEBAR: &[NavSection] = &[
    NavSection {
        title: "Main Menu",
        links: MAIN_MENU,
    },
    NavSection {
        title: "Athletics Units",
        links: ATHLETICS_UNITS,
    },
    NavSection {
        title: "Student Athletes",
        links: STUDENT_ATHLETES,
    },
];

const QUICK_LINKS: &[NavLink] = &[
    NavLink::new("Athletics Directory", LinkTarget::Site(DIRECTORY_PDF)).new_window(),
    NavLink::new("Athletics Org Chart", LinkTarget::Site(ORG_CHART_PDF)).new_window(),
    NavLink::new(
        "Athletics Sports Staff Assignments",
        LinkTarget::Site(STAFF_ASSIGNMENTS_PDF),
    )
    .new_window(),
    NavLink::new("New Employee Resources", LinkTarget::Host("/newemployee/private/"))
        .module(136),
];

const SUPPORT_DEPARTMENTS: &[NavLink] = &[
    NavLink::new("Administration", LinkTarget::Site("athladministration/")).module(163),
    NavLink::new("Athletic Medicine", LinkTarget::Site("training/")).module(134),
    NavLink::new("Business Office", LinkTarget::Site("finance/")).module(135),
    NavLink::new("Communications", LinkTarget::Site("communications/")).module(159),
    NavLink::new("Compliance", LinkTarget::Site("compliance/")).module(132),
    NavLink::new("Creative Services", LinkTarget::Site("creativeservices/")).module(183),
    NavLink::new("Credentials Request", LinkTarget::Site("credentials/")).module(161),
    NavLink::new("Facilities", LinkTarget::Site("facilities/")).module(136),
    NavLink::new("Human Resources", LinkTarget::Site("hr/")).module(190),
    NavLink::new("Letterwinner", LinkTarget::Host("/letterwinner/")).module(103),
    NavLink::new("Marketing", LinkTarget::Site("marketing/")).module(158),
    NavLink::new("Technology Services", LinkTarget::Site("technology1/")).module(100),
    NavLink::new("Ticket Office", LinkTarget::Host("/ticketoffice/")).module(133),
];

const TOP_NAV_STUDENT_ATHLETES: &[NavLink] = &[
    NavLink::new(
        "Student-Athlete Development",
        LinkTarget::Host("/sadevelopment2"),
    )
    .module(186),
    NavLink::new("Athlete Surveys", LinkTarget::Host("/athletesurvey")).module(185),
    NavLink::new(
        "New Athlete Questionnaire",
        LinkTarget::Host("/newAthleteQuestionnaire"),
    )
    .module(188),
];

/// Dropdown menus of the bootstrap top navigation bar.
pub const TOP_NAV: &[NavSection] = &[
    NavSection {
        title: "Quick Links",
        links: QUICK_LINKS,
    },
    NavSection {
        title: "Support Departments",
        links: SUPPORT_DEPARTMENTS,
    },
    NavSection {
        title: "Student Athletes",
        links: TOP_NAV_STUDENT_ATHLETES,
    },
];
