//! Module (organizational unit) records.
use intranet_access::ModuleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub module_id: ModuleId,
    /// URL directory of the unit, e.g. `compliance`.
    pub short_name: String,
    pub name: String,
    /// Unit-specific sidebar markup shown instead of the generic module links.
    #[serde(default)]
    pub sidebar_html: Option<String>,
}

impl ModuleRecord {
    pub fn new(module_id: u32, short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module_id: ModuleId::new(module_id),
            short_name: short_name.into(),
            name: name.into(),
            sidebar_html: None,
        }
    }

    pub fn with_sidebar(mut self, html: impl Into<String>) -> Self {
        self.sidebar_html = Some(html.into());
        self
    }

    /// Sidebar markup when one is configured and non-blank.
    pub fn sidebar(&self) -> Option<&str> {
        self.sidebar_html
            .as_deref()
            .filter(|html| !html.trim().is_empty())
    }
}
