//! Routes between pages. The in-progress route carries its target and audit
//! type as transient parameters rather than app state.

use shared::{
    domain::AuditId,
    state::{AppState, AuditLog},
};

use crate::simulation::AuditRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    NewAudit(Option<AuditRequest>),
    Report(AuditId),
    Monitoring,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Monitoring,
    Settings,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Dashboard, Self::Monitoring, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Monitoring => "MONITORING",
            Self::Settings => "SETTINGS",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Dashboard => Route::Dashboard,
            Self::Monitoring => Route::Monitoring,
            Self::Settings => Route::Settings,
        }
    }
}

impl Route {
    /// Unknown paths redirect to the dashboard.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/new-audit" => Self::NewAudit(None),
            "/monitoring" => Self::Monitoring,
            "/settings" => Self::Settings,
            other => match other.strip_prefix("/report/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::Report(AuditId::from(id))
                }
                _ => Self::Dashboard,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::NewAudit(_) => "/new-audit".to_string(),
            Self::Report(id) => format!("/report/{id}"),
            Self::Monitoring => "/monitoring".to_string(),
            Self::Settings => "/settings".to_string(),
        }
    }

    /// Sidebar entry highlighted for this route.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Dashboard => Some(Section::Dashboard),
            Self::Monitoring => Some(Section::Monitoring),
            Self::Settings => Some(Section::Settings),
            Self::NewAudit(_) | Self::Report(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportLookup<'a> {
    Found(&'a AuditLog),
    NotFound,
}

pub fn lookup_report<'a>(state: &'a AppState, id: &AuditId) -> ReportLookup<'a> {
    match state.find_audit(id) {
        Some(audit) => ReportLookup::Found(audit),
        None => ReportLookup::NotFound,
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Returns the route being left.
    pub fn navigate(&mut self, route: Route) -> Route {
        tracing::debug!(from = %self.current.path(), to = %route.path(), "navigate");
        std::mem::replace(&mut self.current, route)
    }
}
