//! Project resolution for sprint pages.
//!
//! A sprint page names its project either by numeric ID or by slug. The
//! project query and the slug rules belong to the host application and are
//! injected as traits; this module only decides what the page should do
//! with the answer: render, 404, redirect to the canonical slug, or surface
//! the policy error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub phid: String,
    pub name: String,
    pub primary_slug: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slugs: Vec<String>,
    /// Ancestors ordered from the direct parent up to the root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<ProjectRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: u64,
    pub name: String,
}

impl Project {
    pub fn uri(&self) -> String {
        project_uri(self.id)
    }
}

impl ProjectRef {
    pub fn uri(&self) -> String {
        project_uri(self.id)
    }
}

fn project_uri(id: u64) -> String {
    format!("/project/view/{id}/")
}

pub fn tag_uri(slug: &str) -> String {
    format!("/tag/{slug}/")
}

/// How the request named the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRoute {
    Id(u64),
    Slug(String),
}

impl ProjectRoute {
    /// A non-empty slug wins over IDs; `project_id` wins over `id`. Zero is
    /// treated as absent.
    pub fn from_uri_data(project_id: Option<u64>, id: Option<u64>, slug: Option<&str>) -> Result<Self> {
        if let Some(slug) = slug.filter(|slug| !slug.is_empty()) {
            return Ok(ProjectRoute::Slug(slug.to_string()));
        }
        project_id
            .filter(|id| *id != 0)
            .or_else(|| id.filter(|id| *id != 0))
            .map(ProjectRoute::Id)
            .ok_or_else(|| Error::InvalidArgument("no project id or slug in request".to_string()))
    }
}

/// The project exists but the viewer may not see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDenied {
    pub reason: String,
}

/// Host-provided, policy-checked project lookups.
pub trait ProjectQuery {
    fn by_id(&self, id: u64) -> std::result::Result<Option<Project>, PolicyDenied>;
    fn by_slug(&self, slug: &str) -> std::result::Result<Option<Project>, PolicyDenied>;
}

/// Host-provided slug normalization.
pub trait SlugNormalizer {
    fn normalize(&self, slug: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectResolution {
    Found(Project),
    NotFound,
    Redirect(String),
}

pub struct ProjectLocator<'a> {
    query: &'a dyn ProjectQuery,
    slugs: &'a dyn SlugNormalizer,
}

impl<'a> ProjectLocator<'a> {
    pub fn new(query: &'a dyn ProjectQuery, slugs: &'a dyn SlugNormalizer) -> Self {
        Self { query, slugs }
    }

    pub fn resolve(&self, route: &ProjectRoute) -> Result<ProjectResolution> {
        let (slug, lookup) = match route {
            ProjectRoute::Slug(slug) => (Some(slug.as_str()), self.query.by_slug(slug)),
            ProjectRoute::Id(id) => (None, self.query.by_id(*id)),
        };

        let project = match lookup {
            Ok(Some(project)) => project,
            Ok(None) => return Ok(ProjectResolution::NotFound),
            Err(denied) => {
                // Non-canonical slugs redirect before the policy error shows.
                if let Some(slug) = slug {
                    let normal = self.slugs.normalize(slug);
                    if normal != slug {
                        debug!(%slug, %normal, "redirecting denied project to normalized slug");
                        return Ok(ProjectResolution::Redirect(tag_uri(&normal)));
                    }
                }
                return Err(Error::PolicyDenied(denied.reason));
            }
        };

        if let Some(slug) = slug {
            if slug != project.primary_slug {
                debug!(%slug, primary = %project.primary_slug, "redirecting to primary slug");
                return Ok(ProjectResolution::Redirect(tag_uri(&project.primary_slug)));
            }
        }

        Ok(ProjectResolution::Found(project))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideNav {
    pub items: Vec<NavItem>,
    /// The host should append its saved-search filters.
    pub wants_search_filters: bool,
}

const PROJECT_FILTERS: [(&str, &str); 5] = [
    ("profile", "Profile"),
    ("board", "Workboard"),
    ("members", "Members"),
    ("feed", "Feed"),
    ("details", "Edit Details"),
];

pub fn side_nav(project: Option<&Project>, for_app: bool) -> SideNav {
    let mut nav = SideNav::default();
    let mut project_id = None;

    if for_app {
        if let Some(project) = project {
            project_id = Some(project.id);
            for (prefix, label) in PROJECT_FILTERS {
                nav.items.push(NavItem {
                    key: format!("{prefix}/{}/", project.id),
                    label,
                });
            }
        }
        nav.items.push(NavItem {
            key: "create".to_string(),
            label: "Create Project",
        });
    }

    nav.wants_search_filters = project_id.is_none();
    nav
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub name: String,
    pub uri: String,
}

/// Breadcrumbs from the root ancestor down to `project`.
pub fn crumbs(project: &Project) -> Vec<Crumb> {
    project
        .ancestors
        .iter()
        .rev()
        .map(|ancestor| Crumb {
            name: ancestor.name.clone(),
            uri: ancestor.uri(),
        })
        .chain(std::iter::once(Crumb {
            name: project.name.clone(),
            uri: project.uri(),
        }))
        .collect()
}
