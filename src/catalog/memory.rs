use std::path::Path;

use tracing::{debug, info, warn};

use crowdfund_core::{ProjectStatus, MAX_PER_PAGE};

use crate::catalog::{
    matches_query, Catalog, CategorySummary, ListOptions, Page, Project, Seed, User,
};
use crate::error::{Error, Result};

/// Mock data shipped with the binary.
const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// In-memory catalog implementation
///
/// Holds the whole catalog in memory; listings filter, then slice. The
/// contents never change after construction.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    seed: Seed,
}

impl MemoryCatalog {
    pub fn new(seed: Seed) -> Self {
        for project in &seed.projects {
            if !seed
                .categories
                .iter()
                .any(|c| c.slug.eq_ignore_ascii_case(&project.category))
            {
                warn!(
                    "Project {} references unknown category '{}'",
                    project.id, project.category
                );
            }
        }
        info!(
            "Catalog loaded: {} projects, {} users, {} categories",
            seed.projects.len(),
            seed.users.len(),
            seed.categories.len()
        );
        Self { seed }
    }

    /// Catalog backed by the built-in mock data.
    pub fn builtin() -> Result<Self> {
        let seed: Seed = serde_json::from_str(BUILTIN_SEED)?;
        Ok(Self::new(seed))
    }

    /// Catalog backed by a JSON seed file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&content)?;
        Ok(Self::new(seed))
    }

    fn check_category(&self, category: Option<&str>) -> Result<()> {
        let Some(slug) = category else {
            return Ok(());
        };
        if self.seed.categories.iter().any(|c| c.slug.eq_ignore_ascii_case(slug)) {
            Ok(())
        } else {
            Err(Error::CategoryNotFound(slug.to_string()))
        }
    }

    fn filter_projects<F>(&self, options: &ListOptions, visible: F) -> Result<Page<Project>>
    where
        F: Fn(&Project) -> bool,
    {
        let per_page = per_page(options)?;
        self.check_category(options.category.as_deref())?;

        let matches: Vec<Project> = self
            .seed
            .projects
            .iter()
            .filter(|&p| visible(p))
            .filter(|p| {
                options
                    .category
                    .as_deref()
                    .map_or(true, |slug| p.category.eq_ignore_ascii_case(slug))
            })
            .filter(|p| {
                matches_query(
                    options.query.as_deref(),
                    &[p.title.as_str(), p.summary.as_str(), p.creator.as_str()],
                )
            })
            .cloned()
            .collect();

        debug!(
            "Project listing: {} matches, page {} of size {}",
            matches.len(),
            options.page,
            per_page
        );
        Ok(Page::paginate(matches, options.page, per_page))
    }
}

/// Validated page size: zero is rejected, anything above the cap is clamped.
fn per_page(options: &ListOptions) -> Result<u32> {
    if options.per_page == 0 {
        return Err(Error::BadRequest("per_page must be at least 1".into()));
    }
    Ok(options.per_page.min(MAX_PER_PAGE))
}

impl Catalog for MemoryCatalog {
    fn list_projects(&self, options: &ListOptions) -> Result<Page<Project>> {
        self.filter_projects(options, |p| p.status != ProjectStatus::Closed)
    }

    fn admin_projects(&self, options: &ListOptions) -> Result<Page<Project>> {
        self.filter_projects(options, |_| true)
    }

    fn admin_users(&self, options: &ListOptions) -> Result<Page<User>> {
        let per_page = per_page(options)?;
        if options.category.is_some() {
            return Err(Error::BadRequest("users have no category".into()));
        }
        let matches: Vec<User> = self
            .seed
            .users
            .iter()
            .filter(|u| {
                matches_query(options.query.as_deref(), &[u.name.as_str(), u.email.as_str()])
            })
            .cloned()
            .collect();

        debug!("User listing: {} matches, page {}", matches.len(), options.page);
        Ok(Page::paginate(matches, options.page, per_page))
    }

    fn categories(&self) -> Result<Vec<CategorySummary>> {
        let summaries = self
            .seed
            .categories
            .iter()
            .map(|c| CategorySummary {
                slug: c.slug.clone(),
                name: c.name.clone(),
                project_count: self
                    .seed
                    .projects
                    .iter()
                    .filter(|p| p.category.eq_ignore_ascii_case(&c.slug))
                    .count() as u32,
            })
            .collect();
        Ok(summaries)
    }

    fn project(&self, id: u32) -> Result<Project> {
        self.seed
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(Error::ProjectNotFound(id))
    }

    fn user(&self, id: u32) -> Result<User> {
        self.seed
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(Error::UserNotFound(id))
    }
}
