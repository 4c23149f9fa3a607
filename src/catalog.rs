use serde::{Deserialize, Serialize};

pub use crowdfund_core::{Category, CategorySummary, ListOptions, Page, Project, User};

use crate::error::Result;

pub mod memory;

/// Raw catalog contents as stored in a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Catalog trait for project/user storage backends
pub trait Catalog: Send + Sync {
    /// List publicly visible projects with pagination and filtering
    fn list_projects(&self, options: &ListOptions) -> Result<Page<Project>>;

    /// List every project regardless of status, for the back office
    fn admin_projects(&self, options: &ListOptions) -> Result<Page<Project>>;

    /// List users for the back office
    fn admin_users(&self, options: &ListOptions) -> Result<Page<User>>;

    /// All categories with their project counts
    fn categories(&self) -> Result<Vec<CategorySummary>>;

    /// Get a project by ID
    fn project(&self, id: u32) -> Result<Project>;

    /// Get a user by ID
    fn user(&self, id: u32) -> Result<User>;
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// A missing or blank query matches everything.
pub(crate) fn matches_query(query: Option<&str>, fields: &[&str]) -> bool {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return true;
    };
    let query = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}
