//! Core types for the crowdfund catalog.
//!
//! This crate provides the data types shared by the catalog, the listing
//! views and anything that renders them, together with the pagination
//! window computation those views use.
//!
//! # Overview
//!
//! The main types are:
//!
//! - [`Page`] - A paginated listing wrapper
//! - [`Project`] - A fundable project
//! - [`User`] - A user profile as seen by the back office
//! - [`CategorySummary`] - A category with its project count
//! - [`ListOptions`] - Filters and paging for a listing
//! - [`PaginationView`] - Markers and navigation state for a pagination control
//!
//! # Example
//!
//! ```
//! use crowdfund_core::{Page, PageMarker};
//!
//! let ids: Vec<u32> = (1..=50).collect();
//! let page = Page::paginate(ids, 5, 5);
//!
//! assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
//! assert_eq!(page.total_pages, 10);
//!
//! let view = page.view(2);
//! assert_eq!(view.markers[1], PageMarker::Ellipsis);
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

pub mod pagination;

pub use pagination::{
    compute_view, Nav, PageMarker, PaginationRequest, PaginationView, DEFAULT_NEIGHBOR_RADIUS,
    MAX_NEIGHBOR_RADIUS,
};

/// Largest page size a listing will serve.
pub const MAX_PER_PAGE: u32 = 100;

/// A paginated listing.
///
/// # Example
///
/// ```
/// use crowdfund_core::Page;
///
/// let items = vec!["a", "b", "c"];
/// let page = Page::new(items, 100, 1, 20);
///
/// assert_eq!(page.total, 100);
/// assert_eq!(page.total_pages, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u32,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub per_page: u32,
    /// Total number of pages, at least 1.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Creates a new page.
    ///
    /// Automatically calculates `total_pages` from `total` and `per_page`.
    pub fn new(items: Vec<T>, total: u32, page: u32, per_page: u32) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
            total_pages: pagination::total_pages(total, per_page),
        }
    }

    /// Slices one page out of a full, already filtered result set.
    ///
    /// `page` is clamped into range, so asking for page 9 of a 3-page
    /// listing returns page 3.
    pub fn paginate(all: Vec<T>, page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let total = u32::try_from(all.len()).unwrap_or(u32::MAX);
        let page = pagination::clamp_page(page, pagination::total_pages(total, per_page));
        let bounds = pagination::page_bounds(all.len(), per_page, page);

        let items = all
            .into_iter()
            .skip(bounds.start)
            .take(bounds.len())
            .collect();
        Self::new(items, total, page, per_page)
    }

    /// Pagination control state for this page.
    pub fn view(&self, neighbor_radius: u32) -> PaginationView {
        compute_view(self.page, self.total_pages, neighbor_radius)
    }
}

/// Filters and paging for a listing.
///
/// # Example
///
/// ```
/// use crowdfund_core::ListOptions;
///
/// let options = ListOptions {
///     query: Some("garden".to_string()),
///     category: Some("community".to_string()),
///     page: 1,
///     per_page: 6,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Free-text query.
    #[serde(default)]
    pub query: Option<String>,
    /// Filter by category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page. Defaults to 6.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    6
}

/// Funding state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Accepting pledges.
    Active,
    /// Goal reached, still listed.
    Funded,
    /// No longer listed publicly.
    Closed,
}

/// A fundable project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// One-line pitch shown on listing cards.
    pub summary: String,
    /// Category slug.
    pub category: String,
    /// Display name of the project owner.
    pub creator: String,
    /// Funding goal in cents.
    pub goal_cents: u64,
    /// Amount pledged so far in cents.
    #[serde(default)]
    pub raised_cents: u64,
    #[serde(default)]
    pub backers: u32,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
}

impl Project {
    /// Pledged amount as a whole percentage of the goal, 0 when there is no goal.
    pub fn funded_percent(&self) -> u64 {
        if self.goal_cents == 0 {
            return 0;
        }
        self.raised_cents.saturating_mul(100) / self.goal_cents
    }
}

/// Back-office role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Creator,
    Backer,
}

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub joined_at: Timestamp,
}

/// A project category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL-safe identifier (e.g., `"games"`).
    pub slug: String,
    /// Human-readable name (e.g., `"Tabletop Games"`).
    pub name: String,
}

/// A category with the number of projects filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub slug: String,
    pub name: String,
    pub project_count: u32,
}
