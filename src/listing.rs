//! Page state for a listing view.
//!
//! A [`Listing`] owns the current page of one listing (public projects,
//! admin projects or admin users), fetches that page from a [`Catalog`],
//! and turns navigation requests from the pagination control into new
//! fetches.

use serde::Serialize;
use tracing::debug;

use crowdfund_core::{ListOptions, Nav, Page, PaginationView, Project, User};

use crate::catalog::Catalog;
use crate::error::Result;

/// Which listing a [`Listing`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Projects,
    AdminProjects,
    AdminUsers,
}

/// Rows of one fetched page.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Rows {
    Projects(Vec<Project>),
    Users(Vec<User>),
}

impl Rows {
    pub fn len(&self) -> usize {
        match self {
            Rows::Projects(p) => p.len(),
            Rows::Users(u) => u.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One fetched page together with its pagination control state.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub kind: ListingKind,
    pub rows: Rows,
    /// Matching rows across all pages.
    pub total: u32,
    pub view: PaginationView,
}

impl ListingPage {
    fn from_page<T>(
        kind: ListingKind,
        page: Page<T>,
        neighbor_radius: u32,
        rows: fn(Vec<T>) -> Rows,
    ) -> Self {
        let view = page.view(neighbor_radius);
        Self {
            kind,
            rows: rows(page.items),
            total: page.total,
            view,
        }
    }
}

/// Current page and filters of a listing view.
#[derive(Debug, Clone)]
pub struct Listing {
    kind: ListingKind,
    options: ListOptions,
    neighbor_radius: u32,
    last_view: Option<PaginationView>,
}

impl Listing {
    pub fn new(kind: ListingKind, options: ListOptions, neighbor_radius: u32) -> Self {
        Self {
            kind,
            options,
            neighbor_radius,
            last_view: None,
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    /// The page the next [`load`](Self::load) will fetch.
    pub fn page(&self) -> u32 {
        self.options.page
    }

    /// Replaces the filters and goes back to the first page.
    ///
    /// User listings have no categories; loading one with a category set
    /// fails with [`Error::BadRequest`](crate::Error::BadRequest).
    pub fn filter(&mut self, query: Option<String>, category: Option<String>) {
        self.options.query = query;
        self.options.category = category;
        self.options.page = 1;
        self.last_view = None;
    }

    /// Fetches the current page.
    ///
    /// The stored page is replaced by the one the catalog actually served,
    /// so a stale page number past the end settles on the last page.
    pub fn load(&mut self, catalog: &dyn Catalog) -> Result<ListingPage> {
        let radius = self.neighbor_radius;
        let page = match self.kind {
            ListingKind::Projects => {
                let page = catalog.list_projects(&self.options)?;
                ListingPage::from_page(self.kind, page, radius, Rows::Projects)
            }
            ListingKind::AdminProjects => {
                let page = catalog.admin_projects(&self.options)?;
                ListingPage::from_page(self.kind, page, radius, Rows::Projects)
            }
            ListingKind::AdminUsers => {
                let page = catalog.admin_users(&self.options)?;
                ListingPage::from_page(self.kind, page, radius, Rows::Users)
            }
        };

        self.options.page = page.view.current_page;
        self.last_view = Some(page.view.clone());
        Ok(page)
    }

    /// Applies a navigation request and fetches the resulting page.
    ///
    /// Returns `Ok(None)` when the requested control is disabled or points
    /// at the page already shown.
    pub fn navigate(&mut self, catalog: &dyn Catalog, nav: Nav) -> Result<Option<ListingPage>> {
        let view = match &self.last_view {
            Some(view) => view.clone(),
            None => self.load(catalog)?.view,
        };

        let Some(target) = view.target(nav) else {
            debug!("{:?} ignored on page {}/{}", nav, view.current_page, view.total_pages);
            return Ok(None);
        };

        debug!(
            "{:?} listing: page {} -> {}",
            self.kind, view.current_page, target
        );
        self.options.page = target;
        self.load(catalog).map(Some)
    }
}
