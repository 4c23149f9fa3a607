//! Crowdfunding project catalog.
//!
//! Provides a read-only catalog of projects, users and categories, and the
//! paginated public and admin listings built on top of it.
//!
//! # Example
//!
//! ```
//! use crowdfund::{Listing, ListingKind, MemoryCatalog};
//! use crowdfund_core::{ListOptions, Nav};
//!
//! let catalog = MemoryCatalog::builtin()?;
//! let mut listing = Listing::new(ListingKind::Projects, ListOptions::default(), 2);
//!
//! let first = listing.load(&catalog)?;
//! assert!(!first.view.can_go_prev);
//!
//! let next = listing.navigate(&catalog, Nav::Next)?;
//! assert_eq!(next.map(|p| p.view.current_page), Some(2));
//! # Ok::<(), crowdfund::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod render;

pub use catalog::memory::MemoryCatalog;
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use listing::{Listing, ListingKind, ListingPage, Rows};
