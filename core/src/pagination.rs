//! Page window computation for pagination controls.
//!
//! Given the current page, the total page count and a neighbor radius,
//! [`compute_view`] produces the markers a pagination control renders
//! (page numbers and collapsed gaps) together with the enabled state of
//! the first/prev/next/last controls. The marker count is bounded by the
//! radius, never by the total page count.
//!
//! # Example
//!
//! ```
//! use crowdfund_core::pagination::{compute_view, PageMarker};
//!
//! let view = compute_view(5, 10, 2);
//! assert_eq!(
//!     view.markers,
//!     vec![
//!         PageMarker::Page(1),
//!         PageMarker::Ellipsis,
//!         PageMarker::Page(3),
//!         PageMarker::Page(4),
//!         PageMarker::Page(5),
//!         PageMarker::Page(6),
//!         PageMarker::Page(7),
//!         PageMarker::Ellipsis,
//!         PageMarker::Page(10),
//!     ]
//! );
//! assert!(view.can_go_prev && view.can_go_next);
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page when no radius is given.
pub const DEFAULT_NEIGHBOR_RADIUS: u32 = 2;

/// Largest neighbor radius honored; larger values are clamped to it.
pub const MAX_NEIGHBOR_RADIUS: u32 = 100;

/// One rendered unit of a pagination control.
///
/// Serialized as `{"type":"page","number":3}` or `{"type":"ellipsis"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "lowercase")]
pub enum PageMarker {
    /// A clickable page number (1-indexed).
    Page(u32),
    /// A non-interactive gap standing for one or more hidden pages.
    Ellipsis,
}

impl PageMarker {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u32> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }
}

/// Input to the window computation.
///
/// # Example
///
/// ```
/// use crowdfund_core::pagination::PaginationRequest;
///
/// let view = PaginationRequest::new(1, 10).view();
/// assert!(!view.can_go_first);
/// assert!(view.can_go_last);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Currently selected page (1-indexed).
    pub current_page: u32,
    /// Total number of pages, at least 1.
    pub total_pages: u32,
    /// Pages shown on each side of the current page.
    #[serde(default = "default_neighbor_radius")]
    pub neighbor_radius: u32,
}

fn default_neighbor_radius() -> u32 {
    DEFAULT_NEIGHBOR_RADIUS
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
        }
    }
}

impl PaginationRequest {
    /// Creates a request with the default neighbor radius.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
        }
    }

    /// Overrides the neighbor radius.
    pub fn with_radius(mut self, neighbor_radius: u32) -> Self {
        self.neighbor_radius = neighbor_radius;
        self
    }

    /// Computes the view for this request.
    pub fn view(&self) -> PaginationView {
        compute_view(self.current_page, self.total_pages, self.neighbor_radius)
    }
}

/// A navigation request issued by a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    First,
    Prev,
    Next,
    Last,
    /// Jump to a specific page (1-indexed).
    Page(u32),
}

/// Computed state of a pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationView {
    /// Markers in render order, left to right.
    pub markers: Vec<PageMarker>,
    /// Current page after clamping into `[1, total_pages]`.
    pub current_page: u32,
    /// Total pages after clamping to at least 1.
    pub total_pages: u32,
    pub can_go_first: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub can_go_last: bool,
}

impl PaginationView {
    /// Page numbers shown by this view, in order.
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.markers.iter().filter_map(PageMarker::page)
    }

    /// Returns true when there is nothing to navigate.
    pub fn is_single_page(&self) -> bool {
        self.total_pages == 1
    }

    /// Resolves a navigation request into the page it moves to.
    ///
    /// Returns `None` when the control is disabled, the target is out of
    /// range, or the target is the page already shown.
    pub fn target(&self, nav: Nav) -> Option<u32> {
        let target = match nav {
            Nav::First if self.can_go_first => 1,
            Nav::Prev if self.can_go_prev => self.current_page - 1,
            Nav::Next if self.can_go_next => self.current_page + 1,
            Nav::Last if self.can_go_last => self.total_pages,
            Nav::Page(n) if (1..=self.total_pages).contains(&n) && n != self.current_page => n,
            _ => return None,
        };
        Some(target)
    }
}

/// Computes the markers and navigation state for a pagination control.
///
/// `total_pages` is clamped to at least 1, `current_page` into
/// `[1, total_pages]` and `neighbor_radius` to [`MAX_NEIGHBOR_RADIUS`]
/// first, so any input yields a well-formed view of bounded size.
pub fn compute_view(current_page: u32, total_pages: u32, neighbor_radius: u32) -> PaginationView {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    let neighbor_radius = neighbor_radius.min(MAX_NEIGHBOR_RADIUS);

    let mut markers = vec![PageMarker::Page(1)];

    if total > 1 {
        let low = current.saturating_sub(neighbor_radius).max(2);
        let high = current.saturating_add(neighbor_radius).min(total - 1);

        if low > 2 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.extend((low..=high).map(PageMarker::Page));
        if high < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
    }

    PaginationView {
        markers,
        current_page: current,
        total_pages: total,
        can_go_first: current > 1,
        can_go_prev: current > 1,
        can_go_next: current < total,
        can_go_last: current < total,
    }
}

/// Number of pages needed for `item_count` items. An empty listing still
/// has one page.
pub fn total_pages(item_count: u32, per_page: u32) -> u32 {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the items shown on `page`. Empty past the end.
pub fn page_bounds(item_count: usize, per_page: u32, page: u32) -> Range<usize> {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1)
        .saturating_mul(per_page)
        .min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageMarker::{Ellipsis, Page};

    fn check_invariants(view: &PaginationView) {
        let pages: Vec<u32> = view.pages().collect();
        assert!(pages.windows(2).all(|w| w[0] < w[1]), "{:?}", view.markers);
        assert!(pages.iter().all(|p| (1..=view.total_pages).contains(p)));
        assert_eq!(pages.iter().filter(|p| **p == 1).count(), 1);
        assert_eq!(
            pages.iter().filter(|p| **p == view.total_pages).count(),
            1
        );
        assert!(!view
            .markers
            .windows(2)
            .any(|w| w[0] == Ellipsis && w[1] == Ellipsis));
        assert_eq!(view.markers.first(), Some(&Page(1)));
        assert_eq!(view.markers.last(), Some(&Page(view.total_pages)));

        // An ellipsis always hides at least one page.
        for w in view.markers.windows(3) {
            if let [Page(a), Ellipsis, Page(b)] = w {
                assert!(b - a > 1, "{:?}", view.markers);
            }
        }
        for w in view.markers.windows(2) {
            if let [Page(a), Page(b)] = w {
                assert_eq!(b - a, 1, "{:?}", view.markers);
            }
        }

        assert_eq!(view.can_go_first, view.current_page > 1);
        assert_eq!(view.can_go_prev, view.can_go_first);
        assert_eq!(view.can_go_next, view.current_page < view.total_pages);
        assert_eq!(view.can_go_last, view.can_go_next);
    }

    #[test]
    fn first_page_of_ten() {
        let view = compute_view(1, 10, 2);
        assert_eq!(view.markers, vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert!(!view.can_go_first && !view.can_go_prev);
        assert!(view.can_go_next && view.can_go_last);
    }

    #[test]
    fn middle_page_of_ten() {
        let view = compute_view(5, 10, 2);
        assert_eq!(
            view.markers,
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn last_page_of_ten() {
        let view = compute_view(10, 10, 2);
        assert_eq!(view.markers, vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
        assert!(view.can_go_first && view.can_go_prev);
        assert!(!view.can_go_next && !view.can_go_last);
    }

    #[test]
    fn window_spans_full_range() {
        let view = compute_view(3, 5, 2);
        assert_eq!(
            view.markers,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn single_page() {
        let view = compute_view(1, 1, 2);
        assert_eq!(view.markers, vec![Page(1)]);
        assert!(view.is_single_page());
        assert!(!view.can_go_first && !view.can_go_prev);
        assert!(!view.can_go_next && !view.can_go_last);
    }

    #[test]
    fn two_pages() {
        assert_eq!(compute_view(1, 2, 2).markers, vec![Page(1), Page(2)]);
        assert_eq!(compute_view(2, 2, 0).markers, vec![Page(1), Page(2)]);
    }

    #[test]
    fn zero_radius() {
        assert_eq!(
            compute_view(5, 10, 0).markers,
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(compute_view(1, 10, 0).markers, vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(compute_view(3, 3, 0).markers, vec![Page(1), Ellipsis, Page(3)]);
    }

    #[test]
    fn window_touching_boundaries_has_no_ellipsis() {
        // current - radius == 2: page 2 shown right after page 1.
        assert_eq!(
            compute_view(4, 10, 2).markers,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        // current + radius == total - 1
        assert_eq!(
            compute_view(7, 10, 2).markers,
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn huge_radius_lists_every_page() {
        let view = compute_view(3, 6, u32::MAX);
        assert_eq!(view.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert!(!view.markers.contains(&Ellipsis));
    }

    #[test]
    fn radius_is_capped_for_huge_page_counts() {
        let view = compute_view(2_000_000_000, 4_000_000_000, 4_000_000_000);
        assert_eq!(view.markers.len(), 2 * MAX_NEIGHBOR_RADIUS as usize + 5);
        assert_eq!(view, compute_view(2_000_000_000, 4_000_000_000, MAX_NEIGHBOR_RADIUS));
        check_invariants(&view);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(compute_view(0, 10, 2), compute_view(1, 10, 2));
        assert_eq!(compute_view(42, 10, 2), compute_view(10, 10, 2));
        assert_eq!(compute_view(3, 0, 2), compute_view(1, 1, 2));
        assert_eq!(compute_view(u32::MAX, u32::MAX, 2).current_page, u32::MAX);
    }

    #[test]
    fn invariants_hold_for_small_inputs() {
        for total in 1..=15 {
            for current in 1..=total {
                for radius in 0..=4 {
                    let view = compute_view(current, total, radius);
                    check_invariants(&view);
                    assert!(view.markers.len() <= 2 * radius as usize + 5);
                }
            }
        }
    }

    #[test]
    fn request_defaults_to_radius_two() {
        let request = PaginationRequest::new(5, 10);
        assert_eq!(request.neighbor_radius, DEFAULT_NEIGHBOR_RADIUS);
        assert_eq!(request.view(), compute_view(5, 10, 2));
        assert_eq!(request.with_radius(1).view(), compute_view(5, 10, 1));

        let parsed: PaginationRequest =
            serde_json::from_str(r#"{"current_page":2,"total_pages":4}"#).unwrap();
        assert_eq!(parsed, PaginationRequest::new(2, 4));
    }

    #[test]
    fn navigation_targets() {
        let view = compute_view(5, 10, 2);
        assert_eq!(view.target(Nav::First), Some(1));
        assert_eq!(view.target(Nav::Prev), Some(4));
        assert_eq!(view.target(Nav::Next), Some(6));
        assert_eq!(view.target(Nav::Last), Some(10));
        assert_eq!(view.target(Nav::Page(9)), Some(9));
        assert_eq!(view.target(Nav::Page(5)), None);
        assert_eq!(view.target(Nav::Page(0)), None);
        assert_eq!(view.target(Nav::Page(11)), None);

        let first = compute_view(1, 10, 2);
        assert_eq!(first.target(Nav::First), None);
        assert_eq!(first.target(Nav::Prev), None);

        let last = compute_view(10, 10, 2);
        assert_eq!(last.target(Nav::Next), None);
        assert_eq!(last.target(Nav::Last), None);
    }

    #[test]
    fn marker_json_shape() {
        let json = serde_json::to_string(&vec![Page(3), Ellipsis]).unwrap();
        assert_eq!(json, r#"[{"type":"page","number":3},{"type":"ellipsis"}]"#);
    }

    #[test]
    fn page_math() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(5, 0), 5);

        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);

        assert_eq!(page_bounds(13, 6, 1), 0..6);
        assert_eq!(page_bounds(13, 6, 3), 12..13);
        assert_eq!(page_bounds(13, 6, 4), 13..13);
        assert_eq!(page_bounds(0, 6, 1), 0..0);
    }
}
