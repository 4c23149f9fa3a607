//! Plain-text rendition of listings for the terminal.

use crowdfund_core::{CategorySummary, PageMarker, PaginationView, Project, User};

use crate::listing::{ListingPage, Rows};

/// Render the pagination control as a single line.
///
/// Disabled arrows are replaced by blanks so the row keeps its width.
///
/// ```
/// use crowdfund::render::render_controls;
/// use crowdfund_core::compute_view;
///
/// assert_eq!(
///     render_controls(&compute_view(5, 10, 2)),
///     "« ‹ 1 … 3 4 [5] 6 7 … 10 › »"
/// );
/// ```
pub fn render_controls(view: &PaginationView) -> String {
    let arrow = |enabled: bool, glyph: &'static str| if enabled { glyph } else { " " };

    let mut parts: Vec<String> = vec![
        arrow(view.can_go_first, "«").to_string(),
        arrow(view.can_go_prev, "‹").to_string(),
    ];
    parts.extend(view.markers.iter().map(|marker| match marker {
        PageMarker::Page(n) if *n == view.current_page => format!("[{}]", n),
        PageMarker::Page(n) => n.to_string(),
        PageMarker::Ellipsis => "…".to_string(),
    }));
    parts.push(arrow(view.can_go_next, "›").to_string());
    parts.push(arrow(view.can_go_last, "»").to_string());

    parts.join(" ")
}

/// Format cents as whole dollars with thousands separators, e.g. `$12,345`.
pub fn format_amount(cents: u64) -> String {
    let digits = (cents / 100).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn project_line(p: &Project) -> String {
    format!(
        "{:>4}  {:<28} {:<10} {:>11} of {:<11} {:>4}%  {:?}",
        p.id,
        truncate(&p.title, 28),
        p.category,
        format_amount(p.raised_cents),
        format_amount(p.goal_cents),
        p.funded_percent(),
        p.status,
    )
}

fn user_line(u: &User) -> String {
    format!(
        "{:>4}  {:<20} {:<24} {:<8} {}",
        u.id,
        truncate(&u.name, 20),
        truncate(&u.email, 24),
        format!("{:?}", u.role),
        u.joined_at.strftime("%Y-%m-%d"),
    )
}

/// Render a fetched page: rows, a summary line and the pagination control.
pub fn render_page(page: &ListingPage) -> String {
    let mut lines: Vec<String> = match &page.rows {
        Rows::Projects(projects) => projects.iter().map(project_line).collect(),
        Rows::Users(users) => users.iter().map(user_line).collect(),
    };
    if page.rows.is_empty() {
        lines.push("  (no results)".to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} ({} total)",
        page.view.current_page, page.view.total_pages, page.total
    ));
    lines.push(render_controls(&page.view));
    lines.join("\n")
}

/// Render the category table.
pub fn render_categories(categories: &[CategorySummary]) -> String {
    categories
        .iter()
        .map(|c| format!("{:<12} {:<20} {:>3} projects", c.slug, c.name, c.project_count))
        .collect::<Vec<_>>()
        .join("\n")
}
