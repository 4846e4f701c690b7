//! Pagination Helpers
//!
//! Page-number window shown by the pagination bar.

/// Numbers shown around the current page
const WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Number of pages needed for `total` rows
pub fn last_page(total: u64, per_page: u32) -> u32 {
    if per_page == 0 || total == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Links for the pagination bar: a window of five pages around `current`,
/// plus the first and last page separated by ellipses when out of view.
pub fn page_window(current: u32, last: u32) -> Vec<PageLink> {
    let last = last.max(1);
    let current = current.clamp(1, last);
    let half = WINDOW / 2;

    let mut start = current.saturating_sub(half).max(1);
    let mut end = (current + half).min(last);
    if current <= half {
        end = WINDOW.min(last);
    }
    if current + half >= last {
        start = last.saturating_sub(WINDOW - 1).max(1);
    }

    let mut links = Vec::new();
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < last {
        if end + 1 < last {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(last));
    }
    links
}

/// "Showing 11 to 20 of 45 results"
pub fn range_summary(page: u32, per_page: u32, total: u64) -> String {
    if total == 0 {
        return "No results".to_string();
    }
    let from = u64::from(page.saturating_sub(1)) * u64::from(per_page) + 1;
    let to = (from + u64::from(per_page) - 1).min(total);
    format!("Showing {} to {} of {} results", from.min(total), to, total)
}
