use alloc::vec::Vec;
use core::cmp;

/// The role of a single pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageItemKind {
    Page,
    First,
    Previous,
    Next,
    Last,
    StartEllipsis,
    EndEllipsis,
}

/// One renderable pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageItem {
    pub kind: PageItemKind,
    /// Navigation target; `None` for ellipses.
    pub page: Option<u32>,
    pub selected: bool,
    pub disabled: bool,
}

/// Configuration for [`paginate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationOptions {
    /// Number of always-visible pages at the beginning and end.
    pub boundary_count: u32,
    /// Total number of pages.
    pub count: u32,
    /// Disables every produced item.
    pub disabled: bool,
    pub hide_next_button: bool,
    pub hide_prev_button: bool,
    /// The current page (1-based).
    pub page: u32,
    pub show_first_button: bool,
    pub show_last_button: bool,
    /// Number of always-visible pages on each side of the current page.
    pub sibling_count: u32,
}

impl PaginationOptions {
    pub fn new(count: u32, page: u32) -> Self {
        Self {
            boundary_count: 1,
            count,
            disabled: false,
            hide_next_button: false,
            hide_prev_button: false,
            page,
            show_first_button: false,
            show_last_button: false,
            sibling_count: 1,
        }
    }

    pub fn with_boundary_count(mut self, boundary_count: u32) -> Self {
        self.boundary_count = boundary_count;
        self
    }

    pub fn with_sibling_count(mut self, sibling_count: u32) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_first_last_buttons(mut self, show: bool) -> Self {
        self.show_first_button = show;
        self.show_last_button = show;
        self
    }

    pub fn with_prev_next_buttons(mut self, show: bool) -> Self {
        self.hide_prev_button = !show;
        self.hide_next_button = !show;
        self
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Computes the ordered sequence of pagination controls for `options`.
///
/// Boundary pages and the sibling window around the current page are always
/// shown verbatim. A run of hidden pages collapses to an ellipsis only when
/// it is longer than one page; a gap of exactly one page shows that page
/// instead (an ellipsis would occupy the same slot while conveying less).
///
/// The window arithmetic is signed: the clamps go negative for small `count`
/// values, and empty ranges simply contribute nothing.
pub fn paginate(options: &PaginationOptions) -> Vec<PageItem> {
    let count = options.count as i64;
    let page = options.page as i64;
    let boundary = options.boundary_count as i64;
    let sibling = options.sibling_count as i64;

    let start_pages = range(1, cmp::min(boundary, count));
    let end_pages = range(cmp::max(count - boundary + 1, boundary + 1), count);

    let siblings_start = cmp::max(
        cmp::min(
            // natural window start
            page - sibling,
            // upper clamp so the window never eats into the end boundary
            count - boundary - sibling * 2 - 1,
        ),
        // lower clamp: just after the start boundary and its adjacent page
        boundary + 2,
    );

    let siblings_end = cmp::min(
        cmp::max(
            // natural window end
            page + sibling,
            // lower clamp, mirroring siblings_start
            boundary + sibling * 2 + 2,
        ),
        // upper clamp: just before the end boundary and its adjacent page
        count - boundary - 1,
    );

    let mut items = Vec::new();

    if options.show_first_button {
        items.push(nav_item(PageItemKind::First, options));
    }
    if !options.hide_prev_button {
        items.push(nav_item(PageItemKind::Previous, options));
    }
    for p in start_pages {
        items.push(page_item(p, options));
    }

    if siblings_start > boundary + 2 {
        items.push(ellipsis_item(PageItemKind::StartEllipsis, options));
    } else if boundary + 1 < count - boundary {
        // the gap is exactly one page: show it rather than an ellipsis
        items.push(page_item(boundary + 1, options));
    }

    for p in range(siblings_start, siblings_end) {
        items.push(page_item(p, options));
    }

    if siblings_end < count - boundary - 1 {
        items.push(ellipsis_item(PageItemKind::EndEllipsis, options));
    } else if count - boundary > boundary {
        items.push(page_item(count - boundary, options));
    }

    for p in end_pages {
        items.push(page_item(p, options));
    }
    if !options.hide_next_button {
        items.push(nav_item(PageItemKind::Next, options));
    }
    if options.show_last_button {
        items.push(nav_item(PageItemKind::Last, options));
    }

    items
}

fn range(start: i64, end_inclusive: i64) -> core::ops::RangeInclusive<i64> {
    start..=end_inclusive
}

fn page_item(page: i64, options: &PaginationOptions) -> PageItem {
    debug_assert!(page >= 1, "page items are 1-based (got {page})");
    PageItem {
        kind: PageItemKind::Page,
        page: Some(page.max(0) as u32),
        selected: page == options.page as i64,
        disabled: options.disabled,
    }
}

fn ellipsis_item(kind: PageItemKind, options: &PaginationOptions) -> PageItem {
    PageItem {
        kind,
        page: None,
        selected: false,
        disabled: options.disabled,
    }
}

fn nav_item(kind: PageItemKind, options: &PaginationOptions) -> PageItem {
    let count = options.count as i64;
    let page = options.page as i64;

    let target = match kind {
        PageItemKind::First => 1,
        PageItemKind::Previous => page - 1,
        PageItemKind::Next => page + 1,
        PageItemKind::Last => count,
        PageItemKind::Page | PageItemKind::StartEllipsis | PageItemKind::EndEllipsis => {
            debug_assert!(false, "not a navigation kind: {kind:?}");
            page
        }
    };

    let at_edge = match kind {
        PageItemKind::Next | PageItemKind::Last => page >= count,
        _ => page <= 1,
    };

    PageItem {
        kind,
        page: Some(target.max(0) as u32),
        selected: false,
        disabled: options.disabled || at_edge,
    }
}
