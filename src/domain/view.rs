use serde::{Deserialize, Serialize};

use super::entities::{CargoRecord, Status};

pub const PAGE_SIZE: usize = 10;

/// What the table shows: everything, or a single status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Wire value for the filter widget; `all_statuses` plus the status values.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all_statuses",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn parse(value: &str) -> Option<StatusFilter> {
        if value == "all_statuses" {
            return Some(StatusFilter::All);
        }
        Status::parse(value).map(StatusFilter::Only)
    }
}

/// One page of the filtered record list.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub rows: Vec<CargoRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// Filters by status (preserving insertion order) and slices out the
/// requested 1-based page. Pages past the end come back empty; nothing is
/// clamped. Pure function, so re-rendering recomputes instead of caching.
pub fn page_view(records: &[CargoRecord], filter: StatusFilter, page: usize) -> PageView {
    let filtered: Vec<&CargoRecord> = records
        .iter()
        .filter(|record| filter.matches(record.status))
        .collect();
    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(PAGE_SIZE);
    let start = page.saturating_sub(1) * PAGE_SIZE;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    PageView {
        rows,
        page,
        total_pages,
        filtered_count,
    }
}
