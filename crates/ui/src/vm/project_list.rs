use workstage_core::model::ProjectSummary;

/// Rows per page of the client-paged project list.
pub const PROJECT_PAGE_SIZE: usize = 10;

/// Case-insensitive substring filter on the project name.
#[must_use]
pub fn filter_by_name(projects: &[ProjectSummary], term: &str) -> Vec<ProjectSummary> {
    let needle = term.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| project.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// One page of an already-filtered list. Pages are 1-based.
#[must_use]
pub fn page_of(projects: &[ProjectSummary], page: usize) -> Vec<ProjectSummary> {
    let start = page.saturating_sub(1) * PROJECT_PAGE_SIZE;
    projects
        .iter()
        .skip(start)
        .take(PROJECT_PAGE_SIZE)
        .cloned()
        .collect()
}

/// Number of pages the filtered list spans.
#[must_use]
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PROJECT_PAGE_SIZE)
}
