use serde::{Serialize, Serializer};

/// Number of articles requested from the news API per page.
pub const PAGE_SIZE: u32 = 20;

/// Metadata describing one page of a paginated search.
///
/// `previous_page`/`next_page` are `None` when no such page exists; they
/// serialize as `0` so templates and JSON clients can test them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub is_last_page: bool,
    #[serde(serialize_with = "page_or_zero")]
    pub previous_page: Option<u32>,
    #[serde(serialize_with = "page_or_zero")]
    pub next_page: Option<u32>,
    pub start_index: u64,
    pub end_index: u64,
}

impl Pagination {
    /// Computes pagination for a search that returned `total_items` matches,
    /// `page_len` of which are on `current_page`.
    ///
    /// Zero matches still count as one (empty) page. `current_page` is not
    /// clamped: a page past the end simply has no next page.
    pub fn new(current_page: u32, per_page: u32, total_items: u64, page_len: usize) -> Self {
        let per_page = per_page.max(1);
        let current_page = current_page.max(1);
        let total_pages = if total_items > 0 {
            u32::try_from(total_items.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
        } else {
            1
        };

        Self::with_total_pages(current_page, per_page, total_items, total_pages, page_len)
    }

    /// Pagination for a page where no search has been run yet.
    pub fn blank(per_page: u32) -> Self {
        Self::with_total_pages(1, per_page.max(1), 0, 0, 0)
    }

    fn with_total_pages(
        current_page: u32,
        per_page: u32,
        total_items: u64,
        total_pages: u32,
        page_len: usize,
    ) -> Self {
        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;
        let offset = u64::from(per_page).saturating_mul(u64::from(current_page.saturating_sub(1)));
        let page_len = u64::try_from(page_len).unwrap_or(u64::MAX);
        let (start_index, end_index) = if page_len == 0 {
            (0, 0)
        } else {
            (offset.saturating_add(1), offset.saturating_add(page_len))
        };

        Self {
            current_page,
            per_page,
            total_items,
            total_pages,
            has_previous,
            has_next,
            is_last_page: current_page >= total_pages,
            previous_page: has_previous.then(|| current_page.saturating_sub(1)),
            next_page: has_next.then(|| current_page.saturating_add(1)),
            start_index,
            end_index,
        }
    }
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn page_or_zero<S: Serializer>(page: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(page.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_results_over_page_size() {
        for total in 1..=205_u64 {
            let meta = Pagination::new(1, PAGE_SIZE, total, 0);
            let expected = u32::try_from(total.div_ceil(20)).unwrap();
            assert_eq!(meta.total_pages, expected, "total_items = {total}");
        }
    }

    #[test]
    fn forty_five_results_make_three_pages() {
        let meta = Pagination::new(2, PAGE_SIZE, 45, 20);

        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_previous);
        assert!(meta.has_next);
        assert!(!meta.is_last_page);
        assert_eq!(meta.previous_page, Some(1));
        assert_eq!(meta.next_page, Some(3));
        assert_eq!(meta.start_index, 21);
        assert_eq!(meta.end_index, 40);
    }

    #[test]
    fn zero_results_is_a_single_empty_page() {
        let meta = Pagination::new(1, PAGE_SIZE, 0, 0);

        assert_eq!(meta.total_pages, 1);
        assert!(meta.is_last_page);
        assert_eq!(meta.previous_page, None);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.start_index, 0);
        assert_eq!(meta.end_index, 0);
    }

    #[test]
    fn first_page_has_no_previous() {
        let meta = Pagination::new(1, PAGE_SIZE, 45, 20);

        assert!(!meta.has_previous);
        assert_eq!(meta.previous_page, None);
        assert_eq!(meta.next_page, Some(2));
    }

    #[test]
    fn last_page_has_no_next() {
        let meta = Pagination::new(3, PAGE_SIZE, 45, 5);

        assert!(meta.is_last_page);
        assert!(!meta.has_next);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.previous_page, Some(2));
        assert_eq!(meta.start_index, 41);
        assert_eq!(meta.end_index, 45);
    }

    #[test]
    fn pages_past_the_end_are_not_clamped() {
        let meta = Pagination::new(9, PAGE_SIZE, 45, 0);

        assert_eq!(meta.current_page, 9);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.previous_page, Some(8));
        assert_eq!(meta.next_page, None);
        assert!(meta.is_last_page);
        assert_eq!(meta.start_index, 0);
    }

    #[test]
    fn huge_result_counts_saturate() {
        let meta = Pagination::new(u32::MAX, 1, u64::MAX, 1);

        assert_eq!(meta.total_pages, u32::MAX);
        assert_eq!(meta.next_page, None);
    }

    #[test]
    fn blank_pagination_has_no_pages() {
        let meta = Pagination::blank(PAGE_SIZE);

        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn missing_pages_serialize_as_zero() {
        let value = serde_json::to_value(Pagination::new(1, PAGE_SIZE, 10, 10)).unwrap();

        assert_eq!(value["previous_page"], 0);
        assert_eq!(value["next_page"], 0);
        assert_eq!(value["total_pages"], 1);
    }
}
