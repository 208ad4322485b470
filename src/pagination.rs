use serde::{Deserialize, Serialize};

/// Number of rows shown per page on admin listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page/size pair applied to admin list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
}

/// Page of admin results together with the page cursor.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}

/// Slice of storefront catalog results addressed by limit/offset.
///
/// `page` and `has_more` are derived values: `page = offset / limit + 1` and
/// `has_more` is true exactly when rows remain past this slice.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

impl<T> CatalogPage<T> {
    /// Assemble a page from the rows returned for `(limit, offset)` and the
    /// total row count computed with the identical filter set.
    pub fn new(items: Vec<T>, total: usize, limit: i64, offset: i64) -> Self {
        let limit = limit.max(1) as usize;
        let offset = offset.max(0) as usize;
        let page = offset / limit + 1;
        let has_more = offset + items.len() < total;

        Self {
            items,
            total,
            page,
            has_more,
        }
    }

    /// Empty page for an unsatisfiable filter.
    pub fn empty(limit: i64, offset: i64) -> Self {
        Self::new(Vec::new(), 0, limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_derives_page_number() {
        let page = CatalogPage::new(vec![1, 2, 3], 30, 3, 6);
        assert_eq!(page.page, 3);
        assert!(page.has_more);
    }

    #[test]
    fn catalog_page_last_page_has_no_more() {
        // total=10, limit=6, offset=6 -> 4 rows, no further page.
        let page = CatalogPage::new(vec![0; 4], 10, 6, 6);
        assert_eq!(page.page, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn catalog_page_exact_boundary() {
        let page = CatalogPage::new(vec![0; 5], 10, 5, 0);
        assert!(page.has_more);
        let last = CatalogPage::new(vec![0; 5], 10, 5, 5);
        assert!(!last.has_more);
    }

    #[test]
    fn empty_page_reports_zero_total() {
        let page: CatalogPage<i32> = CatalogPage::empty(12, 0);
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }
}
