/// Default number of products per storefront page.
pub const DEFAULT_CATALOG_LIMIT: i64 = 12;

/// Upper bound on the caller-supplied page size.
pub const MAX_CATALOG_LIMIT: i64 = 60;

/// Immutable filter set driving the storefront catalog queries.
///
/// Built exactly once by the resolver from the raw request inputs; the
/// repository derives both the count query and the list query from the same
/// value, so the two can never apply different filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Language of the rows to return.
    pub lang: String,
    /// Resolved root category filter.
    pub category_id: Option<i32>,
    /// Resolved child category filter.
    pub subcategory_id: Option<i32>,
    /// Restrict to featured products.
    pub featured: bool,
    /// Restrict to products of one collection.
    pub collection_id: Option<i32>,
    /// Drop one product from the results (related-products lookups).
    pub exclude_product_id: Option<i32>,
    /// Admin reads include rows hidden from the storefront.
    pub include_inactive: bool,
    /// Page size.
    pub limit: i64,
    /// Rows skipped before the page starts.
    pub offset: i64,
    /// Set when a slug failed to resolve; such a filter matches nothing.
    pub unsatisfiable: bool,
}

impl CatalogFilter {
    /// Construct a filter over active products of `lang`.
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            category_id: None,
            subcategory_id: None,
            featured: false,
            collection_id: None,
            exclude_product_id: None,
            include_inactive: false,
            limit: DEFAULT_CATALOG_LIMIT,
            offset: 0,
            unsatisfiable: false,
        }
    }

    /// Restrict the results to one root category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restrict the results to one child category.
    pub fn subcategory(mut self, subcategory_id: i32) -> Self {
        self.subcategory_id = Some(subcategory_id);
        self
    }

    /// Restrict the results to featured products.
    pub fn featured_only(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Restrict the results to one collection.
    pub fn collection(mut self, collection_id: i32) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    /// Drop `product_id` from the results.
    pub fn excluding(mut self, product_id: i32) -> Self {
        self.exclude_product_id = Some(product_id);
        self
    }

    /// Include rows hidden from the storefront.
    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Apply a limit/offset window, clamping the limit to the allowed range.
    pub fn window(mut self, limit: i64, offset: i64) -> Self {
        self.limit = limit.clamp(1, MAX_CATALOG_LIMIT);
        self.offset = offset.max(0);
        self
    }

    /// Mark the filter as matching nothing.
    pub fn unsatisfiable(mut self) -> Self {
        self.unsatisfiable = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_clamps_out_of_range_values() {
        let filter = CatalogFilter::new("ru").window(500, -3);
        assert_eq!(filter.limit, MAX_CATALOG_LIMIT);
        assert_eq!(filter.offset, 0);

        let filter = CatalogFilter::new("ru").window(0, 10);
        assert_eq!(filter.limit, 1);
        assert_eq!(filter.offset, 10);
    }

    #[test]
    fn unsatisfiable_keeps_window() {
        let filter = CatalogFilter::new("en").window(6, 6).unsatisfiable();
        assert!(filter.unsatisfiable);
        assert_eq!(filter.limit, 6);
        assert_eq!(filter.offset, 6);
    }
}
