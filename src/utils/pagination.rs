use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

/// Standard `?page=&limit=` query parameters. Defaults: page=1, limit=20.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl PageQuery {
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.max(1);
        let limit = self.limit.max(1);
        (page, limit)
    }

    pub fn offset(&self) -> u64 {
        let (page, limit) = self.normalized();
        (page - 1) * limit
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(query: &PageQuery, total: u64) -> Self {
        let (page, limit) = query.normalized();
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_page_one_limit_twenty() {
        let query = PageQuery::default();
        assert_eq!(query.normalized(), (1, 20));
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn pages_is_ceiling_of_total_over_limit() {
        let query = PageQuery { page: 2, limit: 20 };
        let meta = Pagination::new(&query, 41);
        assert_eq!(meta.pages, 3);
        assert_eq!(meta.page, 2);
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let meta = Pagination::new(&PageQuery::default(), 0);
        assert_eq!(meta.pages, 0);
    }
}
