//! Pagination helpers shared by listing operations.

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane bounds and convert to a 0-based `(page_idx, per_page)` pair.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// Slice an already-ordered result set down to this page.
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        let (page_idx, per_page) = self.normalize();
        items
            .into_iter()
            .skip((page_idx * per_page) as usize)
            .take(per_page as usize)
            .collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}
