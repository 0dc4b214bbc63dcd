//! Display-only paging over the filtered customer list.

/// Page sizes offered by the table footer.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Current zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jump to `page`.
    ///
    /// The index is not clamped; a page past the end shows no rows.
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and go back to the first page.
    ///
    /// A size of zero is treated as one.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Number of pages needed for `total` rows (at least one).
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// The rows of `rows` on the current page.
    #[must_use]
    pub fn window<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(rows.len());
        rows.get(start..end).unwrap_or(&[])
    }

    /// Footer label such as `6-10 of 12`.
    #[must_use]
    pub fn range_label(&self, total: usize) -> String {
        let start = self.page.saturating_mul(self.page_size);
        if start >= total {
            return format!("0-0 of {total}");
        }
        let end = start.saturating_add(self.page_size).min(total);
        format!("{}-{end} of {total}", start + 1)
    }
}
