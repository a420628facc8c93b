//! Offset and page windows over sorted result lists.

/// Offset/limit window; `limit: None` means no cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetWindow {
    offset: usize,
    limit: Option<usize>,
}

impl OffsetWindow {
    /// Creates a window starting at `offset` holding at most `limit` items.
    #[must_use]
    pub const fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    /// Creates the window for 1-based `page` of `page_size` items.
    ///
    /// Returns `None` when `page` is zero or the offset overflows.
    #[must_use]
    pub fn for_page(page: usize, page_size: usize) -> Option<Self> {
        let offset = page.checked_sub(1)?.checked_mul(page_size)?;
        Some(Self::new(offset, Some(page_size)))
    }

    /// Returns the number of skipped items.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the item cap, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `items[offset..offset + limit]`, clipped to bounds.
    #[must_use]
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}
