use crate::core::HisaabError;

/// One page of a paginated report table. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Result<Self, HisaabError> {
        if number == 0 {
            return Err(HisaabError::Report("page numbers start at 1".into()));
        }
        if size == 0 {
            return Err(HisaabError::Report("page size must be positive".into()));
        }
        Ok(Self { number, size })
    }

    /// First page of the given size.
    pub fn first(size: usize) -> Result<Self, HisaabError> {
        Self::new(1, size)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Pages needed for `count` rows (at least one, so an empty table still
    /// renders a page).
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.size).max(1)
    }

    /// Rows of `items` on this page; empty past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }
}
