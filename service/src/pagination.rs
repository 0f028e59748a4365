/// Articles added per "load more" on author pages.
pub const AUTHOR_PAGE_SIZE: usize = 6;
/// Articles added per "load more" on category page grids.
pub const CATEGORY_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    /// More items exist past the window; carries the window length.
    Collapsed(usize),
    /// Every item is visible, the "load more" action is hidden.
    Exhausted,
}

/// Prefix window over a filtered list that grows by a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    page_size: usize,
    visible_count: usize,
}

impl PaginationWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Raw window length, may exceed the number of items.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Window length clipped to `total`.
    pub fn shown(&self, total: usize) -> usize {
        self.visible_count.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible_count
    }

    pub fn state(&self, total: usize) -> PaginationState {
        if self.has_more(total) {
            PaginationState::Collapsed(self.visible_count)
        } else {
            PaginationState::Exhausted
        }
    }

    /// Grows the window by one page. Does nothing once every item is visible;
    /// returns whether the window changed.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.visible_count += self.page_size;
        true
    }

    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown(items.len())]
    }
}
