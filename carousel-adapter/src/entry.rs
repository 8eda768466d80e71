use core::fmt;

/// One slot of the render window: a host item paired with its cached position.
///
/// The host renders each entry absolutely positioned at `offset` along the scroll axis.
pub struct Entry<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub offset: f64,
    pub size: f64,
    /// `true` for the first item of the item set.
    pub first: bool,
    /// `true` for the last item of the item set.
    pub last: bool,
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("item", self.item)
            .field("index", &self.index)
            .field("offset", &self.offset)
            .field("size", &self.size)
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}
