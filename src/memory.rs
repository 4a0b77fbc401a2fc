use crate::utils::*;
use crate::{Region, Request};

impl Request {
    #[inline]
    pub fn new(id: Address, size: Address) -> Self {
        Self { id, size }
    }
}

impl Region {
    /// Creates a new empty region. Both markers start at `start`.
    #[inline]
    pub fn new(start: Address, end: Address) -> Self {
        Self {
            start,
            end,
            cursor: start,
            last_placement_start: start,
            placed: vec![],
        }
    }

    /// Space left between the bump cursor and the region's end.
    ///
    /// A region whose bounds were given inverted (`end < start`) reports
    /// zero space and thus never qualifies for a placement.
    #[inline]
    pub fn available_space(&self) -> Address {
        self.end.saturating_sub(self.cursor)
    }

    /// Bump-allocates `request` at the cursor.
    ///
    /// Precondition: `request.size <= self.available_space()`. The
    /// policies check this before selecting a region.
    pub fn place(&mut self, request: Request) {
        self.last_placement_start = self.cursor;
        self.cursor += request.size;
        self.placed.push(request);
    }

    #[inline]
    pub fn bounds(&self) -> (Address, Address) {
        (self.start, self.end)
    }

    #[inline]
    pub fn cursor(&self) -> Address {
        self.cursor
    }

    /// Start offset of the most recent placement. Equals `start` while
    /// the region is still empty.
    #[inline]
    pub fn last_placement_start(&self) -> Address {
        self.last_placement_start
    }

    /// The requests placed in this region, in placement order.
    #[inline]
    pub fn placed(&self) -> &[Request] {
        &self.placed
    }
}
