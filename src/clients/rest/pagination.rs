//! Offset pagination for list endpoints.
//!
//! BookStack list endpoints take `count` and `offset` query parameters and
//! answer `{"data": [...], "total": N}`.

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the server accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Clamps a requested page size to `1..=MAX_PAGE_SIZE`.
#[must_use]
pub const fn clamp_page_size(count: u32) -> u32 {
    if count == 0 {
        1
    } else if count > MAX_PAGE_SIZE {
        MAX_PAGE_SIZE
    } else {
        count
    }
}

/// Position in an offset-paginated listing.
///
/// Created per listing call and advanced by the number of records each page
/// actually returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    /// Index of the first record of the next page.
    pub offset: u64,
    /// Requested page size.
    pub count: u32,
}

impl PageCursor {
    /// Starts a cursor at offset 0 with a clamped page size.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self {
            offset: 0,
            count: clamp_page_size(count),
        }
    }

    /// Moves past the records of the page just received.
    pub fn advance(&mut self, received: usize) {
        self.offset += received as u64;
    }

    /// Returns the `count`/`offset` query parameters for the next page.
    #[must_use]
    pub fn query(&self) -> [(String, String); 2] {
        [
            ("count".to_string(), self.count.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ]
    }
}

/// Decides whether a listing is complete after receiving a page.
///
/// An empty page always ends the listing. A short page ends it only once the
/// accumulated records reach the reported total, so an under-reported total
/// never truncates results.
#[must_use]
pub const fn is_final_page(received: usize, requested: u32, accumulated: u64, total: u64) -> bool {
    if received == 0 {
        return true;
    }
    received < requested as usize && accumulated >= total
}
