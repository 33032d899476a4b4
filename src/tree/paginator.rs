//! Paginator - fixed-size page slices
//!
//! Out-of-range requests clamp into `[1, total_pages]`; there is always
//! at least one page, possibly empty.

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// A contiguous slice of the linear sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// Clamped, 1-based
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(total_rows / page_size))`
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Missing requests mean page 1.
    pub fn clamp(&self, requested: Option<i64>, total_rows: usize) -> usize {
        let total_pages = self.total_pages(total_rows) as i64;
        requested.unwrap_or(1).clamp(1, total_pages) as usize
    }

    pub fn paginate<'a, T>(&self, rows: &'a [T], requested: Option<i64>) -> Page<'a, T> {
        let total_pages = self.total_pages(rows.len());
        let page = self.clamp(requested, rows.len());
        let start = ((page - 1) * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());

        Page {
            rows: &rows[start..end],
            page,
            total_pages,
            page_size: self.page_size,
        }
    }
}

/// Lenient query-string page parsing: blanks and non-integers are ignored.
///
/// Integers outside `i64` saturate, so they still clamp to the first or
/// last page.
pub fn parse_page_param(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if let Ok(page) = raw.parse::<i64>() {
        return Some(page);
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}
