use crate::{Error, table::COLUMNS};

/// Page geometry for a rendered report.
///
/// Construct with [`Layout::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```
/// use bisect_report::Layout;
///
/// let layout = Layout::new().page_height(40).cell_width(14);
/// assert_eq!(layout.table_width(), 7 * 14 + 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    page_width: usize,
    page_height: usize,
    cell_width: usize,
}

impl Layout {
    /// Smallest page height that fits every block the renderer emits.
    pub const MIN_PAGE_HEIGHT: usize = 8;

    /// Creates a layout with defaults: 96 columns, 60 lines, 12-column cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_width: 96,
            page_height: 60,
            cell_width: 12,
        }
    }

    /// Sets the page width in columns.
    #[must_use]
    pub fn page_width(mut self, columns: usize) -> Self {
        self.page_width = columns;
        self
    }

    /// Sets the page height in lines.
    #[must_use]
    pub fn page_height(mut self, lines: usize) -> Self {
        self.page_height = lines;
        self
    }

    /// Sets the width of each table cell in columns.
    #[must_use]
    pub fn cell_width(mut self, columns: usize) -> Self {
        self.cell_width = columns;
        self
    }

    /// Returns the page width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.page_width
    }

    /// Returns the page height in lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.page_height
    }

    /// Returns the table cell width in columns.
    #[must_use]
    pub fn cell(&self) -> usize {
        self.cell_width
    }

    /// Returns the width of one table row, cells joined by single spaces.
    #[must_use]
    pub fn table_width(&self) -> usize {
        COLUMNS.len() * self.cell_width + COLUMNS.len() - 1
    }

    /// Checks that the table header and every block fit on a page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if a column title is wider than a
    /// cell, the table is wider than the page, or the page is shorter than
    /// [`Layout::MIN_PAGE_HEIGHT`].
    pub fn validate(&self) -> Result<(), Error> {
        let widest = COLUMNS.iter().map(|title| title.len()).max().unwrap_or(0);
        if self.cell_width < widest {
            return Err(Error::InvalidLayout {
                reason: format!("cell width {} is below {widest}", self.cell_width),
            });
        }
        if self.page_width < self.table_width() {
            return Err(Error::InvalidLayout {
                reason: format!(
                    "page width {} is narrower than the table ({})",
                    self.page_width,
                    self.table_width()
                ),
            });
        }
        if self.page_height < Self::MIN_PAGE_HEIGHT {
            return Err(Error::InvalidLayout {
                reason: format!(
                    "page height {} is below {}",
                    self.page_height,
                    Self::MIN_PAGE_HEIGHT
                ),
            });
        }
        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
