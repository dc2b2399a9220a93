use std::{fmt, fs, path::Path};

use crate::Error;

/// Separator written between pages.
pub const PAGE_BREAK: char = '\x0C';

/// A group of lines that is never split across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Block {
    lines: Vec<String>,
}

impl Block {
    /// Creates an empty block.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    #[must_use]
    pub(crate) fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Returns the number of lines.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }
}

/// One fixed-height page of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    /// Returns the lines on this page.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// A rendered report: an ordered list of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Returns the pages in order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the document as text, pages joined by [`PAGE_BREAK`].
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Writes the document to `path`, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a directory cannot be created or the file
    /// cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_text()).map_err(io_error)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                write!(f, "{PAGE_BREAK}")?;
            }
            for line in &page.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Lays blocks and lines onto pages of a fixed height.
///
/// Blocks on the same page are separated by one blank line. A block that
/// does not fit in the space left starts a new page.
#[derive(Debug)]
pub(crate) struct Paginator {
    height: usize,
    pages: Vec<Page>,
    current: Vec<String>,
}

impl Paginator {
    pub(crate) fn new(height: usize) -> Self {
        Self {
            height,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Returns `true` if nothing has been placed on the current page.
    pub(crate) fn at_page_start(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns the number of lines still free on the current page.
    pub(crate) fn remaining(&self) -> usize {
        self.height.saturating_sub(self.current.len())
    }

    /// Places a block, breaking the page first if it does not fit.
    pub(crate) fn push_block(&mut self, block: Block) {
        let gap = usize::from(!self.at_page_start());
        if gap + block.len() > self.remaining() {
            self.break_page();
        } else if gap == 1 {
            self.current.push(String::new());
        }
        self.current.extend(block.lines);
    }

    /// Places one line; the caller checks [`Paginator::remaining`] first.
    pub(crate) fn push_line(&mut self, line: String) {
        self.current.push(line);
    }

    /// Ends the current page if anything is on it.
    pub(crate) fn break_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(Page {
                lines: std::mem::take(&mut self.current),
            });
        }
    }

    pub(crate) fn finish(mut self) -> Document {
        self.break_page();
        Document { pages: self.pages }
    }
}
