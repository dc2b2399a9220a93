//! Paginated text reports for bisection runs.
//!
//! A report narrates every pass of a run, states the root, and closes with a
//! results table. It reads the stored, already-rounded record fields and
//! never evaluates the function again.
//!
//! # Example
//!
//! ```
//! use bisect_core::Cubic;
//! use bisect_report::{Layout, ReportInput, render};
//! use bisect_solvers::equation::bisection::{self, Config};
//!
//! let config = Config::default();
//! let solution = bisection::solve_unobserved(&Cubic, [3.0, 6.0], &config)?;
//!
//! let input = ReportInput {
//!     records: solution.records(),
//!     tolerance_percent: config.tolerance_percent(),
//!     authors: ["Ada".into(), "Grace".into()],
//!     function_label: Cubic::LABEL.into(),
//! };
//! let document = render(&input, &Layout::default())?;
//!
//! assert!(document.to_text().contains("The root is 4.0002"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod error;
mod layout;
mod narrative;
mod table;

pub use document::{Document, PAGE_BREAK, Page};
pub use error::Error;
pub use layout::Layout;
pub use table::COLUMNS;

use bisect_solvers::equation::bisection::IterationRecord;

use document::Paginator;

/// Everything the renderer needs from a finished run.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    /// Records in iteration order.
    pub records: &'a [IterationRecord],
    /// The tolerance the run was configured with, in percent.
    pub tolerance_percent: f64,
    /// The two author labels printed in the header.
    pub authors: [String; 2],
    /// A human-readable form of the function, such as `f(x) = x^3 - 6x^2 + 8x`.
    pub function_label: String,
}

/// Renders a run into a paginated document.
///
/// # Errors
///
/// Returns [`Error::EmptyTrace`] if there are no records and
/// [`Error::InvalidLayout`] if the layout fails [`Layout::validate`].
pub fn render(input: &ReportInput<'_>, layout: &Layout) -> Result<Document, Error> {
    layout.validate()?;
    let (Some(first), Some(last)) = (input.records.first(), input.records.last()) else {
        return Err(Error::EmptyTrace);
    };

    let mut pager = Paginator::new(layout.height());
    pager.push_block(narrative::authors(input));
    pager.push_block(narrative::title(layout.width()));
    pager.push_block(narrative::problem(input, first));
    pager.push_block(narrative::iterations_heading());
    for record in input.records {
        pager.push_block(narrative::pass(record));
    }
    pager.push_block(narrative::conclusion(last));

    table::render(&mut pager, layout, input.records);

    Ok(pager.finish())
}
