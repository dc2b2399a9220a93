//! Paginated results table.

use bisect_solvers::equation::bisection::IterationRecord;

use crate::{
    Layout,
    document::{Block, Paginator},
};

/// Column titles, in order.
pub const COLUMNS: [&str; 7] = [
    "Iteration",
    "Lower",
    "Upper",
    "Midpoint",
    "f(Lower)",
    "f(Midpoint)",
    "Error (%)",
];

/// Lays the table out after a page break, repeating the header on each page.
pub(crate) fn render(pager: &mut Paginator, layout: &Layout, records: &[IterationRecord]) {
    pager.break_page();
    pager.push_block(Block::new().line("Results table").line("-------------"));

    let header = [row(layout, COLUMNS.map(str::to_owned)), "-".repeat(layout.table_width())];
    let mut header_on_page = false;

    for record in records {
        if header_on_page && pager.remaining() == 0 {
            pager.break_page();
            header_on_page = false;
        }
        if !header_on_page {
            if !pager.at_page_start() && pager.remaining() < header.len() + 2 {
                pager.break_page();
            }
            if !pager.at_page_start() {
                pager.push_line(String::new());
            }
            for line in &header {
                pager.push_line(line.clone());
            }
            header_on_page = true;
        }
        pager.push_line(row(layout, cells(record)));
    }
}

fn cells(record: &IterationRecord) -> [String; 7] {
    [
        record.iteration.to_string(),
        record.lower.to_string(),
        record.upper.to_string(),
        record.midpoint.to_string(),
        record.value_at_lower.to_string(),
        record.value_at_midpoint.to_string(),
        record.relative_error.to_string(),
    ]
}

/// Right-aligns each cell in the layout's cell width.
fn row(layout: &Layout, cells: [String; 7]) -> String {
    let width = layout.cell();
    cells
        .iter()
        .map(|cell| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iteration: usize) -> IterationRecord {
        IterationRecord {
            iteration,
            lower: 3.75,
            upper: 4.5,
            midpoint: 4.125,
            value_at_lower: -1.6406,
            value_at_midpoint: 1.0957,
            relative_error: 9.0909,
        }
    }

    #[test]
    fn row_right_aligns_stored_values() {
        let line = row(&Layout::new(), cells(&record(3)));
        assert_eq!(line.len(), Layout::new().table_width());
        assert!(line.starts_with("           3 "));
        assert!(line.ends_with("      9.0909"));
        assert!(line.contains("     -1.6406 "));
    }

    #[test]
    fn header_repeats_on_every_page() {
        let layout = Layout::new().page_height(8);
        let records: Vec<_> = (1..=12).map(record).collect();

        let mut pager = Paginator::new(layout.height());
        render(&mut pager, &layout, &records);
        let doc = pager.finish();

        // Page 1: title, rule, blank, header, rule, three rows.
        // Later pages: header, rule, six rows.
        assert_eq!(doc.pages().len(), 3);
        for page in doc.pages() {
            assert!(page.lines().len() <= 8);
            assert_eq!(
                page.lines().iter().filter(|l| l.contains("f(Midpoint)")).count(),
                1
            );
        }
        let rows: usize = doc
            .pages()
            .iter()
            .map(|p| p.lines().iter().filter(|l| l.contains("9.0909")).count())
            .sum();
        assert_eq!(rows, 12);
    }
}
