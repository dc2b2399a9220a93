//! Prose sections of the report.

use bisect_solvers::equation::bisection::{IterationRecord, Subinterval};

use crate::{ReportInput, document::Block};

pub(crate) fn authors(input: &ReportInput) -> Block {
    let [first, second] = &input.authors;
    Block::new()
        .line("Authors")
        .line("-------")
        .line(format!("{first}, {second}"))
}

pub(crate) fn title(width: usize) -> Block {
    let title = "Bisection method";
    Block::new()
        .line(format!("{title:^width$}").trim_end().to_owned())
        .line("=".repeat(width))
}

pub(crate) fn problem(input: &ReportInput, first: &IterationRecord) -> Block {
    Block::new()
        .line(format!("Function: {}", input.function_label))
        .line("Initial values:")
        .line(format!("  Lower = {}", first.lower))
        .line(format!("  Upper = {}", first.upper))
        .line(format!("  Tolerance = {} %", input.tolerance_percent))
}

pub(crate) fn iterations_heading() -> Block {
    Block::new().line("Iterations").line("----------")
}

/// Describes one pass, reading only the stored fields.
pub(crate) fn pass(record: &IterationRecord) -> Block {
    let [[lower, midpoint], [_, upper]] = record.subintervals();
    let [keep_lower, keep_upper] = record.retained_bounds();
    let relation = match record.retained() {
        Subinterval::Lower => "<",
        Subinterval::Upper => ">=",
    };

    Block::new()
        .line(format!("Iteration {}:", record.iteration))
        .line(format!(
            "  Lower = {lower}, Upper = {upper}, Midpoint = {midpoint}"
        ))
        .line(format!(
            "  Subintervals [{lower}, {midpoint}] and [{midpoint}, {upper}]"
        ))
        .line(format!("  f(Lower) = f({lower}) = {}", record.value_at_lower))
        .line(format!(
            "  f(Midpoint) = f({midpoint}) = {}",
            record.value_at_midpoint
        ))
        .line(format!(
            "  The root lies in [{keep_lower}, {keep_upper}] because f(Lower) * f(Midpoint) {relation} 0"
        ))
        .line(format!("  Error = {} %", record.relative_error))
}

pub(crate) fn conclusion(last: &IterationRecord) -> Block {
    Block::new()
        .line(format!(
            "Function value at the root: {}",
            last.value_at_midpoint
        ))
        .line(format!("The root is {}", last.midpoint))
}
