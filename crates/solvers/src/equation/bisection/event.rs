use super::IterationRecord;

/// Event emitted by the bisection solver after each pass.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record appended by this pass.
    pub record: &'a IterationRecord,
    /// Bracket after the interval update.
    pub next_bracket: [f64; 2],
}
