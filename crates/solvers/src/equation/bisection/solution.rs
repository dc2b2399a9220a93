#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::IterationRecord;

/// Indicates whether the run met its tolerance or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The relative error fell to or below the tolerance.
    Converged,
    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,
}

/// The result of a bisection run: its status and the full iteration trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    status: Status,
    records: Vec<IterationRecord>,
}

impl Solution {
    pub(super) fn new(status: Status, records: Vec<IterationRecord>) -> Self {
        Self { status, records }
    }

    /// Returns how the run terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Consumes the solution and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }

    /// Returns the number of passes performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.records.len()
    }

    /// Returns the record of the final pass.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Returns the root estimate, the midpoint of the final pass.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.last().map(|record| record.midpoint)
    }
}
