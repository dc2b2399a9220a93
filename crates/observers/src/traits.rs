//! Capability traits for observers.
//!
//! These traits abstract over event types, so an observer can be attached to
//! a live solver or replayed over a finished trace.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use bisect_core::{Cubic, Observer};
//! use bisect_observers::traits::HasRecord;
//! use bisect_solvers::equation::bisection::{self, Config};
//!
//! struct SlowestPass {
//!     worst: f64,
//! }
//!
//! impl<E: HasRecord, A> Observer<E, A> for SlowestPass {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let record = event.record();
//!         if record.iteration > 1 {
//!             self.worst = self.worst.max(record.relative_error);
//!         }
//!         None
//!     }
//! }
//!
//! let mut slowest = SlowestPass { worst: 0.0 };
//! let solution = bisection::solve_unobserved(&Cubic, [3.0, 6.0], &Config::default())?;
//! for record in solution.records() {
//!     let _: Option<Infallible> = slowest.observe(record);
//! }
//! assert_eq!(slowest.worst, 20.0);
//! # Ok::<(), bisection::Error>(())
//! ```

use bisect_solvers::equation::bisection::{self, IterationRecord};

/// An event that carries an iteration record.
pub trait HasRecord {
    /// Returns the record for this event.
    fn record(&self) -> &IterationRecord;

    /// Returns the bracket carried into the next pass, when known.
    fn next_bracket(&self) -> Option<[f64; 2]> {
        None
    }
}

// --- HasRecord for bisection::Event ---

impl HasRecord for bisection::Event<'_> {
    fn record(&self) -> &IterationRecord {
        self.record
    }

    fn next_bracket(&self) -> Option<[f64; 2]> {
        Some(self.next_bracket)
    }
}

// --- HasRecord for stored records ---

impl HasRecord for IterationRecord {
    fn record(&self) -> &IterationRecord {
        self
    }
}
