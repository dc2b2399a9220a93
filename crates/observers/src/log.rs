//! Logging observer for bisection runs.

use std::io::{self, Write};

use bisect_core::Observer;
use bisect_solvers::equation::bisection::Subinterval;

use crate::traits::HasRecord;

/// An observer that writes one `key=value` line per event to a sink.
///
/// A line looks like:
///
/// ```text
/// iter=2 lower=3 upper=4.5 midpoint=3.75 f_lower=-3 f_midpoint=-1.6406 error=20 keep=upper next=[3.75, 4.5]
/// ```
///
/// Observers cannot return errors to the solver, so the first write failure
/// is held and later events are skipped. [`LogObserver::finish`] reports it.
pub struct LogObserver<W: Write> {
    sink: W,
    prefix: Option<String>,
    error: Option<io::Error>,
}

impl<W: Write> LogObserver<W> {
    /// Creates an observer writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            prefix: None,
            error: None,
        }
    }

    /// Starts every line with `prefix` followed by a space.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Writes the line for one event.
    pub fn log<E: HasRecord>(&mut self, event: &E) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_line(event) {
            self.error = Some(err);
        }
    }

    /// Flushes the sink and returns it, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn write_line<E: HasRecord>(&mut self, event: &E) -> io::Result<()> {
        let record = event.record();
        let keep = match record.retained() {
            Subinterval::Lower => "lower",
            Subinterval::Upper => "upper",
        };

        if let Some(prefix) = &self.prefix {
            write!(self.sink, "{prefix} ")?;
        }
        write!(
            self.sink,
            "iter={} lower={} upper={} midpoint={} f_lower={} f_midpoint={} error={} keep={keep}",
            record.iteration,
            record.lower,
            record.upper,
            record.midpoint,
            record.value_at_lower,
            record.value_at_midpoint,
            record.relative_error,
        )?;
        if let Some([lower, upper]) = event.next_bracket() {
            write!(self.sink, " next=[{lower}, {upper}]")?;
        }
        writeln!(self.sink)
    }
}

impl<E, A, W> Observer<E, A> for LogObserver<W>
where
    E: HasRecord,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

/// Allows `&mut LogObserver<W>` to be passed to solvers that take an observer
/// by value, so [`LogObserver::finish`] can be called after the solve completes.
impl<E, A, W> Observer<E, A> for &mut LogObserver<W>
where
    E: HasRecord,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bisect_core::Cubic;
    use bisect_solvers::equation::bisection::{self, Config, IterationRecord};

    /// A sink that rejects every write.
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record() -> IterationRecord {
        IterationRecord {
            iteration: 2,
            lower: 3.0,
            upper: 4.5,
            midpoint: 3.75,
            value_at_lower: -3.0,
            value_at_midpoint: -1.6406,
            relative_error: 20.0,
        }
    }

    fn lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .expect("utf-8 log")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn formats_a_stored_record() {
        let mut obs = LogObserver::new(Vec::new());
        obs.log(&record());

        let lines = lines(obs.finish().expect("in-memory sink"));
        assert_eq!(
            lines,
            ["iter=2 lower=3 upper=4.5 midpoint=3.75 f_lower=-3 f_midpoint=-1.6406 error=20 keep=upper"]
        );
    }

    #[test]
    fn prefix_starts_each_line() {
        let mut obs = LogObserver::new(Vec::new()).with_prefix("[bisect]");
        obs.log(&record());

        let lines = lines(obs.finish().expect("in-memory sink"));
        assert!(lines[0].starts_with("[bisect] iter=2 "));
    }

    #[test]
    fn logs_every_pass_of_a_live_run() {
        let mut obs = LogObserver::new(Vec::new());
        let solution = bisection::solve(&Cubic, [3.0, 6.0], &Config::default(), &mut obs)
            .expect("should converge");

        let lines = lines(obs.finish().expect("in-memory sink"));
        assert_eq!(lines.len(), solution.iters());
        assert_eq!(
            lines[0],
            "iter=1 lower=3 upper=6 midpoint=4.5 f_lower=-3 f_midpoint=5.625 error=100 keep=lower next=[3, 4.5]"
        );
        assert!(lines[13].starts_with("iter=14 lower=4 upper=4.0004 midpoint=4.0002 "));
    }

    #[test]
    fn holds_first_write_error() {
        let mut obs = LogObserver::new(Closed);
        obs.log(&record());
        obs.log(&record());

        let err = obs.finish().err().expect("write should fail");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = LogObserver::new(Vec::new());
        let action: Option<()> = obs.observe(&record());
        assert!(action.is_none());
    }
}
