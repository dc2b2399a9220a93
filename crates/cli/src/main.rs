use std::{error::Error, fs, io, path::PathBuf};

use bisect_core::Cubic;
use bisect_observers::LogObserver;
use bisect_report::{Layout, ReportInput, render};
use bisect_solvers::equation::bisection::{self, BracketCheck, Config, Solution, Status};
use clap::Parser;

use config::RunConfig;

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "bisect",
    about = "Find a root of f(x) = x^3 - 6x^2 + 8x by bisection and write a report"
)]
struct Cli {
    /// TOML run configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Lower bound of the initial bracket.
    #[arg(long, allow_negative_numbers = true)]
    lower: Option<f64>,
    /// Upper bound of the initial bracket.
    #[arg(long, allow_negative_numbers = true)]
    upper: Option<f64>,
    /// Stop once the relative error in percent falls to or below this value.
    #[arg(long)]
    tolerance: Option<f64>,
    /// Maximum number of passes.
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Decimal digits every stored value is rounded to.
    #[arg(long)]
    precision: Option<u32>,
    /// Reject brackets whose endpoint values share a sign.
    #[arg(long)]
    require_sign_change: bool,
    /// Author label for the report header (up to two).
    #[arg(long = "author", value_name = "NAME")]
    authors: Vec<String>,
    /// Path of the text report.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also write the solution as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Log every pass to stderr.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Loads the config file, if any, then applies command-line overrides.
    fn resolve(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(lower) = self.lower {
            config.lower = lower;
        }
        if let Some(upper) = self.upper {
            config.upper = upper;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance_percent = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.require_sign_change {
            config.require_sign_change = true;
        }
        config.set_authors(&self.authors);
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(json) = &self.json {
            config.json = Some(json.clone());
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    run(&cli.resolve()?, verbose)
}

fn run(settings: &RunConfig, verbose: bool) -> Result<(), Box<dyn Error>> {
    let bracket_check = if settings.require_sign_change {
        BracketCheck::RequireSignChange
    } else {
        BracketCheck::Unchecked
    };
    let config = Config::new(
        settings.tolerance_percent,
        settings.max_iterations,
        settings.precision,
    )?
    .with_bracket_check(bracket_check);
    let bracket = [settings.lower, settings.upper];

    let solution = if verbose {
        let mut log = LogObserver::new(io::stderr().lock()).with_prefix("[bisect]");
        let solution = bisection::solve(&Cubic, bracket, &config, &mut log)?;
        if let Err(err) = log.finish() {
            eprintln!("failed to write iteration log: {err}");
        }
        solution
    } else {
        bisection::solve_unobserved(&Cubic, bracket, &config)?
    };

    println!("{}", summary(&solution));

    if let Some(path) = &settings.json {
        fs::write(path, serde_json::to_string_pretty(&solution)?)?;
    }

    // A report failure never fails the run.
    match write_report(settings, &config, &solution) {
        Ok(()) => println!("report written to {}", settings.output.display()),
        Err(err) => eprintln!("failed to write report: {err}"),
    }

    Ok(())
}

fn summary(solution: &Solution) -> String {
    let outcome = match solution.status() {
        Status::Converged => "converged",
        Status::MaxIters => "reached the iteration limit",
    };
    match solution.root() {
        Some(root) => format!("{outcome} after {} iterations: root = {root}", solution.iters()),
        None => format!("{outcome} after {} iterations", solution.iters()),
    }
}

fn write_report(
    settings: &RunConfig,
    config: &Config,
    solution: &Solution,
) -> Result<(), bisect_report::Error> {
    let mut layout = Layout::default();
    if let Some(height) = settings.page_height {
        layout = layout.page_height(height);
    }

    let input = ReportInput {
        records: solution.records(),
        tolerance_percent: config.tolerance_percent(),
        authors: settings.authors.clone(),
        function_label: Cubic::LABEL.to_owned(),
    };
    render(&input, &layout)?.write_to(&settings.output)
}
