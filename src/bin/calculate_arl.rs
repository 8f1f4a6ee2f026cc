//! Interactive ARL calculator.
//!
//! Prompts for `p0`, `δ`, `h`, the number of runs and the number of subjects per
//! run, then prints the derived parameters and both run-length estimates.
//! An answer that does not parse ends the session immediately.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lccusum::{parse_count, parse_real, run_report_with, ArlConfig, Error, Progress};
use tracing::{debug, error};

const PROMPT_P0: &str = "Please enter the adequate performance value (p0): ";
const PROMPT_DELTA: &str = "Please enter the equivalence zone value (δ): ";
const PROMPT_H: &str = "Please enter the lc-cusum limit (h): ";
const PROMPT_RUNS: &str = "Please enter the number of runs you wish to simulate: ";
const PROMPT_SUBJECTS: &str = "Please enter the number of subjects you wish to simulate per run: ";

fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    // End of input leaves the line empty, which then fails to parse.
    input.read_line(&mut line)?;
    Ok(line)
}

/// Ask for each field in turn, parsing it before the next prompt.
fn read_config(input: &mut impl BufRead, out: &mut impl Write) -> Result<ArlConfig, Error> {
    let p0 = parse_real(&prompt(input, out, PROMPT_P0)?)?;
    let delta = parse_real(&prompt(input, out, PROMPT_DELTA)?)?;
    let threshold = parse_real(&prompt(input, out, PROMPT_H)?)?;
    let trials = parse_count(&prompt(input, out, PROMPT_RUNS)?)?;
    let subjects = parse_count(&prompt(input, out, PROMPT_SUBJECTS)?)?;

    let cfg = ArlConfig {
        p0,
        delta,
        threshold,
        trials,
        subjects,
        ..ArlConfig::default()
    };
    cfg.validate()?;
    Ok(cfg)
}

fn run(input: &mut impl BufRead, out: &mut impl Write) -> Result<(), Error> {
    let cfg = read_config(input, out)?;
    let (mut rng, seed) = cfg.rng();
    debug!(seed, "seeded generator");

    run_report_with(&cfg, &mut rng, |stage| {
        match stage {
            Progress::Parameters(params) => writeln!(out, "{params}")?,
            Progress::Arl0(est) => writeln!(out, "ARL0 : {}", est.mean)?,
            Progress::Arl1(est) => writeln!(out, "ARL1 : {}", est.mean)?,
        }
        out.flush()?;
        Ok(())
    })?;
    Ok(())
}

/// One full session; reports the error (if any) on `out` and returns whether it succeeded.
fn session(input: &mut impl BufRead, out: &mut impl Write) -> bool {
    match run(input, out) {
        Ok(()) => true,
        Err(e) => {
            if !e.is_user_error() {
                error!(error = %e, "simulation failed");
            }
            let _ = writeln!(out, "Error: {e}");
            false
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let ok = session(&mut input, &mut out);
    let _ = prompt(&mut input, &mut out, "Please press enter to continue...");
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
