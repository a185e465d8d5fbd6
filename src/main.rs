use colored::Colorize;
use std::{io::Write, process};

use crate::{error::CalculatorError, settings::Settings};

mod error;
mod fraction;
mod operation;
mod session;
mod settings;

fn main() {
  env_logger::init();

  let settings = match Settings::from_env() {
    Ok(settings) => settings,
    Err(err) => {
      let mut stderr = std::io::stderr();
      let _ = report(&err, &mut stderr);
      let _ = writeln!(stderr, "{}", settings::USAGE);
      process::exit(2);
    }
  };
  if settings.show_help {
    println!("{}", settings::USAGE);
    return;
  }

  if let Err(err) = calculate(&settings) {
    let _ = report(&err, &mut std::io::stderr());
    process::exit(1);
  }
}

fn calculate(settings: &Settings) -> Result<(), CalculatorError> {
  let stdin = std::io::stdin();
  let mut stdout = std::io::stdout();
  let result = session::run(stdin.lock(), &mut stdout, settings)?;
  let lowest = result.simplified();
  log::info!(
    "Result {}/{} (lowest terms {}/{})",
    result.numerator(),
    result.denominator(),
    lowest.numerator(),
    lowest.denominator()
  );
  Ok(())
}

/// The single user-facing line for a failure; the log only gets it at debug level.
fn report<W: Write>(err: &CalculatorError, output: &mut W) -> std::io::Result<()> {
  log::debug!("Calculation failed: {:?}", err);
  writeln!(output, "{}", err.to_string().red().bold())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn failed_session_reports_one_line() {
    let mut stdout = Vec::new();
    let err = session::run(Cursor::new("1 2\n0 1\n4\n"), &mut stdout, &Settings::default())
      .unwrap_err();

    let mut stderr = Vec::new();
    report(&err, &mut stderr).unwrap();
    let stderr = String::from_utf8(stderr).unwrap();

    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("Error: Division by zero is not allowed."));
    assert!(!String::from_utf8(stdout).unwrap().contains("Result:"));
  }

  #[test]
  fn invalid_argument_reports_one_line() {
    let err = Settings::from_parts(["--bogus"], None).unwrap_err();
    let mut stderr = Vec::new();
    report(&err, &mut stderr).unwrap();
    let stderr = String::from_utf8(stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("Invalid argument: --bogus"));
  }
}
