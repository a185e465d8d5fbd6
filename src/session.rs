use std::{
  collections::VecDeque,
  io::{BufRead, Write},
};

use crate::{
  error::CalculatorError, fraction::Fraction, operation::Operation, settings::Settings,
};

/// Whitespace separated tokens pulled from a reader, line by line as needed.
struct Tokens<R: BufRead> {
  reader: R,
  pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
  fn new(reader: R) -> Self {
    Self {
      reader,
      pending: VecDeque::new(),
    }
  }

  fn next_token(&mut self) -> Result<String, CalculatorError> {
    while self.pending.is_empty() {
      let mut line = String::new();
      if self.reader.read_line(&mut line)? == 0 {
        return Err(CalculatorError::InvalidInput(
          "unexpected end of input".to_string(),
        ));
      }
      self
        .pending
        .extend(line.split_whitespace().map(|token| token.to_owned()));
    }
    Ok(self.pending.pop_front().unwrap_or_default())
  }

  fn next_integer(&mut self) -> Result<i64, CalculatorError> {
    let token = self.next_token()?;
    parse_integer(&token)
  }

  /// Either `n d` or a single `n/d` token.
  fn next_fraction(&mut self) -> Result<Fraction, CalculatorError> {
    let token = self.next_token()?;
    let (numerator, denominator) = match token.split_once('/') {
      Some((numerator, denominator)) => (parse_integer(numerator)?, parse_integer(denominator)?),
      None => (parse_integer(&token)?, self.next_integer()?),
    };
    Ok(Fraction::new(numerator, denominator)?)
  }
}

fn parse_integer(token: &str) -> Result<i64, CalculatorError> {
  token
    .trim()
    .parse::<i64>()
    .map_err(|_| CalculatorError::InvalidInput(format!("'{}' is not an integer", token)))
}

/// Runs one calculation: two fractions, a menu choice and the result line.
pub fn run<R: BufRead, W: Write>(
  input: R,
  output: &mut W,
  settings: &Settings,
) -> Result<Fraction, CalculatorError> {
  let mut tokens = Tokens::new(input);

  prompt(output, "Enter the numerator and denominator of the first fraction: ")?;
  let first = tokens.next_fraction()?;
  prompt(output, "Enter the numerator and denominator of the second fraction: ")?;
  let second = tokens.next_fraction()?;

  writeln!(output, "Menu:")?;
  for (index, operation) in Operation::ALL.iter().enumerate() {
    writeln!(output, "{}. {}", index + 1, operation.label())?;
  }
  prompt(output, "Enter your choice (1-4): ")?;
  let operation = Operation::from_choice(tokens.next_integer()?)?;

  let mut result = operation.apply(&first, &second)?;
  if settings.simplify {
    result.simplify();
  }
  writeln!(output, "Result: {}", result)?;
  output.flush()?;
  Ok(result)
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), CalculatorError> {
  write!(output, "{}", text)?;
  output.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fraction::FractionError;
  use std::io::Cursor;

  fn session(input: &str, settings: &Settings) -> (Result<Fraction, CalculatorError>, String) {
    let mut output = Vec::new();
    let result = run(Cursor::new(input), &mut output, settings);
    (result, String::from_utf8(output).unwrap())
  }

  #[test]
  fn adds_two_fractions() {
    let (result, output) = session("1 2\n1 3\n1\n", &Settings::default());
    assert_eq!(result.unwrap().to_string(), "5/6");
    assert!(output.contains("Menu:\n1. Add fractions\n2. Subtract fractions\n"));
    assert!(output.ends_with("Result: 5/6\n"));
  }

  #[test]
  fn divides_two_fractions() {
    let (_, output) = session("1 2 1 3 4", &Settings::default());
    assert!(output.ends_with("Enter your choice (1-4): Result: 3/2\n"));
  }

  #[test]
  fn result_stays_unsimplified_by_default() {
    let (_, output) = session("1/4\n1/4\n1\n", &Settings::default());
    assert!(output.ends_with("Result: 8/16\n"));
  }

  #[test]
  fn simplify_setting_reduces_result() {
    let settings = Settings {
      simplify: true,
      ..Settings::default()
    };
    let (result, output) = session("1/4\n1/4\n1\n", &settings);
    assert_eq!(result.unwrap().to_string(), "1/2");
    assert!(output.ends_with("Result: 1/2\n"));
  }

  #[test]
  fn division_by_zero_prints_no_result() {
    let (result, output) = session("1 2\n0 1\n4\n", &Settings::default());
    assert_eq!(
      result,
      Err(CalculatorError::Fraction(FractionError::DivisionByZero))
    );
    assert!(!output.contains("Result:"));
  }

  #[test]
  fn invalid_choice_is_reported() {
    let (result, output) = session("1 2\n1 3\n7\n", &Settings::default());
    assert_eq!(result, Err(CalculatorError::InvalidChoice(7)));
    assert!(!output.contains("Result:"));
  }

  #[test]
  fn zero_denominator_stops_before_menu() {
    let (result, output) = session("1 0\n1 3\n1\n", &Settings::default());
    assert_eq!(
      result,
      Err(CalculatorError::Fraction(FractionError::InvalidDenominator))
    );
    assert!(!output.contains("Menu:"));
  }

  #[test]
  fn garbage_and_missing_input() {
    let (result, _) = session("one 2\n", &Settings::default());
    assert!(matches!(result, Err(CalculatorError::InvalidInput(_))));
    let (result, _) = session("1 2\n", &Settings::default());
    assert_eq!(
      result,
      Err(CalculatorError::InvalidInput("unexpected end of input".to_string()))
    );
  }
}
