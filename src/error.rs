use crate::fraction::FractionError;

/// Everything a calculation session can stop on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
  Fraction(FractionError),
  InvalidChoice(i64),
  InvalidInput(String),
  InvalidArgument(String),
  Io(String),
}

impl std::fmt::Display for CalculatorError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CalculatorError::Fraction(err) => write!(f, "{}", err),
      CalculatorError::InvalidChoice(choice) => write!(f, "Invalid choice: {}.", choice),
      CalculatorError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
      CalculatorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
      CalculatorError::Io(msg) => write!(f, "I/O error: {}", msg),
    }
  }
}

impl std::error::Error for CalculatorError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      CalculatorError::Fraction(err) => Some(err),
      _ => None,
    }
  }
}

impl From<FractionError> for CalculatorError {
  fn from(err: FractionError) -> Self {
    CalculatorError::Fraction(err)
  }
}

impl From<std::io::Error> for CalculatorError {
  fn from(err: std::io::Error) -> Self {
    CalculatorError::Io(err.to_string())
  }
}
