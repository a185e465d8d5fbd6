use crate::{
  error::CalculatorError,
  fraction::{Fraction, FractionError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operation {
  /// Menu order, entry `i` is chosen by typing `i + 1`.
  pub const ALL: [Operation; 4] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
  ];

  pub fn from_choice(choice: i64) -> Result<Operation, CalculatorError> {
    match choice {
      1 => Ok(Operation::Add),
      2 => Ok(Operation::Subtract),
      3 => Ok(Operation::Multiply),
      4 => Ok(Operation::Divide),
      _ => Err(CalculatorError::InvalidChoice(choice)),
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Operation::Add => "Add fractions",
      Operation::Subtract => "Subtract fractions",
      Operation::Multiply => "Multiply fractions",
      Operation::Divide => "Divide fractions",
    }
  }

  pub fn apply(&self, left: &Fraction, right: &Fraction) -> Result<Fraction, FractionError> {
    log::debug!("Applying {} {} {}", left, self, right);
    match self {
      Operation::Add => left.add(right),
      Operation::Subtract => left.subtract(right),
      Operation::Multiply => left.multiply(right),
      Operation::Divide => left.divide(right),
    }
  }
}

impl std::fmt::Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operation::Add => write!(f, "+"),
      Operation::Subtract => write!(f, "-"),
      Operation::Multiply => write!(f, "*"),
      Operation::Divide => write!(f, "/"),
    }
  }
}
