/// A numerator/denominator pair. The denominator is never zero.
///
/// Arithmetic never reduces the result, `2/4` stays `2/4` until
/// [`Fraction::simplify`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

impl Fraction {
  pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
    if denominator == 0 {
      return Err(FractionError::InvalidDenominator);
    }
    Ok(Self {
      numerator,
      denominator,
    })
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  pub fn add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    let numerator = checked(self.numerator.checked_mul(other.denominator))?;
    let numerator = checked(numerator.checked_add(checked(
      other.numerator.checked_mul(self.denominator),
    )?))?;
    let denominator = checked(self.denominator.checked_mul(other.denominator))?;
    Fraction::new(numerator, denominator)
  }

  pub fn subtract(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    let numerator = checked(self.numerator.checked_mul(other.denominator))?;
    let numerator = checked(numerator.checked_sub(checked(
      other.numerator.checked_mul(self.denominator),
    )?))?;
    let denominator = checked(self.denominator.checked_mul(other.denominator))?;
    Fraction::new(numerator, denominator)
  }

  pub fn multiply(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    let numerator = checked(self.numerator.checked_mul(other.numerator))?;
    let denominator = checked(self.denominator.checked_mul(other.denominator))?;
    Fraction::new(numerator, denominator)
  }

  pub fn divide(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    if other.numerator == 0 {
      return Err(FractionError::DivisionByZero);
    }
    let numerator = checked(self.numerator.checked_mul(other.denominator))?;
    let denominator = checked(self.denominator.checked_mul(other.numerator))?;
    Fraction::new(numerator, denominator)
  }

  /// Reduces the fraction in place by the gcd of both fields.
  ///
  /// Afterwards the denominator is positive and the sign sits on the
  /// numerator, unless flipping it would overflow (`i64::MIN`), in which
  /// case the signs are left as they are.
  pub fn simplify(&mut self) {
    if self.numerator == 0 {
      self.denominator = 1;
      return;
    }
    let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) as i128;
    // |x / divisor| <= |x|, so both quotients fit back into i64
    let mut numerator = (self.numerator as i128 / divisor) as i64;
    let mut denominator = (self.denominator as i128 / divisor) as i64;
    if denominator < 0 {
      if let (Some(n), Some(d)) = (numerator.checked_neg(), denominator.checked_neg()) {
        numerator = n;
        denominator = d;
      }
    }
    log::debug!("Simplified {} to {}/{}", self, numerator, denominator);
    self.numerator = numerator;
    self.denominator = denominator;
  }

  pub fn simplified(&self) -> Fraction {
    let mut copy = *self;
    copy.simplify();
    copy
  }
}

#[cfg(test)]
impl Fraction {
  pub fn to_rational(&self) -> num::BigRational {
    num::BigRational::new(
      num::BigInt::from(self.numerator),
      num::BigInt::from(self.denominator),
    )
  }

  /// True when both fractions denote the same rational number.
  pub fn is_equivalent(&self, other: &Fraction) -> bool {
    self.to_rational() == other.to_rational()
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Self {
      numerator: 0,
      denominator: 1,
    }
  }
}

impl std::fmt::Display for Fraction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl std::ops::Add for Fraction {
  type Output = Result<Fraction, FractionError>;

  fn add(self, rhs: Self) -> Self::Output {
    Fraction::add(&self, &rhs)
  }
}

impl std::ops::Sub for Fraction {
  type Output = Result<Fraction, FractionError>;

  fn sub(self, rhs: Self) -> Self::Output {
    self.subtract(&rhs)
  }
}

impl std::ops::Mul for Fraction {
  type Output = Result<Fraction, FractionError>;

  fn mul(self, rhs: Self) -> Self::Output {
    self.multiply(&rhs)
  }
}

impl std::ops::Div for Fraction {
  type Output = Result<Fraction, FractionError>;

  fn div(self, rhs: Self) -> Self::Output {
    self.divide(&rhs)
  }
}

/// Euclid: gcd(a, 0) = a, otherwise gcd(b, a mod b).
pub fn gcd(a: u64, b: u64) -> u64 {
  if b == 0 {
    return a;
  }
  gcd(b, a % b)
}

fn checked(value: Option<i64>) -> Result<i64, FractionError> {
  value.ok_or(FractionError::Overflow)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
  InvalidDenominator,
  DivisionByZero,
  Overflow,
}

impl std::fmt::Display for FractionError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FractionError::InvalidDenominator => write!(f, "Error: Denominator cannot be zero."),
      FractionError::DivisionByZero => write!(f, "Error: Division by zero is not allowed."),
      FractionError::Overflow => write!(f, "Error: Result does not fit into a 64 bit integer."),
    }
  }
}

impl std::error::Error for FractionError {}
