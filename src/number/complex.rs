
use super::error::{ComplexError, ParseComplexError};
use crate::util::regexes::WHITESPACE_RE;

use approx::{AbsDiffEq, RelativeEq};
use num::{Zero, One};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};

use std::f64::consts::PI;
use std::fmt::{self, Formatter, Display};
use std::ops;
use std::str::FromStr;

/// Default tolerance for approximate comparisons of complex numbers,
/// applied to each component separately.
pub const COMPARISON_EPSILON: f64 = 0.01;

/// Matches either a real part with an optional signed imaginary part
/// (`3`, `3+2i`, `-1.5-i`), or a lone imaginary part (`2i`, `-i`).
/// Whitespace must be removed before matching.
static COMPLEX_RE: Lazy<Regex> = Lazy::new(|| {
  const NUMBER: &str = r"(?:\d+(?:\.\d*)?|\.\d+)";
  let pattern = format!(
    r"^(?:(?P<real>[+-]?{NUMBER})(?:(?P<imag>[+-]{NUMBER}?)i)?|(?:(?P<imag_only>[+-]?{NUMBER}?)i))$",
  );
  Regex::new(&pattern).unwrap()
});

/// A complex number with floating-point real and imaginary parts.
///
/// Equality via `PartialEq` is exact. Use the `approx` traits (with
/// [`COMPARISON_EPSILON`] as the default tolerance) to compare
/// results of inexact computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
  real: f64,
  imag: f64,
}

impl ComplexNumber {
  pub const ZERO: ComplexNumber = ComplexNumber { real: 0.0, imag: 0.0 };

  pub fn new(real: f64, imag: f64) -> Self {
    Self { real, imag }
  }

  pub fn from_real(real: f64) -> Self {
    Self { real, imag: 0.0 }
  }

  pub fn from_imag(imag: f64) -> Self {
    Self { real: 0.0, imag }
  }

  /// Constructs a complex number from polar coordinates, with `angle`
  /// represented in radians.
  pub fn from_magnitude_and_angle(magnitude: f64, angle: f64) -> Self {
    Self {
      real: magnitude * angle.cos(),
      imag: magnitude * angle.sin(),
    }
  }

  pub fn real(&self) -> f64 {
    self.real
  }

  pub fn imag(&self) -> f64 {
    self.imag
  }

  pub fn magnitude(&self) -> f64 {
    self.real.hypot(self.imag)
  }

  /// The argument of the number, in radians, normalized to the
  /// half-open interval `[0, 2π)`.
  pub fn angle(&self) -> f64 {
    let angle = self.imag.atan2(self.real);
    if angle < 0.0 {
      angle + 2.0 * PI
    } else {
      angle
    }
  }

  /// Division which fails, rather than producing infinities or NaN,
  /// when `other` is exactly zero.
  pub fn checked_div(self, other: ComplexNumber) -> Result<ComplexNumber, ComplexError> {
    if other.is_zero() {
      return Err(ComplexError::DivisionByZero);
    }
    Ok(self / other)
  }

  /// Raises the number to a nonnegative integer power, using de
  /// Moivre's formula.
  pub fn power(self, n: u32) -> ComplexNumber {
    let n = f64::from(n);
    ComplexNumber::from_magnitude_and_angle(self.magnitude().powf(n), self.angle() * n)
  }

  /// Computes all `n` of the `n`th roots of the number. The root
  /// with index `k` has angle `(angle() + 2πk) / n`.
  pub fn root(self, n: u32) -> Result<Vec<ComplexNumber>, ComplexError> {
    if n == 0 {
      return Err(ComplexError::ZeroRoot);
    }
    let magnitude = self.magnitude().powf(1.0 / f64::from(n));
    let angle = self.angle();
    let roots = (0..n)
      .map(|k| {
        let root_angle = (angle + 2.0 * PI * f64::from(k)) / f64::from(n);
        ComplexNumber::from_magnitude_and_angle(magnitude, root_angle)
      })
      .collect();
    Ok(roots)
  }
}

/// Parses the imaginary coefficient of a number. The string has
/// already had its trailing `i` removed, so a bare sign (or nothing
/// at all) means a coefficient of one.
fn parse_imag_coefficient(text: &str) -> Result<f64, std::num::ParseFloatError> {
  match text {
    "" | "+" => Ok(1.0),
    "-" => Ok(-1.0),
    _ => text.parse(),
  }
}

impl FromStr for ComplexNumber {
  type Err = ParseComplexError;

  fn from_str(s: &str) -> Result<Self, ParseComplexError> {
    let compact = WHITESPACE_RE.replace_all(s, "");
    if compact.is_empty() {
      return Err(ParseComplexError::Empty);
    }
    let malformed = || ParseComplexError::Malformed(s.to_owned());
    let captures = COMPLEX_RE.captures(&compact).ok_or_else(malformed)?;

    let real = match captures.name("real") {
      Some(m) => m.as_str().parse::<f64>().map_err(|_| malformed())?,
      None => 0.0,
    };
    let imag = match captures.name("imag").or_else(|| captures.name("imag_only")) {
      Some(m) => parse_imag_coefficient(m.as_str()).map_err(|_| malformed())?,
      None => 0.0,
    };
    Ok(ComplexNumber::new(real, imag))
  }
}

impl Display for ComplexNumber {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let sign = if self.imag < 0.0 { '-' } else { '+' };
    write!(f, "{} {} {}i", self.real, sign, self.imag.abs())
  }
}

impl ops::Add for ComplexNumber {
  type Output = ComplexNumber;

  fn add(self, other: ComplexNumber) -> ComplexNumber {
    ComplexNumber {
      real: self.real + other.real,
      imag: self.imag + other.imag,
    }
  }
}

impl ops::Sub for ComplexNumber {
  type Output = ComplexNumber;

  fn sub(self, other: ComplexNumber) -> ComplexNumber {
    ComplexNumber {
      real: self.real - other.real,
      imag: self.imag - other.imag,
    }
  }
}

impl ops::Mul for ComplexNumber {
  type Output = ComplexNumber;

  fn mul(self, other: ComplexNumber) -> ComplexNumber {
    ComplexNumber {
      real: self.real * other.real - self.imag * other.imag,
      imag: self.imag * other.real + self.real * other.imag,
    }
  }
}

/// IEEE 754 division. Dividing by zero produces non-finite
/// components; see [`ComplexNumber::checked_div`].
impl ops::Div for ComplexNumber {
  type Output = ComplexNumber;

  fn div(self, other: ComplexNumber) -> ComplexNumber {
    let denominator = other.real * other.real + other.imag * other.imag;
    ComplexNumber {
      real: (self.real * other.real + self.imag * other.imag) / denominator,
      imag: (self.imag * other.real - self.real * other.imag) / denominator,
    }
  }
}

impl ops::Neg for ComplexNumber {
  type Output = ComplexNumber;

  fn neg(self) -> ComplexNumber {
    ComplexNumber { real: - self.real, imag: - self.imag }
  }
}

impl Zero for ComplexNumber {
  fn zero() -> Self {
    ComplexNumber::ZERO
  }

  fn is_zero(&self) -> bool {
    self.real.is_zero() && self.imag.is_zero()
  }
}

impl One for ComplexNumber {
  fn one() -> Self {
    ComplexNumber::from_real(1.0)
  }

  fn is_one(&self) -> bool {
    self.real.is_one() && self.imag.is_zero()
  }
}

impl AbsDiffEq for ComplexNumber {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    COMPARISON_EPSILON
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.real.abs_diff_eq(&other.real, epsilon) && self.imag.abs_diff_eq(&other.imag, epsilon)
  }
}

impl RelativeEq for ComplexNumber {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.real.relative_eq(&other.real, epsilon, max_relative) &&
      self.imag.relative_eq(&other.imag, epsilon, max_relative)
  }
}
