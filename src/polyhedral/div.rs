//! Existentially quantified integer divisions.

use crate::polyhedral::space::Space;
use crate::utils::errors::{PolyError, PolyResult};
use crate::utils::seq::{self, Int};
use num_traits::Signed;

/// The definition `floor((constant + coeffs . x) / denominator)` of one div,
/// detached from any basic map.
///
/// `x` ranges over the parameter, input and output dimensions of `space`
/// followed by `n_div` existing divs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Div {
    space: Space,
    n_div: usize,
    /// `[denominator | constant | coeffs]`
    row: Vec<Int>,
}

impl Div {
    /// Create a div. `numerator` holds the constant followed by one
    /// coefficient per dimension; the denominator must be positive.
    pub fn new(
        space: Space,
        n_div: usize,
        denominator: impl Into<Int>,
        numerator: Vec<Int>,
    ) -> PolyResult<Self> {
        let denominator = denominator.into();
        if !denominator.is_positive() {
            return Err(PolyError::invalid_argument(format!(
                "div denominator must be positive, got {}",
                denominator
            )));
        }
        let expected = 1 + space.total() + n_div;
        if numerator.len() != expected {
            return Err(PolyError::invalid_argument(format!(
                "div numerator has length {}, expected {}",
                numerator.len(),
                expected
            )));
        }
        let mut row = Vec::with_capacity(1 + expected);
        row.push(denominator);
        row.extend(numerator);
        Ok(Self { space, n_div, row })
    }

    /// Space the definition ranges over.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Number of divs the definition may refer to.
    pub fn n_div(&self) -> usize {
        self.n_div
    }

    /// The positive denominator.
    pub fn denominator(&self) -> &Int {
        &self.row[0]
    }

    /// Constant followed by coefficients.
    pub fn numerator(&self) -> &[Int] {
        &self.row[1..]
    }

    /// The whole definition row.
    pub(crate) fn row(&self) -> &[Int] {
        &self.row
    }

    /// Value of the div at an integer point over all dimensions it refers to.
    pub fn value_at(&self, point: &[Int]) -> PolyResult<Int> {
        if point.len() + 1 != self.numerator().len() {
            return Err(PolyError::invalid_argument(format!(
                "point has {} coordinates, expected {}",
                point.len(),
                self.numerator().len() - 1
            )));
        }
        Ok(seq::floor_div(&seq::eval(self.numerator(), point), self.denominator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seq::from_i64;

    #[test]
    fn test_floor_value() {
        // floor((d0 + 1) / 3)
        let div = Div::new(Space::set(0, 1), 0, 3, from_i64(&[1, 1])).unwrap();
        assert_eq!(div.value_at(&from_i64(&[4])).unwrap(), Int::from(1));
        assert_eq!(div.value_at(&from_i64(&[-2])).unwrap(), Int::from(-1));
    }

    #[test]
    fn test_rejects_bad_denominator() {
        assert!(Div::new(Space::set(0, 1), 0, 0, from_i64(&[1, 1])).is_err());
        assert!(Div::new(Space::set(0, 1), 0, -2, from_i64(&[1, 1])).is_err());
    }

    #[test]
    fn test_rejects_bad_length() {
        assert!(Div::new(Space::set(1, 1), 0, 2, from_i64(&[1, 1])).is_err());
    }
}
