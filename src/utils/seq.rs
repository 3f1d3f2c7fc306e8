//! Row primitives over arbitrary-precision integers.
//!
//! A row is a plain slice of [`Int`]: position 0 holds the constant term and
//! the remaining positions hold coefficients in the global dimension order.
//! Nothing here knows about equalities or inequalities; callers decide what
//! a row means.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Scalar type used for every coefficient and constant.
pub type Int = BigInt;

/// Set every entry to zero.
pub fn clr(row: &mut [Int]) {
    for v in row.iter_mut() {
        v.set_zero();
    }
}

/// Copy `src` into `dst`. Both must have the same length.
pub fn cpy(dst: &mut [Int], src: &[Int]) {
    debug_assert_eq!(dst.len(), src.len());
    dst.clone_from_slice(src);
}

/// Negate every entry in place.
pub fn neg(row: &mut [Int]) {
    for v in row.iter_mut() {
        *v = -std::mem::take(v);
    }
}

/// Index of the first nonzero entry, if any.
pub fn first_non_zero(row: &[Int]) -> Option<usize> {
    row.iter().position(|v| !v.is_zero())
}

/// True if `a` is the exact elementwise negation of `b`.
pub fn is_neg(a: &[Int], b: &[Int]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| *x == -y)
}

/// `dst = m1 * a + m2 * b`, elementwise.
pub fn combine(dst: &mut [Int], m1: &Int, a: &[Int], m2: &Int, b: &[Int]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(dst.len(), a.len());
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = m1 * x + m2 * y;
    }
}

/// Eliminate position `pos` from `dst` using `src`, which must be nonzero there.
///
/// `dst` is only ever multiplied by a positive factor, so an inequality row
/// stays an inequality. `src` may be scaled by any sign and must therefore be
/// an equality unless the caller has already checked that the signs at `pos`
/// are opposite.
pub fn elim(dst: &mut [Int], src: &[Int], pos: usize) {
    if dst[pos].is_zero() {
        return;
    }
    let g = dst[pos].gcd(&src[pos]);
    let mut m_src = &dst[pos] / &g;
    let mut m_dst = &src[pos] / &g;
    if m_dst.is_negative() {
        m_dst = -m_dst;
    } else {
        m_src = -m_src;
    }
    for (d, s) in dst.iter_mut().zip(src) {
        *d = &m_dst * &*d + &m_src * s;
    }
}

/// Greatest common divisor of the absolute values of all entries (0 if all zero).
pub fn gcd(row: &[Int]) -> Int {
    row.iter().fold(Int::zero(), |acc, v| acc.gcd(v))
}

/// Divide every entry by `g`, which must divide all of them exactly.
pub fn scale_down(row: &mut [Int], g: &Int) {
    for v in row.iter_mut() {
        *v = &*v / g;
    }
}

/// Evaluate `row[0] + sum(row[1 + k] * point[k])`.
pub fn eval(row: &[Int], point: &[Int]) -> Int {
    debug_assert_eq!(row.len(), 1 + point.len());
    row[1..].iter().zip(point).fold(row[0].clone(), |acc, (c, x)| acc + c * x)
}

/// Build a row from small integers.
pub fn from_i64(values: &[i64]) -> Vec<Int> {
    values.iter().map(|&v| Int::from(v)).collect()
}

/// Floor of `a / b` for positive `b`.
pub fn floor_div(a: &Int, b: &Int) -> Int {
    a.div_floor(b)
}
