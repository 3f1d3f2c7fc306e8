//! Bounds on a single dimension.
//!
//! A constraint bounds dimension `d` from below if its coefficient at `d` is
//! positive and from above if it is negative. This module recognizes when a
//! dimension is pinned to a single value and enumerates the pairs of bounds
//! that can be simultaneously active, each with the region of the remaining
//! dimensions in which that pair is the tightest one.

use crate::polyhedral::basic_map::{BasicMap, BasicSet};
use crate::polyhedral::constraint::{Constraint, ConstraintKind, Enumeration};
use crate::polyhedral::space::DimType;
use crate::utils::errors::{PolyError, PolyResult};
use crate::utils::seq::{self, Int};
use log::{debug, trace};
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::ControlFlow;

/// One active (lower, upper) combination handed to a bound-pair callback.
///
/// `lower` and `upper` are `None` when the dimension has no bound on that
/// side. When the dimension is fixed by an equality both hold that same
/// equality. `context` ranges over every dimension except the target one.
#[derive(Debug, Clone)]
pub struct BoundPair {
    /// Active lower bound
    pub lower: Option<Constraint>,
    /// Active upper bound
    pub upper: Option<Constraint>,
    /// Where this pair is the tightest one
    pub context: BasicSet,
}

impl fmt::Display for BoundPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |c: &Option<Constraint>| match c {
            Some(c) => c.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "lower: {}, upper: {}, context: {}",
            show(&self.lower),
            show(&self.upper),
            self.context
        )
    }
}

/// Column of (dim_type, pos), checked against the dimension count.
fn column(bmap: &BasicMap, dim_type: DimType, pos: usize) -> PolyResult<usize> {
    PolyError::check_pos(dim_type, pos, bmap.dim(dim_type))?;
    Ok(bmap.offset(dim_type) + pos)
}

fn suffix_is_zero(row: &[Int], col: usize) -> bool {
    seq::first_non_zero(&row[col + 1..]).is_none()
}

impl BasicMap {
    /// Find an equality that fixes dimension `pos` of `dim_type` in terms of
    /// the dimensions before it.
    pub fn has_defining_equality(
        &self,
        dim_type: DimType,
        pos: usize,
    ) -> PolyResult<Option<Constraint>> {
        let col = column(self, dim_type, pos)?;
        let found = self
            .equalities()
            .position(|r| !r[col].is_zero() && suffix_is_zero(r, col));
        found
            .map(|k| Constraint::new(self.clone(), ConstraintKind::Equality, k))
            .transpose()
    }

    /// Find a pair of opposite inequalities `c d + f >= 0` and
    /// `-c d - f + m >= 0` with `|m| < |c|`, which leave exactly one integer
    /// value for the dimension. Returns `(lower, upper)`.
    ///
    /// Rows with a unit coefficient are skipped, since a tight unit pair is
    /// already an equality after simplification.
    pub fn has_defining_inequalities(
        &self,
        dim_type: DimType,
        pos: usize,
    ) -> PolyResult<Option<(Constraint, Constraint)>> {
        let col = column(self, dim_type, pos)?;
        for i in 0..self.n_ineq() {
            let ri = self.ineq(i);
            let c = &ri[col];
            if c.is_zero() || c.abs().is_one() || !suffix_is_zero(ri, col) {
                continue;
            }
            for j in i + 1..self.n_ineq() {
                let rj = self.ineq(j);
                if !seq::is_neg(&ri[1..], &rj[1..]) {
                    continue;
                }
                let m = &ri[0] + &rj[0];
                if m.abs() >= c.abs() {
                    continue;
                }
                let (l, u) = if c.is_positive() { (i, j) } else { (j, i) };
                let lower = Constraint::new(self.clone(), ConstraintKind::Inequality, l)?;
                let upper = Constraint::new(self.clone(), ConstraintKind::Inequality, u)?;
                return Ok(Some((lower, upper)));
            }
        }
        Ok(None)
    }

    /// Call `f` once for every combination of an active lower bound and an
    /// active upper bound on dimension `pos` of `dim_type`.
    ///
    /// Each call receives the region of the remaining dimensions where that
    /// combination is the tightest. Ties between equal bounds go to the
    /// bound that appears first, so the regions are pairwise disjoint and
    /// together cover the projection of the basic set. Combinations whose
    /// region is empty are skipped.
    ///
    /// If an equality involves the dimension, `f` is called exactly once with
    /// that equality as both bounds and the basic set with the dimension
    /// projected out as context. If there are no bounds on one side, that
    /// side is `None`.
    ///
    /// Only parameter and set dimensions of a set can be targeted.
    pub fn foreach_bound_pair<F>(
        &self,
        dim_type: DimType,
        pos: usize,
        mut f: F,
    ) -> PolyResult<Enumeration>
    where
        F: FnMut(BoundPair) -> ControlFlow<()>,
    {
        if !matches!(dim_type, DimType::Param | DimType::Out) {
            return Err(PolyError::invalid_argument(format!(
                "bound pairs are only defined for param and set dimensions, not {}",
                dim_type
            )));
        }
        if !self.is_set() {
            return Err(PolyError::invalid_argument("bound pairs require a set space"));
        }
        let col = column(self, dim_type, pos)?;

        let fixed = self.equalities().position(|r| !r[col].is_zero());
        if let Some(k) = fixed {
            debug!("{} {} is fixed by equality {}", dim_type, pos, k);
            let eq = Constraint::new(self.clone(), ConstraintKind::Equality, k)?;
            let context = self.clone().remove_dims(dim_type, pos, 1)?;
            let pair = BoundPair { lower: Some(eq.clone()), upper: Some(eq), context };
            return Ok(Enumeration::from_flow(f(pair)));
        }

        let n_lower = self.inequalities().filter(|r| r[col].is_positive()).count();
        let n_upper = self.inequalities().filter(|r| r[col].is_negative()).count();
        debug!(
            "{} {} has {} lower and {} upper bounds",
            dim_type, pos, n_lower, n_upper
        );

        let mut context = self.clone();
        for i in (0..context.n_ineq()).rev() {
            if !context.ineq(i)[col].is_zero() {
                context.drop_inequality(i)?;
            }
        }
        let context = context.drop_dims(dim_type, pos, 1)?;

        let bounds = Bounds { bset: self, col, n_lower, n_upper };
        match (n_lower, n_upper) {
            (0, 0) => {
                let pair = BoundPair { lower: None, upper: None, context: context.finalize() };
                Ok(Enumeration::from_flow(f(pair)))
            }
            (0, _) => bounds.foreach_upper_bound(&context, &mut f),
            (_, 0) => bounds.foreach_lower_bound(&context, &mut f),
            _ => bounds.foreach_pair(&context, &mut f),
        }
    }
}

/// Append to `context` the inequality stating that the bound on column `col`
/// implied by `a` is at least (or, if `strict`, greater than) the one implied
/// by `b`.
///
/// `a` and `b` range over all columns of the bounded set, `context` over all
/// but `col`. For two lower bounds this makes `a` the active one, for two
/// upper bounds `b`, and for a lower `a` and an upper `b` it states that the
/// range between them is not empty.
fn add_larger_bound_constraint(
    context: &mut BasicSet,
    a: &[Int],
    b: &[Int],
    col: usize,
    strict: bool,
) -> PolyResult<()> {
    if a.len() != context.total_dim() + 2 || b.len() != a.len() {
        return Err(PolyError::invalid_argument(format!(
            "bound rows of length {} and {} do not fit a context with {} columns",
            a.len(),
            b.len(),
            context.total_dim()
        )));
    }
    let t = -&b[col];
    let k = context.alloc_inequality()?;
    let row = context.ineq_mut(k);
    seq::combine(&mut row[..col], &t, &a[..col], &a[col], &b[..col]);
    seq::combine(&mut row[col..], &t, &a[col + 1..], &a[col], &b[col + 1..]);
    if strict {
        row[0] -= Int::one();
    }
    Ok(())
}

/// The bounded set, the target column and the bound counts.
struct Bounds<'a> {
    bset: &'a BasicSet,
    col: usize,
    n_lower: usize,
    n_upper: usize,
}

impl Bounds<'_> {
    /// `context` restricted to where upper bound `u` is the smallest one.
    fn set_smallest_upper_bound(&self, context: &BasicSet, u: usize) -> PolyResult<BasicSet> {
        let mut context = context.clone();
        context.extend_constraints(0, self.n_upper.saturating_sub(1))?;
        let upper = self.bset.ineq(u);
        for (j, row) in self.bset.inequalities().enumerate() {
            if j == u || !row[self.col].is_negative() {
                continue;
            }
            add_larger_bound_constraint(&mut context, row, upper, self.col, j > u)?;
        }
        Ok(context.simplify().finalize())
    }

    /// `context` restricted to where lower bound `l` is the largest one.
    fn set_largest_lower_bound(&self, context: &BasicSet, l: usize) -> PolyResult<BasicSet> {
        let mut context = context.clone();
        context.extend_constraints(0, self.n_lower.saturating_sub(1))?;
        let lower = self.bset.ineq(l);
        for (j, row) in self.bset.inequalities().enumerate() {
            if j == l || !row[self.col].is_positive() {
                continue;
            }
            add_larger_bound_constraint(&mut context, lower, row, self.col, j > l)?;
        }
        Ok(context.simplify().finalize())
    }

    fn bound(&self, i: usize) -> PolyResult<Constraint> {
        Constraint::new(self.bset.clone(), ConstraintKind::Inequality, i)
    }

    fn foreach_upper_bound<F>(&self, context: &BasicSet, f: &mut F) -> PolyResult<Enumeration>
    where
        F: FnMut(BoundPair) -> ControlFlow<()>,
    {
        for u in 0..self.bset.n_ineq() {
            if self.bset.ineq(u)[self.col].is_zero() {
                continue;
            }
            let context_u = self.set_smallest_upper_bound(context, u)?;
            if context_u.is_empty()? {
                trace!("upper bound {} is never the smallest", u);
                continue;
            }
            let pair = BoundPair { lower: None, upper: Some(self.bound(u)?), context: context_u };
            if f(pair).is_break() {
                return Ok(Enumeration::Stopped);
            }
        }
        Ok(Enumeration::Exhausted)
    }

    fn foreach_lower_bound<F>(&self, context: &BasicSet, f: &mut F) -> PolyResult<Enumeration>
    where
        F: FnMut(BoundPair) -> ControlFlow<()>,
    {
        for l in 0..self.bset.n_ineq() {
            if self.bset.ineq(l)[self.col].is_zero() {
                continue;
            }
            let context_l = self.set_largest_lower_bound(context, l)?;
            if context_l.is_empty()? {
                trace!("lower bound {} is never the largest", l);
                continue;
            }
            let pair = BoundPair { lower: Some(self.bound(l)?), upper: None, context: context_l };
            if f(pair).is_break() {
                return Ok(Enumeration::Stopped);
            }
        }
        Ok(Enumeration::Exhausted)
    }

    fn foreach_pair<F>(&self, context: &BasicSet, f: &mut F) -> PolyResult<Enumeration>
    where
        F: FnMut(BoundPair) -> ControlFlow<()>,
    {
        let n = self.bset.n_ineq();
        for i in 0..n {
            if !self.bset.ineq(i)[self.col].is_positive() {
                continue;
            }
            let context_i = self.set_largest_lower_bound(context, i)?;
            if context_i.is_empty()? {
                trace!("lower bound {} is never the largest", i);
                continue;
            }
            for j in 0..n {
                if !self.bset.ineq(j)[self.col].is_negative() {
                    continue;
                }
                let mut context_j = self.set_smallest_upper_bound(&context_i, j)?;
                context_j.extend_constraints(0, 1)?;
                add_larger_bound_constraint(
                    &mut context_j,
                    self.bset.ineq(i),
                    self.bset.ineq(j),
                    self.col,
                    false,
                )?;
                let context_j = context_j.simplify().finalize();
                if context_j.is_empty()? {
                    trace!("bounds {} and {} are never active together", i, j);
                    continue;
                }
                let pair = BoundPair {
                    lower: Some(self.bound(i)?),
                    upper: Some(self.bound(j)?),
                    context: context_j,
                };
                if f(pair).is_break() {
                    return Ok(Enumeration::Stopped);
                }
            }
        }
        Ok(Enumeration::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedral::space::Space;
    use crate::utils::seq::from_i64;

    fn set(n_param: usize, n_dim: usize, eqs: &[&[i64]], ineqs: &[&[i64]]) -> BasicSet {
        BasicMap::from_rows(
            Space::set(n_param, n_dim),
            eqs.iter().map(|r| from_i64(r)).collect(),
            ineqs.iter().map(|r| from_i64(r)).collect(),
        )
        .unwrap()
        .finalize()
    }

    fn collect(bset: &BasicSet, dim_type: DimType, pos: usize) -> Vec<BoundPair> {
        let mut pairs = Vec::new();
        let done = bset
            .foreach_bound_pair(dim_type, pos, |pair| {
                pairs.push(pair);
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(done, Enumeration::Exhausted);
        pairs
    }

    fn index(c: &Option<Constraint>) -> Option<usize> {
        c.as_ref().map(|c| c.index())
    }

    #[test]
    fn test_single_lower_and_upper() {
        // { [d] : d >= 0 and d <= 10 }
        let bset = set(0, 1, &[], &[&[0, 1], &[10, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(pairs.len(), 1);
        let pair = &pairs[0];
        assert_eq!(pair.lower.as_ref().unwrap().row(), &from_i64(&[0, 1])[..]);
        assert_eq!(pair.upper.as_ref().unwrap().row(), &from_i64(&[10, -1])[..]);
        assert_eq!(pair.context.space(), &Space::set(0, 0));
        assert_eq!(pair.context.n_eq() + pair.context.n_ineq(), 0);
        assert!(pair.context.is_final());
    }

    #[test]
    fn test_dominated_lower_bound_is_skipped() {
        // { [d] : d >= 0 and d >= 5 and d <= 10 }
        let bset = set(0, 1, &[], &[&[0, 1], &[-5, 1], &[10, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(index(&pairs[0].lower), Some(1));
        assert_eq!(index(&pairs[0].upper), Some(2));
    }

    #[test]
    fn test_unconstrained_dimension() {
        // { [d0, d1] : d0 >= 0 }, target d1
        let bset = set(0, 2, &[], &[&[0, 1, 0]]);
        let pairs = collect(&bset, DimType::SET, 1);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].lower.is_none());
        assert!(pairs[0].upper.is_none());
        let context = &pairs[0].context;
        assert_eq!(context.space(), &Space::set(0, 1));
        assert_eq!(context.n_ineq(), 1);
        assert_eq!(context.ineq(0), &from_i64(&[0, 1])[..]);
        assert!(context.is_final());
    }

    #[test]
    fn test_equality_short_circuit() {
        // { [d0, d1] : d1 = 2 d0 and 0 <= d1 <= 6 }, target d1
        let bset = set(0, 2, &[&[0, 2, -1]], &[&[0, 0, 1], &[6, 0, -1]]);
        let pairs = collect(&bset, DimType::SET, 1);
        assert_eq!(pairs.len(), 1);
        let pair = &pairs[0];
        assert_eq!(pair.lower, pair.upper);
        assert!(pair.lower.as_ref().unwrap().is_equality());
        assert_eq!(pair.context.space(), &Space::set(0, 1));
        assert!(pair.context.contains(&from_i64(&[3])).unwrap());
        assert!(!pair.context.contains(&from_i64(&[4])).unwrap());
    }

    #[test]
    fn test_upper_bounds_only() {
        // [p0] -> { [d] : d <= p0 and d <= 5 }
        let bset = set(1, 1, &[], &[&[0, 1, -1], &[5, 0, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.lower.is_none()));
        assert_eq!(index(&pairs[0].upper), Some(0));
        assert_eq!(index(&pairs[1].upper), Some(1));
        // p0 = 5 ties; the earlier bound loses the tie
        assert!(pairs[0].context.contains(&from_i64(&[4])).unwrap());
        assert!(!pairs[0].context.contains(&from_i64(&[5])).unwrap());
        assert!(pairs[1].context.contains(&from_i64(&[5])).unwrap());
        assert!(!pairs[1].context.contains(&from_i64(&[4])).unwrap());
    }

    #[test]
    fn test_lower_bounds_only() {
        // [p0] -> { [d] : d >= p0 and d >= 0 }
        let bset = set(1, 1, &[], &[&[0, -1, 1], &[0, 0, 1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.upper.is_none()));
        for p0 in -3..=3 {
            let covering = pairs
                .iter()
                .filter(|p| p.context.contains(&from_i64(&[p0])).unwrap())
                .count();
            assert_eq!(covering, 1, "p0 = {}", p0);
        }
        assert!(pairs[0].context.contains(&from_i64(&[1])).unwrap());
        assert!(pairs[1].context.contains(&from_i64(&[-1])).unwrap());
    }

    #[test]
    fn test_parameter_target() {
        // [p0] -> { [d] : p0 >= 0 and p0 <= d }, target p0
        let bset = set(1, 1, &[], &[&[0, 1, 0], &[0, -1, 1]]);
        let pairs = collect(&bset, DimType::Param, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(index(&pairs[0].lower), Some(0));
        assert_eq!(index(&pairs[0].upper), Some(1));
        assert_eq!(pairs[0].context.space(), &Space::set(0, 1));
        assert!(pairs[0].context.contains(&from_i64(&[0])).unwrap());
        assert!(!pairs[0].context.contains(&from_i64(&[-1])).unwrap());
    }

    #[test]
    fn test_regions_partition_projection() {
        // [p0] -> { [d] : d >= 0 and d >= p0 and d <= 10 and d <= 2 p0 }
        let bset = set(1, 1, &[], &[&[0, 0, 1], &[0, -1, 1], &[10, 0, -1], &[0, 2, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert!(pairs.len() <= 4);
        for pair in &pairs {
            assert!(!pair.context.is_empty().unwrap());
        }
        for p0 in -5..15 {
            let feasible = (-30..30).any(|d| bset.contains(&from_i64(&[p0, d])).unwrap());
            let covering = pairs
                .iter()
                .filter(|p| p.context.contains(&from_i64(&[p0])).unwrap())
                .count();
            assert_eq!(covering, feasible as usize, "p0 = {}", p0);
        }
    }

    #[test]
    fn test_equal_bounds_counted_once() {
        // { [d] : d >= 0 and d >= 0 and d <= 3 }
        let bset = set(0, 1, &[], &[&[0, 1], &[0, 1], &[3, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(index(&pairs[0].lower), Some(1));
    }

    #[test]
    fn test_callback_stops() {
        let bset = set(1, 1, &[], &[&[0, 1, -1], &[5, 0, -1]]);
        let mut calls = 0;
        let done = bset
            .foreach_bound_pair(DimType::SET, 0, |_| {
                calls += 1;
                ControlFlow::Break(())
            })
            .unwrap();
        assert_eq!(done, Enumeration::Stopped);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_rejected_targets() {
        let bset = set(1, 1, &[], &[&[0, 0, 1]]);
        let ok = |_: BoundPair| -> ControlFlow<()> { ControlFlow::Continue(()) };
        assert!(matches!(
            bset.foreach_bound_pair(DimType::SET, 1, ok),
            Err(PolyError::OutOfRange { pos: 1, n: 1, .. })
        ));
        assert!(matches!(
            bset.foreach_bound_pair(DimType::Div, 0, ok),
            Err(PolyError::InvalidArgument(_))
        ));
        let map = BasicMap::universe(Space::map(0, 1, 1));
        assert!(matches!(
            map.foreach_bound_pair(DimType::Out, 0, ok),
            Err(PolyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_defining_equality() {
        // { [d0, d1] : d1 = d0 + 1 }
        let bset = set(0, 2, &[&[1, 1, -1]], &[]);
        let c = bset.has_defining_equality(DimType::SET, 1).unwrap().unwrap();
        assert!(c.is_equality());
        assert_eq!(c.index(), 0);
        // d0 is not defined: the row also involves the later d1
        assert!(bset.has_defining_equality(DimType::SET, 0).unwrap().is_none());
        assert!(bset.has_defining_equality(DimType::SET, 2).is_err());
    }

    #[test]
    fn test_defining_equality_first_match() {
        // { [d0, d1] : d0 = 3 and 2 d0 = 6 }
        let bset = set(0, 2, &[&[-3, 1, 0], &[-6, 2, 0]], &[]);
        let c = bset.has_defining_equality(DimType::SET, 0).unwrap().unwrap();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_defining_inequalities() {
        // [n] -> { [d] : 3 d - n >= 0 and -3 d + n + 2 >= 0 }
        let bset = set(1, 1, &[], &[&[0, -1, 3], &[2, 1, -3]]);
        let (lower, upper) = bset.has_defining_inequalities(DimType::SET, 0).unwrap().unwrap();
        assert_eq!(lower.index(), 0);
        assert_eq!(upper.index(), 1);

        // Same pair listed upper first
        let bset = set(1, 1, &[], &[&[2, 1, -3], &[0, -1, 3]]);
        let (lower, upper) = bset.has_defining_inequalities(DimType::SET, 0).unwrap().unwrap();
        assert_eq!(lower.index(), 1);
        assert_eq!(upper.index(), 0);
    }

    #[test]
    fn test_defining_inequalities_not_tight() {
        // 3 d >= n and 3 d <= n + 3 leaves two values
        let bset = set(1, 1, &[], &[&[0, -1, 3], &[3, 1, -3]]);
        assert!(bset.has_defining_inequalities(DimType::SET, 0).unwrap().is_none());
        // unit coefficients never qualify
        let bset = set(0, 1, &[], &[&[0, 1], &[0, -1]]);
        assert!(bset.has_defining_inequalities(DimType::SET, 0).unwrap().is_none());
    }

    #[test]
    fn test_no_pair_over_integer_empty_parameters() {
        // [p0, p1] -> { [d] : 0 <= d <= 10 } where the parameter region
        // 0 <= p0, p1 <= 6, 4p0 + 4p1 >= 3, 5p1 + 3 >= 4p0, 3p0 >= 2p1 + 9
        // has rational points but no integer ones
        let bset = set(
            2,
            1,
            &[],
            &[
                &[0, 1, 0, 0],
                &[6, -1, 0, 0],
                &[0, 0, 1, 0],
                &[6, 0, -1, 0],
                &[-3, 4, 4, 0],
                &[3, -4, 5, 0],
                &[-9, 3, -2, 0],
                &[0, 0, 0, 1],
                &[10, 0, 0, -1],
            ],
        );
        let mut calls = 0;
        let done = bset
            .foreach_bound_pair(DimType::SET, 0, |_| {
                calls += 1;
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(done, Enumeration::Exhausted);
        assert_eq!(calls, 0);

        // Without 3p0 >= 2p1 + 9 the region holds (0, 1) and the pair is active
        let looser = set(
            2,
            1,
            &[],
            &[
                &[0, 1, 0, 0],
                &[6, -1, 0, 0],
                &[0, 0, 1, 0],
                &[6, 0, -1, 0],
                &[-3, 4, 4, 0],
                &[3, -4, 5, 0],
                &[0, 0, 0, 1],
                &[10, 0, 0, -1],
            ],
        );
        let pairs = collect(&looser, DimType::SET, 0);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].context.contains(&from_i64(&[0, 1])).unwrap());
    }

    #[test]
    fn test_bound_pair_display() {
        let bset = set(0, 1, &[], &[&[0, 1], &[10, -1]]);
        let pairs = collect(&bset, DimType::SET, 0);
        assert_eq!(
            pairs[0].to_string(),
            "lower: d0 >= 0, upper: -d0 + 10 >= 0, context: { [] }"
        );
    }
}
