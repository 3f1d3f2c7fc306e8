//! Polyhedral operations: projection, intersection, emptiness.
//!
//! Projection uses an equality to substitute a variable away when one
//! mentions it, and Fourier-Motzkin elimination otherwise. All combinations
//! are exact integer cross-multiplications. The emptiness test is exact over
//! the integers: it refines Fourier-Motzkin with dark shadows and splinters.

use crate::polyhedral::basic_map::{BasicMap, BasicSet};
use crate::polyhedral::space::DimType;
use crate::utils::errors::{PolyError, PolyResult};
use crate::utils::seq::{self, Int};
use log::{trace, warn};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

impl BasicMap {
    /// Eliminate the variables in columns `first..first + n` of the row
    /// layout (1-based, after the constant). The columns stay in place but
    /// every constraint ends up with a zero coefficient there.
    pub fn eliminate_vars(mut self, first: usize, n: usize) -> PolyResult<Self> {
        if first == 0 || first + n > 1 + self.total_dim() {
            return Err(PolyError::invalid_argument(format!(
                "columns {}..{} outside 1..={}",
                first,
                first + n,
                self.total_dim()
            )));
        }
        for col in (first..first + n).rev() {
            if self.is_marked_empty() {
                break;
            }
            self.eliminate_column(col)?;
            self = self.simplify();
        }
        Ok(self)
    }

    /// Project out `n` dimensions of `dim_type` starting at `first`.
    pub fn remove_dims(self, dim_type: DimType, first: usize, n: usize) -> PolyResult<Self> {
        let count = self.dim(dim_type);
        if first + n > count {
            return Err(PolyError::OutOfRange { dim_type, pos: first + n, n: count });
        }
        if n == 0 {
            return Ok(self);
        }
        let col = self.offset(dim_type) + first;
        let bmap = self.eliminate_vars(col, n)?;
        Ok(bmap.drop_dims(dim_type, first, n)?.simplify().finalize())
    }

    /// Intersect with another basic map over the same space.
    ///
    /// The divs of `other` are appended after those of `self`.
    pub fn intersect(mut self, other: &BasicMap) -> PolyResult<Self> {
        if self.space() != other.space() {
            return Err(PolyError::invalid_argument(format!(
                "cannot intersect {} with {}",
                self.space(),
                other.space()
            )));
        }
        if other.is_marked_empty() {
            let mut empty = self;
            empty.set_to_empty();
            return Ok(empty);
        }
        let n_base = 1 + self.space().total();
        let n_div1 = self.n_div();
        self.extend_constraints(other.n_eq(), other.n_ineq())?;
        for _ in 0..other.n_div() {
            self.alloc_div()?;
        }
        // Maps a row of `other` onto this layout: same prefix, then a gap for
        // our own divs, then the divs of `other`.
        let total = self.total_dim();
        let remap = |src: &[Int]| -> Vec<Int> {
            let mut row = vec![Int::zero(); 1 + total];
            row[..n_base].clone_from_slice(&src[..n_base]);
            row[n_base + n_div1..].clone_from_slice(&src[n_base..]);
            row
        };
        for k in 0..other.n_div() {
            let src = other.div_row(k);
            let mut row = vec![src[0].clone()];
            row.extend(remap(&src[1..]));
            let pos = n_div1 + k;
            seq::cpy(&mut self.data_mut().div[pos], &row);
        }
        for r in other.equalities() {
            self.add_equality(remap(r))?;
        }
        for r in other.inequalities() {
            self.add_inequality(remap(r))?;
        }
        Ok(self.simplify().finalize())
    }

    /// Decide whether the basic map contains no integer points.
    ///
    /// Divs count as existentially quantified integer variables, bound only
    /// by the rows that mention them. Equalities are solved exactly through
    /// unimodular column changes. A variable is then eliminated from the
    /// inequalities: directly when every lower or every upper bound on it has
    /// a unit coefficient, and otherwise by checking the real shadow, the
    /// dark shadow and finally each splinter (one equality per lower bound
    /// and residue). If the inequalities grow past
    /// [`crate::Options::fm_row_limit`] the test stops and reports the basic
    /// map as non-empty.
    pub fn is_empty(&self) -> PolyResult<bool> {
        if self.is_marked_empty() {
            return Ok(true);
        }
        let limit = self.options().fm_row_limit;
        match integer_point_exists(self.clone(), limit)? {
            Some(found) => Ok(!found),
            None => {
                warn!("emptiness test gave up past {} inequalities", limit);
                Ok(false)
            }
        }
    }

    /// Zero out column `col` in every constraint, keeping the rational
    /// projection of the solution set unchanged.
    fn eliminate_column(&mut self, col: usize) -> PolyResult<()> {
        let found = self.equalities().position(|r| !r[col].is_zero());
        if let Some(k) = found {
            let pivot = self.eq(k).to_vec();
            self.drop_equality(k)?;
            for i in 0..self.n_eq() {
                seq::elim(self.eq_mut(i), &pivot, col);
            }
            for i in 0..self.n_ineq() {
                seq::elim(self.ineq_mut(i), &pivot, col);
            }
            return Ok(());
        }
        self.fourier_motzkin(col, false)
    }

    /// Replace every inequality mentioning `col` by the combinations of each
    /// lower bound with each upper bound. With `dark` set, each combination
    /// of coefficients `a` and `b` is tightened by `(a - 1)(b - 1)`, which
    /// keeps only the part where an integer fits between the two bounds.
    fn fourier_motzkin(&mut self, col: usize, dark: bool) -> PolyResult<()> {
        let (mut lower, mut upper) = (Vec::new(), Vec::new());
        for (i, r) in self.inequalities().enumerate() {
            if r[col].is_positive() {
                lower.push(i);
            } else if r[col].is_negative() {
                upper.push(i);
            }
        }
        if lower.is_empty() && upper.is_empty() {
            return Ok(());
        }
        trace!(
            "Fourier-Motzkin on column {}: {} lower x {} upper{}",
            col,
            lower.len(),
            upper.len(),
            if dark { " (dark)" } else { "" }
        );
        let mut combined = Vec::new();
        combined.try_reserve(lower.len() * upper.len())?;
        for &l in &lower {
            for &u in &upper {
                let (a, b) = (self.ineq(l), self.ineq(u));
                let mut row = vec![Int::zero(); a.len()];
                seq::combine(&mut row, &-&b[col], a, &a[col], b);
                if dark {
                    row[0] -= (&a[col] - Int::one()) * (-&b[col] - Int::one());
                }
                combined.push(row);
            }
        }
        let mut involved: Vec<usize> = lower.into_iter().chain(upper).collect();
        involved.sort_unstable();
        for &i in involved.iter().rev() {
            self.drop_inequality(i)?;
        }
        for row in combined {
            self.add_inequality(row)?;
        }
        Ok(())
    }

    /// Apply `x_k := x_k - q * x_j` to every row: column `j` loses `q` times
    /// column `k`. The change is unimodular, so integer points map onto
    /// integer points.
    fn shift_column(&mut self, j: usize, k: usize, q: &Int) {
        for i in 0..self.n_eq() {
            let row = self.eq_mut(i);
            let d = q * &row[k];
            row[j] -= d;
        }
        for i in 0..self.n_ineq() {
            let row = self.ineq_mut(i);
            let d = q * &row[k];
            row[j] -= d;
        }
    }

    /// Remove equality 0 by solving it over the integers.
    ///
    /// Columns are changed until the equality has a coefficient of magnitude
    /// one, which is then substituted into every other row. The column it was
    /// solved for ends up zero everywhere. Marks the basic map empty if the
    /// equality has no integer solution.
    fn solve_first_equality(&mut self) -> PolyResult<()> {
        let mut eq = self.eq(0).to_vec();
        self.drop_equality(0)?;
        loop {
            let Some(k) = (1..eq.len())
                .filter(|&j| !eq[j].is_zero())
                .min_by_key(|&j| eq[j].abs())
            else {
                if !eq[0].is_zero() {
                    self.set_to_empty();
                }
                return Ok(());
            };
            let g = seq::gcd(&eq[1..]);
            if !(&eq[0] % &g).is_zero() {
                self.set_to_empty();
                return Ok(());
            }
            seq::scale_down(&mut eq, &g);
            if eq[k].abs().is_one() {
                for i in 0..self.n_eq() {
                    seq::elim(self.eq_mut(i), &eq, k);
                }
                for i in 0..self.n_ineq() {
                    seq::elim(self.ineq_mut(i), &eq, k);
                }
                return Ok(());
            }
            // Reduce every other coefficient modulo the smallest one.
            let pivot = eq[k].clone();
            for j in 1..eq.len() {
                if j == k || eq[j].is_zero() {
                    continue;
                }
                let q = eq[j].div_floor(&pivot);
                let d = &q * &eq[k];
                eq[j] -= d;
                self.shift_column(j, k, &q);
            }
        }
    }
}

/// Search for an integer point of `work`.
///
/// `None` means the search gave up because an intermediate system held more
/// than `limit` inequalities.
fn integer_point_exists(mut work: BasicMap, limit: usize) -> PolyResult<Option<bool>> {
    loop {
        work = work.simplify();
        if work.is_marked_empty() {
            return Ok(Some(false));
        }
        if work.n_eq() > 0 {
            work.solve_first_equality()?;
            continue;
        }
        if work.n_ineq() > limit {
            return Ok(None);
        }
        let Some(choice) = pick_column(&work) else {
            return Ok(Some(true));
        };
        let col = choice.col;
        if choice.one_sided {
            // Such a variable can always be pushed far enough out.
            for i in (0..work.n_ineq()).rev() {
                if !work.ineq(i)[col].is_zero() {
                    work.drop_inequality(i)?;
                }
            }
            continue;
        }
        if choice.exact {
            work.fourier_motzkin(col, false)?;
            continue;
        }

        let mut real = work.clone();
        real.fourier_motzkin(col, false)?;
        match integer_point_exists(real, limit)? {
            Some(false) => return Ok(Some(false)),
            None => return Ok(None),
            Some(true) => {}
        }
        let mut dark = work.clone();
        dark.fourier_motzkin(col, true)?;
        let mut gave_up = match integer_point_exists(dark, limit)? {
            Some(true) => return Ok(Some(true)),
            Some(false) => false,
            None => true,
        };

        // Any point outside the dark shadow lies close to some lower bound.
        let max_upper = work
            .inequalities()
            .filter(|r| r[col].is_negative())
            .map(|r| -&r[col])
            .max()
            .unwrap_or_else(Int::one);
        for l in 0..work.n_ineq() {
            let a = work.ineq(l)[col].clone();
            if !a.is_positive() {
                continue;
            }
            let top = (&max_upper * &a - &a - &max_upper).div_floor(&max_upper);
            let mut i = Int::zero();
            while i <= top {
                let mut splinter = work.clone();
                let mut row = work.ineq(l).to_vec();
                row[0] -= &i;
                splinter.add_equality(row)?;
                trace!("splinter on column {}: lower bound {} offset {}", col, l, i);
                match integer_point_exists(splinter, limit)? {
                    Some(true) => return Ok(Some(true)),
                    Some(false) => {}
                    None => gave_up = true,
                }
                i += 1;
            }
        }
        return Ok(if gave_up { None } else { Some(false) });
    }
}

/// The column the integer search eliminates next.
struct ColumnChoice {
    col: usize,
    /// Bounded on one side only.
    one_sided: bool,
    /// Every lower or every upper bound has a unit coefficient.
    exact: bool,
}

/// Pick a column of an equality-free system: a one-sided one if any, then
/// the exact one with the fewest bound pairs, then any with the fewest pairs.
fn pick_column(work: &BasicMap) -> Option<ColumnChoice> {
    let mut best: Option<(bool, usize, ColumnChoice)> = None;
    for col in 1..=work.total_dim() {
        let (mut n_lower, mut n_upper) = (0usize, 0usize);
        let (mut unit_lower, mut unit_upper) = (true, true);
        for r in work.inequalities() {
            let c = &r[col];
            if c.is_positive() {
                n_lower += 1;
                unit_lower &= c.is_one();
            } else if c.is_negative() {
                n_upper += 1;
                unit_upper &= c.abs().is_one();
            }
        }
        if n_lower == 0 && n_upper == 0 {
            continue;
        }
        if n_lower == 0 || n_upper == 0 {
            return Some(ColumnChoice { col, one_sided: true, exact: true });
        }
        let exact = unit_lower || unit_upper;
        let pairs = n_lower * n_upper;
        let better = match &best {
            None => true,
            Some((best_exact, best_pairs, _)) => {
                (exact && !best_exact) || (exact == *best_exact && pairs < *best_pairs)
            }
        };
        if better {
            best = Some((exact, pairs, ColumnChoice { col, one_sided: false, exact }));
        }
    }
    best.map(|(_, _, choice)| choice)
}

/// Compute the intersection of two basic maps.
pub fn intersect(a: &BasicMap, b: &BasicMap) -> PolyResult<BasicMap> {
    a.clone().intersect(b)
}

/// Project out set dimensions `dims` (local positions) of a basic set.
pub fn project_out(bset: &BasicSet, dims: &[usize]) -> PolyResult<BasicSet> {
    let mut sorted = dims.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut result = bset.clone();
    for &d in sorted.iter().rev() {
        result = result.remove_dims(DimType::SET, d, 1)?;
    }
    Ok(result)
}

/// Check if a basic map is empty.
pub fn is_empty(bmap: &BasicMap) -> PolyResult<bool> {
    bmap.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedral::space::Space;
    use crate::polyhedral::div::Div;
    use crate::utils::seq::from_i64;
    use crate::Options;

    fn triangle() -> BasicSet {
        // { [d0, d1] : d0 >= 0 and d1 >= d0 and d1 <= 5 }
        BasicMap::from_rows(
            Space::set(0, 2),
            vec![],
            vec![from_i64(&[0, 1, 0]), from_i64(&[0, -1, 1]), from_i64(&[5, 0, -1])],
        )
        .unwrap()
    }

    #[test]
    fn test_project_out_fourier_motzkin() {
        let proj = project_out(&triangle(), &[1]).unwrap();
        assert_eq!(proj.space(), &Space::set(0, 1));
        assert!(proj.contains(&from_i64(&[0])).unwrap());
        assert!(proj.contains(&from_i64(&[5])).unwrap());
        assert!(!proj.contains(&from_i64(&[6])).unwrap());
        assert!(!proj.contains(&from_i64(&[-1])).unwrap());
        assert!(proj.is_final());
    }

    #[test]
    fn test_remove_dims_with_equality() {
        // { [d0, d1] : d1 = 2 d0 and 0 <= d1 <= 6 } projected onto d0
        let bset = BasicMap::from_rows(
            Space::set(0, 2),
            vec![from_i64(&[0, 2, -1])],
            vec![from_i64(&[0, 0, 1]), from_i64(&[6, 0, -1])],
        )
        .unwrap();
        let proj = bset.remove_dims(DimType::SET, 1, 1).unwrap();
        assert!(proj.contains(&from_i64(&[3])).unwrap());
        assert!(!proj.contains(&from_i64(&[4])).unwrap());
        assert!(!proj.contains(&from_i64(&[-1])).unwrap());
    }

    #[test]
    fn test_is_empty() {
        assert!(!triangle().is_empty().unwrap());
        let mut bset = triangle();
        // d0 >= 6 contradicts d0 <= d1 <= 5
        bset.add_inequality(from_i64(&[-6, 1, 0])).unwrap();
        assert!(bset.is_empty().unwrap());
        assert!(is_empty(&BasicMap::empty(Space::set(0, 2))).unwrap());
    }

    #[test]
    fn test_is_empty_integer_tightening() {
        // 1 <= 3 d0 <= 2 has rational but no integer solutions
        let bset = BasicMap::from_rows(
            Space::set(0, 1),
            vec![],
            vec![from_i64(&[-1, 3]), from_i64(&[2, -3])],
        )
        .unwrap();
        assert!(bset.is_empty().unwrap());
    }

    #[test]
    fn test_is_empty_rationally_feasible_without_integer_point() {
        // { [x, y] : 0 <= x, y <= 6 and 4x + 4y >= 3 and 5y + 3 >= 4x and 3x >= 2y + 9 }
        let rows = [
            [0, 1, 0],
            [6, -1, 0],
            [0, 0, 1],
            [6, 0, -1],
            [-3, 4, 4],
            [3, -4, 5],
            [-9, 3, -2],
        ];
        let bset = BasicMap::from_rows(
            Space::set(0, 2),
            vec![],
            rows.iter().map(|r| from_i64(r)).collect(),
        )
        .unwrap();
        for x in 0..=6 {
            for y in 0..=6 {
                assert!(!bset.contains(&from_i64(&[x, y])).unwrap());
            }
        }
        assert!(bset.is_empty().unwrap());

        // Dropping 3x >= 2y + 9 admits (0, 1)
        let mut looser = bset.clone();
        looser.drop_inequality(6).unwrap();
        assert!(!looser.is_empty().unwrap());
    }

    #[test]
    fn test_is_empty_solves_equalities_over_integers() {
        // 3x + 5y = 1 only has solutions with x or y outside 0..=3
        let boxed = |lo: i64, hi: i64| {
            BasicMap::from_rows(
                Space::set(0, 2),
                vec![from_i64(&[-1, 3, 5])],
                vec![
                    from_i64(&[-lo, 1, 0]),
                    from_i64(&[hi, -1, 0]),
                    from_i64(&[-lo, 0, 1]),
                    from_i64(&[hi, 0, -1]),
                ],
            )
            .unwrap()
        };
        assert!(boxed(0, 3).is_empty().unwrap());
        // (2, -1) satisfies it
        assert!(!boxed(-3, 3).is_empty().unwrap());
    }

    #[test]
    fn test_is_empty_treats_divs_as_integers() {
        // { [d0] : exists e0 : d0 = 2 e0 + 1 and 2 <= d0 <= 2 }
        let mut bset = BasicMap::universe(Space::set(0, 1));
        bset.alloc_div().unwrap();
        bset.add_equality(from_i64(&[1, -1, 2])).unwrap();
        bset.add_inequality(from_i64(&[-2, 1, 0])).unwrap();
        bset.add_inequality(from_i64(&[2, -1, 0])).unwrap();
        assert!(bset.is_empty().unwrap());
    }

    #[test]
    fn test_is_empty_gives_up_past_limit() {
        let mut bset = BasicMap::universe(Space::set(0, 3)).with_options(Options::new().fm_row_limit(0));
        bset.add_inequality(from_i64(&[0, 1, 1, 0])).unwrap();
        bset.add_inequality(from_i64(&[0, 1, -1, 1])).unwrap();
        bset.add_inequality(from_i64(&[-1, -1, 0, 0])).unwrap();
        assert!(!bset.is_empty().unwrap());
    }

    #[test]
    fn test_intersect() {
        let a = triangle();
        let b = BasicMap::from_rows(Space::set(0, 2), vec![], vec![from_i64(&[-3, 1, 0])]).unwrap();
        let c = intersect(&a, &b).unwrap();
        assert!(c.contains(&from_i64(&[3, 4])).unwrap());
        assert!(!c.contains(&from_i64(&[2, 4])).unwrap());
        assert!(c.is_final());
    }

    #[test]
    fn test_intersect_space_mismatch() {
        let a = BasicMap::universe(Space::set(0, 2));
        let b = BasicMap::universe(Space::set(1, 1));
        assert!(matches!(intersect(&a, &b), Err(PolyError::InvalidArgument(_))));
    }

    #[test]
    fn test_intersect_appends_divs() {
        let a = triangle();
        let mut b = BasicMap::universe(Space::set(0, 2));
        let div = Div::new(Space::set(0, 2), 0, 2, from_i64(&[0, 1, 0])).unwrap();
        b.add_div(&div).unwrap();
        // 2 e0 = d0
        b.add_equality(from_i64(&[0, 1, 0, -2])).unwrap();
        let c = a.intersect(&b).unwrap();
        assert_eq!(c.n_div(), 1);
        assert_eq!(c.div(0).unwrap(), div_padded(&div));
        assert!(c.contains(&from_i64(&[2, 3, 1])).unwrap());
        assert!(!c.contains(&from_i64(&[1, 3, 0])).unwrap());
    }

    fn div_padded(div: &Div) -> Div {
        let mut num = div.numerator().to_vec();
        num.push(Int::zero());
        Div::new(div.space().clone(), 1, div.denominator().clone(), num).unwrap()
    }
}
