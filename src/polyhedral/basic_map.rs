//! Basic maps: conjunctions of affine integer constraints.
//!
//! A basic map owns a list of equality rows, a list of inequality rows and
//! the definitions of its existentially quantified "div" dimensions. Rows
//! use the layout described in [`crate::polyhedral::space`]:
//!
//! ```text
//! [ constant | params | in | out | divs ]
//! ```
//!
//! An equality row means `row . x + row[0] = 0`, an inequality row means
//! `row . x + row[0] >= 0`. A div row is `[denominator | constant | coeffs]`
//! and defines `e = floor((constant + coeffs . x) / denominator)`; a zero
//! denominator marks a div whose definition is unknown.
//!
//! [`BasicMap`] is a handle. Cloning it is cheap and shares the rows; every
//! mutating method first makes its own rows unique, so other holders never
//! see the change.

use crate::polyhedral::div::Div;
use crate::polyhedral::space::{DimType, Space};
use crate::utils::errors::{PolyError, PolyResult};
use crate::utils::seq::{self, Int};
use crate::Options;
use log::trace;
use num_traits::{One, Signed, Zero};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Whether the stored rows are known to be in reduced form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormState {
    /// Rows may have been written since the last simplification.
    Unmarked,
    /// Rows are gcd-reduced and free of duplicates.
    Normalized,
}

#[derive(Debug, Clone)]
pub(crate) struct BasicMapData {
    pub(crate) space: Space,
    pub(crate) eq: Vec<Vec<Int>>,
    pub(crate) ineq: Vec<Vec<Int>>,
    pub(crate) div: Vec<Vec<Int>>,
    pub(crate) norm: NormState,
    pub(crate) finalized: bool,
    pub(crate) empty: bool,
    pub(crate) options: Options,
}

/// A conjunction of equalities and inequalities over a [`Space`] plus divs.
#[derive(Debug, Clone)]
pub struct BasicMap {
    data: Rc<BasicMapData>,
}

/// A basic map without input dimensions.
pub type BasicSet = BasicMap;

impl BasicMapData {
    fn total(&self) -> usize {
        self.space.total() + self.div.len()
    }
}

impl BasicMap {
    /// Allocate an unconstrained basic map with room for the given number of
    /// divs, equalities and inequalities. The counts are capacity hints only.
    pub fn alloc(space: Space, n_div: usize, n_eq: usize, n_ineq: usize) -> PolyResult<Self> {
        let mut eq = Vec::new();
        eq.try_reserve(n_eq)?;
        let mut ineq = Vec::new();
        ineq.try_reserve(n_ineq)?;
        let mut div = Vec::new();
        div.try_reserve(n_div)?;
        Ok(Self {
            data: Rc::new(BasicMapData {
                space,
                eq,
                ineq,
                div,
                norm: NormState::Unmarked,
                finalized: false,
                empty: false,
                options: Options::default(),
            }),
        })
    }

    /// The basic map containing every point of `space`.
    pub fn universe(space: Space) -> Self {
        Self {
            data: Rc::new(BasicMapData {
                space,
                eq: Vec::new(),
                ineq: Vec::new(),
                div: Vec::new(),
                norm: NormState::Normalized,
                finalized: true,
                empty: false,
                options: Options::default(),
            }),
        }
    }

    /// The basic map containing no points of `space`.
    pub fn empty(space: Space) -> Self {
        let mut bmap = Self::universe(space);
        bmap.set_to_empty();
        bmap
    }

    /// A universe over the same space, with the same divs and options.
    pub fn universe_like(&self) -> Self {
        Self {
            data: Rc::new(BasicMapData {
                space: self.data.space.clone(),
                eq: Vec::new(),
                ineq: Vec::new(),
                div: self.data.div.clone(),
                norm: NormState::Normalized,
                finalized: true,
                empty: false,
                options: self.data.options.clone(),
            }),
        }
    }

    /// Build a basic map from explicit rows, each of length `1 + space.total()`.
    pub fn from_rows(space: Space, eqs: Vec<Vec<Int>>, ineqs: Vec<Vec<Int>>) -> PolyResult<Self> {
        let mut bmap = Self::alloc(space, 0, eqs.len(), ineqs.len())?;
        for row in eqs {
            bmap.add_equality(row)?;
        }
        for row in ineqs {
            bmap.add_inequality(row)?;
        }
        Ok(bmap)
    }

    /// Replace the options carried by this basic map.
    pub fn with_options(mut self, options: Options) -> Self {
        self.data_mut().options = options;
        self
    }

    /// Unique access to the rows, cloning them first if they are shared.
    pub(crate) fn data_mut(&mut self) -> &mut BasicMapData {
        Rc::make_mut(&mut self.data)
    }

    /// A handle on a private copy of the rows.
    pub fn deep_copy(&self) -> Self {
        Self { data: Rc::new((*self.data).clone()) }
    }

    /// True if another handle shares these rows.
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.data) > 1
    }

    /// True if both handles share the same rows.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// The dimension signature.
    pub fn space(&self) -> &Space {
        &self.data.space
    }

    /// Options carried by this basic map.
    pub fn options(&self) -> &Options {
        &self.data.options
    }

    /// Number of dimensions of `dim_type`.
    pub fn dim(&self, dim_type: DimType) -> usize {
        self.data.space.dim(dim_type, self.data.div.len())
    }

    /// Number of columns after the constant term.
    pub fn total_dim(&self) -> usize {
        self.data.total()
    }

    /// Row position of the first dimension of `dim_type`.
    pub fn offset(&self, dim_type: DimType) -> usize {
        self.data.space.offset(dim_type)
    }

    /// Number of equality rows.
    pub fn n_eq(&self) -> usize {
        self.data.eq.len()
    }

    /// Number of inequality rows.
    pub fn n_ineq(&self) -> usize {
        self.data.ineq.len()
    }

    /// Number of div dimensions.
    pub fn n_div(&self) -> usize {
        self.data.div.len()
    }

    /// Equality row `i`.
    pub fn eq(&self, i: usize) -> &[Int] {
        &self.data.eq[i]
    }

    /// Inequality row `i`.
    pub fn ineq(&self, i: usize) -> &[Int] {
        &self.data.ineq[i]
    }

    /// Definition row of div `i`: `[denominator | constant | coeffs]`.
    pub fn div_row(&self, i: usize) -> &[Int] {
        &self.data.div[i]
    }

    /// All equality rows.
    pub fn equalities(&self) -> impl Iterator<Item = &[Int]> {
        self.data.eq.iter().map(|r| r.as_slice())
    }

    /// All inequality rows.
    pub fn inequalities(&self) -> impl Iterator<Item = &[Int]> {
        self.data.ineq.iter().map(|r| r.as_slice())
    }

    /// Mutable access to equality row `i`. Clears the normalized mark.
    pub fn eq_mut(&mut self, i: usize) -> &mut [Int] {
        let data = self.data_mut();
        data.norm = NormState::Unmarked;
        &mut data.eq[i]
    }

    /// Mutable access to inequality row `i`. Clears the normalized mark.
    pub fn ineq_mut(&mut self, i: usize) -> &mut [Int] {
        let data = self.data_mut();
        data.norm = NormState::Unmarked;
        &mut data.ineq[i]
    }

    /// Current normalization state.
    pub fn norm_state(&self) -> NormState {
        self.data.norm
    }

    /// True once the row layout has been locked for stable iteration.
    pub fn is_final(&self) -> bool {
        self.data.finalized
    }

    /// True if the basic map has been found to contain no points.
    ///
    /// This only reports what simplification already detected; use
    /// [`BasicMap::is_empty`] for an actual test.
    pub fn is_marked_empty(&self) -> bool {
        self.data.empty
    }

    /// True for a set space.
    pub fn is_set(&self) -> bool {
        self.data.space.is_set()
    }

    /// Reserve room for additional rows.
    pub fn extend_constraints(&mut self, n_eq: usize, n_ineq: usize) -> PolyResult<()> {
        let data = self.data_mut();
        data.eq.try_reserve(n_eq)?;
        data.ineq.try_reserve(n_ineq)?;
        Ok(())
    }

    /// Append a zero equality row and return its index.
    pub fn alloc_equality(&mut self) -> PolyResult<usize> {
        let data = self.data_mut();
        let row = zero_row(1 + data.total())?;
        data.eq.try_reserve(1)?;
        data.eq.push(row);
        data.norm = NormState::Unmarked;
        data.finalized = false;
        Ok(data.eq.len() - 1)
    }

    /// Append a zero inequality row and return its index.
    pub fn alloc_inequality(&mut self) -> PolyResult<usize> {
        let data = self.data_mut();
        let row = zero_row(1 + data.total())?;
        data.ineq.try_reserve(1)?;
        data.ineq.push(row);
        data.norm = NormState::Unmarked;
        data.finalized = false;
        Ok(data.ineq.len() - 1)
    }

    /// Append a new div dimension with an unknown definition and return its
    /// index. Every existing row gains a zero coefficient for it.
    pub fn alloc_div(&mut self) -> PolyResult<usize> {
        let data = self.data_mut();
        for row in data.eq.iter_mut().chain(data.ineq.iter_mut()).chain(data.div.iter_mut()) {
            row.try_reserve(1)?;
            row.push(Int::zero());
        }
        let row = zero_row(2 + data.total() + 1)?;
        data.div.try_reserve(1)?;
        data.div.push(row);
        data.norm = NormState::Unmarked;
        data.finalized = false;
        Ok(data.div.len() - 1)
    }

    /// Append an equality row.
    pub fn add_equality(&mut self, row: Vec<Int>) -> PolyResult<usize> {
        self.check_row_len(&row)?;
        let k = self.alloc_equality()?;
        seq::cpy(self.eq_mut(k), &row);
        Ok(k)
    }

    /// Append an inequality row.
    pub fn add_inequality(&mut self, row: Vec<Int>) -> PolyResult<usize> {
        self.check_row_len(&row)?;
        let k = self.alloc_inequality()?;
        seq::cpy(self.ineq_mut(k), &row);
        Ok(k)
    }

    /// Append a div with a known definition and return its index.
    pub fn add_div(&mut self, div: &Div) -> PolyResult<usize> {
        if div.space() != self.space() || div.n_div() != self.n_div() {
            return Err(PolyError::invalid_argument(format!(
                "div over {} with {} divs does not fit basic map over {} with {} divs",
                div.space(),
                div.n_div(),
                self.space(),
                self.n_div()
            )));
        }
        let pos = self.alloc_div()?;
        let data = self.data_mut();
        let n = div.row().len();
        seq::cpy(&mut data.div[pos][..n], div.row());
        Ok(pos)
    }

    /// The definition of div `pos`.
    pub fn div(&self, pos: usize) -> PolyResult<Div> {
        PolyError::check_pos(DimType::Div, pos, self.n_div())?;
        let row = &self.data.div[pos];
        if row[0].is_zero() {
            return Err(PolyError::invalid_state(format!("div {} has no known definition", pos)));
        }
        Div::new(self.space().clone(), self.n_div(), row[0].clone(), row[1..].to_vec())
    }

    /// Remove equality row `i`.
    pub fn drop_equality(&mut self, i: usize) -> PolyResult<()> {
        if i >= self.n_eq() {
            return Err(PolyError::invalid_argument(format!("no equality {}", i)));
        }
        let data = self.data_mut();
        data.eq.remove(i);
        data.finalized = false;
        Ok(())
    }

    /// Remove inequality row `i`.
    pub fn drop_inequality(&mut self, i: usize) -> PolyResult<()> {
        if i >= self.n_ineq() {
            return Err(PolyError::invalid_argument(format!("no inequality {}", i)));
        }
        let data = self.data_mut();
        data.ineq.remove(i);
        data.finalized = false;
        Ok(())
    }

    /// Delete `n` dimensions of `dim_type` starting at `first`, without
    /// projecting. Constraints that mention them lose those coefficients;
    /// divs whose definitions mention them become unknown.
    pub fn drop_dims(mut self, dim_type: DimType, first: usize, n: usize) -> PolyResult<Self> {
        let count = self.dim(dim_type);
        if first + n > count {
            return Err(PolyError::OutOfRange { dim_type, pos: first + n, n: count });
        }
        if n == 0 {
            return Ok(self);
        }
        let col = self.offset(dim_type) + first;
        let data = self.data_mut();
        for row in data.eq.iter_mut().chain(data.ineq.iter_mut()) {
            row.drain(col..col + n);
        }
        for row in data.div.iter_mut() {
            if row[1 + col..1 + col + n].iter().any(|v| !v.is_zero()) {
                seq::clr(row);
            }
            row.drain(1 + col..1 + col + n);
        }
        if dim_type == DimType::Div {
            data.div.drain(first..first + n);
        }
        data.space.drop_dims(dim_type, n)?;
        data.norm = NormState::Unmarked;
        data.finalized = false;
        Ok(self)
    }

    /// Replace the constraints by the canonical infeasible equality `1 = 0`.
    pub fn set_to_empty(&mut self) {
        let data = self.data_mut();
        let mut row = vec![Int::zero(); 1 + data.total()];
        row[0] = Int::one();
        data.eq = vec![row];
        data.ineq.clear();
        data.empty = true;
        data.norm = NormState::Normalized;
    }

    /// Lock the row layout for stable iteration.
    pub fn finalize(mut self) -> Self {
        self.data_mut().finalized = true;
        self
    }

    /// Reduce the constraints without changing the set they describe.
    ///
    /// Rows are divided by the gcd of their coefficients (rounding inequality
    /// constants down), equalities are brought into echelon form and
    /// substituted into the inequalities, duplicate inequalities collapse to
    /// the tightest one, and opposite inequalities either merge into an
    /// equality or reveal the basic map to be empty. The column layout is
    /// never changed, so row positions computed before the call stay valid.
    pub fn simplify(mut self) -> Self {
        if self.is_marked_empty() {
            return self;
        }
        let data = self.data_mut();
        data.finalized = false;
        loop {
            if !normalize_equalities(&mut data.eq) || !gauss(data) {
                self.set_to_empty();
                return self;
            }
            if !normalize_inequalities(&mut data.ineq) {
                self.set_to_empty();
                return self;
            }
            match merge_inequalities(data) {
                Merge::Empty => {
                    self.set_to_empty();
                    return self;
                }
                Merge::NewEqualities => continue,
                Merge::Done => break,
            }
        }
        data.norm = NormState::Normalized;
        trace!("simplified to {} equalities, {} inequalities", data.eq.len(), data.ineq.len());
        self
    }

    /// Check whether an integer point over all `total_dim()` columns
    /// satisfies every constraint.
    pub fn contains(&self, point: &[Int]) -> PolyResult<bool> {
        if point.len() != self.total_dim() {
            return Err(PolyError::invalid_argument(format!(
                "point has {} coordinates, expected {}",
                point.len(),
                self.total_dim()
            )));
        }
        Ok(self.equalities().all(|r| seq::eval(r, point).is_zero())
            && self.inequalities().all(|r| !seq::eval(r, point).is_negative()))
    }

    fn check_row_len(&self, row: &[Int]) -> PolyResult<()> {
        if row.len() != 1 + self.total_dim() {
            return Err(PolyError::invalid_argument(format!(
                "row has length {}, expected {}",
                row.len(),
                1 + self.total_dim()
            )));
        }
        Ok(())
    }

    /// Render a row with this basic map's dimension names.
    pub(crate) fn fmt_row(&self, row: &[Int]) -> String {
        let space = self.space();
        let mut names = Vec::with_capacity(self.total_dim());
        for dim_type in [DimType::Param, DimType::In, DimType::Out, DimType::Div] {
            for pos in 0..self.dim(dim_type) {
                names.push(space.dim_name(dim_type, pos));
            }
        }
        let mut out = String::new();
        for (c, name) in row[1..].iter().zip(&names) {
            if c.is_zero() {
                continue;
            }
            let sign = if c.is_negative() { "-" } else { "+" };
            if out.is_empty() {
                if c.is_negative() {
                    out.push('-');
                }
            } else {
                out.push_str(&format!(" {} ", sign));
            }
            let abs = c.abs();
            if abs.is_one() {
                out.push_str(name);
            } else {
                out.push_str(&format!("{}*{}", abs, name));
            }
        }
        let k = &row[0];
        if out.is_empty() {
            out = k.to_string();
        } else if !k.is_zero() {
            let sign = if k.is_negative() { "-" } else { "+" };
            out.push_str(&format!(" {} {}", sign, k.abs()));
        }
        out
    }
}

impl fmt::Display for BasicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let space = self.space();
        let names = |dim_type: DimType| -> String {
            (0..self.dim(dim_type))
                .map(|p| space.dim_name(dim_type, p))
                .collect::<Vec<_>>()
                .join(", ")
        };
        if space.n_param > 0 {
            write!(f, "[{}] -> ", names(DimType::Param))?;
        }
        write!(f, "{{ ")?;
        if !space.is_set() {
            write!(f, "[{}] -> ", names(DimType::In))?;
        }
        write!(f, "[{}]", names(DimType::Out))?;
        let parts: Vec<String> = self
            .equalities()
            .map(|r| format!("{} = 0", self.fmt_row(r)))
            .chain(self.inequalities().map(|r| format!("{} >= 0", self.fmt_row(r))))
            .collect();
        if !parts.is_empty() {
            write!(f, " : ")?;
            if self.n_div() > 0 {
                write!(f, "exists ({}) : ", names(DimType::Div))?;
            }
            write!(f, "{}", parts.join(" and "))?;
        }
        write!(f, " }}")
    }
}

fn zero_row(len: usize) -> PolyResult<Vec<Int>> {
    let mut row = Vec::new();
    row.try_reserve_exact(len)?;
    row.resize(len, Int::zero());
    Ok(row)
}

/// Divide equalities by the gcd of their coefficients. Returns false if an
/// equality has no integer solution.
fn normalize_equalities(eqs: &mut Vec<Vec<Int>>) -> bool {
    let mut feasible = true;
    eqs.retain_mut(|row| {
        let g = seq::gcd(&row[1..]);
        if g.is_zero() {
            if !row[0].is_zero() {
                feasible = false;
            }
            return false;
        }
        if !(&row[0] % &g).is_zero() {
            feasible = false;
            return true;
        }
        if !g.is_one() {
            seq::scale_down(row, &g);
        }
        true
    });
    feasible
}

/// Divide inequalities by the gcd of their coefficients, rounding the
/// constant down. Returns false if a constant row is negative.
fn normalize_inequalities(ineqs: &mut Vec<Vec<Int>>) -> bool {
    let mut feasible = true;
    ineqs.retain_mut(|row| {
        let g = seq::gcd(&row[1..]);
        if g.is_zero() {
            if row[0].is_negative() {
                feasible = false;
            }
            return false;
        }
        if !g.is_one() {
            row[0] = seq::floor_div(&row[0], &g);
            seq::scale_down(&mut row[1..], &g);
        }
        true
    });
    feasible
}

/// Bring the equalities into echelon form, pivoting on the last nonzero
/// column, and eliminate each pivot from every other row.
fn gauss(data: &mut BasicMapData) -> bool {
    let total = data.total();
    let mut done = 0;
    for col in (1..=total).rev() {
        if done >= data.eq.len() {
            break;
        }
        let Some(k) = (done..data.eq.len()).find(|&k| !data.eq[k][col].is_zero()) else {
            continue;
        };
        data.eq.swap(done, k);
        if data.eq[done][col].is_negative() {
            seq::neg(&mut data.eq[done]);
        }
        let pivot = data.eq[done].clone();
        for (i, row) in data.eq.iter_mut().enumerate() {
            if i != done {
                seq::elim(row, &pivot, col);
            }
        }
        for row in data.ineq.iter_mut() {
            seq::elim(row, &pivot, col);
        }
        done += 1;
    }
    normalize_equalities(&mut data.eq)
}

enum Merge {
    Done,
    NewEqualities,
    Empty,
}

/// Collapse duplicate inequalities and detect opposite pairs.
fn merge_inequalities(data: &mut BasicMapData) -> Merge {
    let mut seen: HashMap<Vec<Int>, usize> = HashMap::new();
    let mut kept: Vec<Vec<Int>> = Vec::with_capacity(data.ineq.len());
    for row in data.ineq.drain(..) {
        match seen.get(&row[1..]) {
            Some(&k) => {
                if row[0] < kept[k][0] {
                    kept[k][0] = row[0].clone();
                }
            }
            None => {
                seen.insert(row[1..].to_vec(), kept.len());
                kept.push(row);
            }
        }
    }

    let mut removed = vec![false; kept.len()];
    let mut result = Merge::Done;
    for i in 0..kept.len() {
        if removed[i] {
            continue;
        }
        let opposite: Vec<Int> = kept[i][1..].iter().map(|v| -v).collect();
        let Some(&j) = seen.get(&opposite) else {
            continue;
        };
        if j == i || removed[j] {
            continue;
        }
        let sum = &kept[i][0] + &kept[j][0];
        if sum.is_negative() {
            return Merge::Empty;
        }
        if sum.is_zero() {
            data.eq.push(kept[i].clone());
            removed[i] = true;
            removed[j] = true;
            result = Merge::NewEqualities;
        }
    }
    data.ineq = kept
        .into_iter()
        .zip(removed)
        .filter_map(|(row, gone)| (!gone).then_some(row))
        .collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seq::from_i64;

    fn interval(lo: i64, hi: i64) -> BasicSet {
        // { [d] : lo <= d <= hi }
        BasicMap::from_rows(
            Space::set(0, 1),
            vec![],
            vec![from_i64(&[-lo, 1]), from_i64(&[hi, -1])],
        )
        .unwrap()
    }

    #[test]
    fn test_universe() {
        let bset = BasicMap::universe(Space::set(1, 2));
        assert_eq!(bset.total_dim(), 3);
        assert_eq!(bset.n_eq() + bset.n_ineq(), 0);
        assert!(bset.is_final());
        assert!(bset.contains(&from_i64(&[7, -3, 100])).unwrap());
    }

    #[test]
    fn test_alloc_rows_are_zero() {
        let mut bset = BasicMap::alloc(Space::set(0, 2), 0, 1, 1).unwrap();
        let k = bset.alloc_inequality().unwrap();
        assert_eq!(bset.ineq(k), &from_i64(&[0, 0, 0])[..]);
        assert_eq!(bset.norm_state(), NormState::Unmarked);
    }

    #[test]
    fn test_add_row_checks_length() {
        let mut bset = BasicMap::universe(Space::set(0, 2));
        assert!(matches!(
            bset.add_inequality(from_i64(&[1, 2])),
            Err(PolyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let a = interval(0, 10);
        let mut b = a.clone();
        assert!(a.is_shared());
        assert!(a.ptr_eq(&b));
        b.ineq_mut(0)[0] = Int::from(-3);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.ineq(0)[0], Int::from(0));
        assert_eq!(b.ineq(0)[0], Int::from(-3));
    }

    #[test]
    fn test_simplify_detects_contradiction() {
        let bset = interval(5, 3).simplify();
        assert!(bset.is_marked_empty());
    }

    #[test]
    fn test_simplify_merges_opposites_into_equality() {
        let bset = interval(4, 4).simplify();
        assert_eq!(bset.n_eq(), 1);
        assert_eq!(bset.n_ineq(), 0);
        assert_eq!(bset.eq(0), &from_i64(&[-4, 1])[..]);
        assert_eq!(bset.norm_state(), NormState::Normalized);
    }

    #[test]
    fn test_simplify_tightens_inequalities() {
        // 2d - 3 >= 0 becomes d - 2 >= 0
        let bset = BasicMap::from_rows(Space::set(0, 1), vec![], vec![from_i64(&[-3, 2])])
            .unwrap()
            .simplify();
        assert_eq!(bset.ineq(0), &from_i64(&[-2, 1])[..]);
    }

    #[test]
    fn test_simplify_keeps_tightest_duplicate() {
        let bset = BasicMap::from_rows(
            Space::set(0, 1),
            vec![],
            vec![from_i64(&[0, 1]), from_i64(&[-5, 1])],
        )
        .unwrap()
        .simplify();
        assert_eq!(bset.n_ineq(), 1);
        assert_eq!(bset.ineq(0), &from_i64(&[-5, 1])[..]);
    }

    #[test]
    fn test_simplify_gcd_infeasible_equality() {
        // 2d = 1 has no integer solution
        let bset = BasicMap::from_rows(Space::set(0, 1), vec![from_i64(&[-1, 2])], vec![])
            .unwrap()
            .simplify();
        assert!(bset.is_marked_empty());
    }

    #[test]
    fn test_gauss_substitutes_into_inequalities() {
        // d0 = d1 + 1, d1 >= 2  =>  d0 >= 3
        let bset = BasicMap::from_rows(
            Space::set(0, 2),
            vec![from_i64(&[1, -1, 1])],
            vec![from_i64(&[-2, 0, 1])],
        )
        .unwrap()
        .simplify();
        assert_eq!(bset.n_eq(), 1);
        assert_eq!(bset.ineq(0), &from_i64(&[-3, 1, 0])[..]);
        assert!(bset.contains(&from_i64(&[3, 2])).unwrap());
        assert!(!bset.contains(&from_i64(&[2, 1])).unwrap());
    }

    #[test]
    fn test_drop_dims() {
        // { [d0, d1] : d0 >= 0 and d1 <= 4 }
        let bset = BasicMap::from_rows(
            Space::set(0, 2),
            vec![],
            vec![from_i64(&[0, 1, 0]), from_i64(&[4, 0, -1])],
        )
        .unwrap();
        let dropped = bset.drop_dims(DimType::SET, 0, 1).unwrap();
        assert_eq!(dropped.space(), &Space::set(0, 1));
        assert_eq!(dropped.ineq(1), &from_i64(&[4, -1])[..]);
        assert!(!dropped.is_final());
    }

    #[test]
    fn test_drop_dims_out_of_range() {
        let bset = BasicMap::universe(Space::set(1, 1));
        assert!(matches!(
            bset.drop_dims(DimType::Param, 1, 1),
            Err(PolyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_alloc_div_extends_rows() {
        let mut bset = interval(0, 3);
        let pos = bset.alloc_div().unwrap();
        assert_eq!(pos, 0);
        assert_eq!(bset.total_dim(), 2);
        assert_eq!(bset.ineq(0).len(), 3);
        assert_eq!(bset.div_row(0).len(), 4);
        assert!(matches!(bset.div(0), Err(PolyError::InvalidState(_))));
    }

    #[test]
    fn test_display() {
        let bset = BasicMap::from_rows(
            Space::set(1, 1),
            vec![],
            vec![from_i64(&[3, -1, 2])],
        )
        .unwrap();
        assert_eq!(bset.to_string(), "[p0] -> { [d0] : -p0 + 2*d0 + 3 >= 0 }");
    }

    #[test]
    fn test_empty_is_marked() {
        let bset = BasicMap::empty(Space::set(0, 2));
        assert!(bset.is_marked_empty());
        assert!(!bset.contains(&from_i64(&[0, 0])).unwrap());
    }
}
