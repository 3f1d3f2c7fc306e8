//! Constraint cursors.
//!
//! A [`Constraint`] names one row of one basic map: an equality `expr = 0`
//! or an inequality `expr >= 0`. It keeps its basic map alive and reads the
//! row in place. Writing through a cursor makes the basic map private to the
//! cursor first, so other cursors and holders of the same basic map keep
//! seeing the old row.

use crate::polyhedral::basic_map::{BasicMap, BasicSet};
use crate::polyhedral::div::Div;
use crate::polyhedral::space::{DimType, Space};
use crate::utils::errors::{PolyError, PolyResult};
use crate::utils::seq::{self, Int};
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;

/// Kind of constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Greater than or equal: expr >= 0
    Inequality,
    /// Equal: expr = 0
    Equality,
}

/// How an enumeration over constraints or bound pairs ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enumeration {
    /// Every element was visited.
    Exhausted,
    /// The callback asked to stop early.
    Stopped,
}

impl Enumeration {
    /// True if the callback cut the enumeration short.
    pub fn is_stopped(&self) -> bool {
        matches!(self, Enumeration::Stopped)
    }

    pub(crate) fn from_flow(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => Enumeration::Exhausted,
            ControlFlow::Break(()) => Enumeration::Stopped,
        }
    }
}

/// A handle on a single row of a basic map.
#[derive(Debug, Clone)]
pub struct Constraint {
    bmap: BasicMap,
    kind: ConstraintKind,
    index: usize,
}

impl Constraint {
    /// Wrap row `index` of the given kind of `bmap`.
    pub fn new(bmap: BasicMap, kind: ConstraintKind, index: usize) -> PolyResult<Self> {
        let n = match kind {
            ConstraintKind::Equality => bmap.n_eq(),
            ConstraintKind::Inequality => bmap.n_ineq(),
        };
        if index >= n {
            return Err(PolyError::invalid_argument(format!(
                "{:?} row {} does not exist ({} rows)",
                kind, index, n
            )));
        }
        Ok(Self { bmap, kind, index })
    }

    /// A fresh equality `0 = 0` over `space`, alone in its basic map.
    pub fn equality_alloc(space: Space) -> PolyResult<Self> {
        let mut bmap = BasicMap::alloc(space, 0, 1, 0)?;
        let k = bmap.alloc_equality()?;
        Self::new(bmap, ConstraintKind::Equality, k)
    }

    /// A fresh inequality `0 >= 0` over `space`, alone in its basic map.
    pub fn inequality_alloc(space: Space) -> PolyResult<Self> {
        let mut bmap = BasicMap::alloc(space, 0, 0, 1)?;
        let k = bmap.alloc_inequality()?;
        Self::new(bmap, ConstraintKind::Inequality, k)
    }

    /// The same row in a private copy of the basic map.
    pub fn dup(&self) -> Self {
        Self {
            bmap: self.bmap.deep_copy(),
            kind: self.kind,
            index: self.index,
        }
    }

    /// This cursor if its basic map is not shared, a [`Constraint::dup`] otherwise.
    pub fn cow(self) -> Self {
        if self.bmap.is_shared() {
            self.dup()
        } else {
            self
        }
    }

    /// Step to the next row: equalities first, then inequalities. Returns
    /// `None` past the last inequality.
    pub fn next(mut self) -> Option<Self> {
        self.index += 1;
        if self.kind == ConstraintKind::Equality {
            if self.index < self.bmap.n_eq() {
                return Some(self);
            }
            self.kind = ConstraintKind::Inequality;
            self.index = 0;
        }
        (self.index < self.bmap.n_ineq()).then_some(self)
    }

    /// The basic map this cursor points into.
    pub fn basic_map(&self) -> &BasicMap {
        &self.bmap
    }

    /// Equality or inequality.
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Index of the row among the rows of its kind.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True for an equality.
    pub fn is_equality(&self) -> bool {
        self.kind == ConstraintKind::Equality
    }

    /// The row: constant, then one coefficient per dimension.
    pub fn row(&self) -> &[Int] {
        match self.kind {
            ConstraintKind::Equality => self.bmap.eq(self.index),
            ConstraintKind::Inequality => self.bmap.ineq(self.index),
        }
    }

    fn row_mut(&mut self) -> &mut [Int] {
        match self.kind {
            ConstraintKind::Equality => self.bmap.eq_mut(self.index),
            ConstraintKind::Inequality => self.bmap.ineq_mut(self.index),
        }
    }

    /// Number of dimensions of `dim_type`.
    pub fn dim(&self, dim_type: DimType) -> usize {
        self.bmap.dim(dim_type)
    }

    /// The constant term.
    pub fn get_constant(&self) -> Int {
        self.row()[0].clone()
    }

    /// Coefficient of dimension `pos` of `dim_type`.
    pub fn get_coefficient(&self, dim_type: DimType, pos: usize) -> PolyResult<Int> {
        PolyError::check_pos(dim_type, pos, self.dim(dim_type))?;
        Ok(self.row()[self.bmap.offset(dim_type) + pos].clone())
    }

    /// Set the constant term.
    pub fn set_constant(&mut self, v: impl Into<Int>) {
        self.row_mut()[0] = v.into();
    }

    /// Set the coefficient of dimension `pos` of `dim_type`.
    pub fn set_coefficient(
        &mut self,
        dim_type: DimType,
        pos: usize,
        v: impl Into<Int>,
    ) -> PolyResult<()> {
        PolyError::check_pos(dim_type, pos, self.dim(dim_type))?;
        let col = self.bmap.offset(dim_type) + pos;
        self.row_mut()[col] = v.into();
        Ok(())
    }

    /// Zero the constant and every coefficient.
    pub fn clear(&mut self) {
        seq::clr(self.row_mut());
    }

    /// Replace `expr >= 0` by its integer complement `-expr - 1 >= 0`.
    ///
    /// Only inequalities can be negated, and only when no other handle
    /// shares the basic map.
    pub fn negate(&mut self) -> PolyResult<()> {
        if self.is_equality() {
            return Err(PolyError::invalid_state("cannot negate an equality"));
        }
        if self.bmap.is_shared() {
            return Err(PolyError::invalid_state("cannot negate a constraint of a shared basic map"));
        }
        let row = self.row_mut();
        seq::neg(row);
        row[0] -= Int::one();
        Ok(())
    }

    /// Attach a div to a constraint that is alone in its basic map and
    /// return the position of the new div dimension.
    pub fn add_div(&mut self, div: &Div) -> PolyResult<usize> {
        if div.space() != self.bmap.space() {
            return Err(PolyError::invalid_argument(format!(
                "div over {} does not fit constraint over {}",
                div.space(),
                self.bmap.space()
            )));
        }
        if self.bmap.n_eq() + self.bmap.n_ineq() != 1 {
            return Err(PolyError::invalid_state(
                "divs can only be added to a constraint alone in its basic map",
            ));
        }
        self.bmap.add_div(div)
    }

    /// The definition of div `pos`.
    pub fn div(&self, pos: usize) -> PolyResult<Div> {
        self.bmap.div(pos)
    }
}

/// Two cursors are equal if they point at the same row of the same basic
/// map instance; equal coefficients are not enough.
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.bmap.ptr_eq(&other.bmap) && self.kind == other.kind && self.index == other.index
    }
}

impl Eq for Constraint {}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expr = self.bmap.fmt_row(self.row());
        match self.kind {
            ConstraintKind::Inequality => write!(f, "{} >= 0", expr),
            ConstraintKind::Equality => write!(f, "{} = 0", expr),
        }
    }
}

impl BasicMap {
    /// Cursor on the first equality, or the first inequality if there are
    /// no equalities.
    pub fn first_constraint(self) -> Option<Constraint> {
        if self.n_eq() > 0 {
            return Some(Constraint { bmap: self, kind: ConstraintKind::Equality, index: 0 });
        }
        if self.n_ineq() > 0 {
            return Some(Constraint { bmap: self, kind: ConstraintKind::Inequality, index: 0 });
        }
        None
    }

    /// Call `f` on a cursor for every equality and then every inequality.
    ///
    /// The basic map must be final so that row positions are stable.
    pub fn foreach_constraint<F>(&self, mut f: F) -> PolyResult<Enumeration>
    where
        F: FnMut(Constraint) -> ControlFlow<()>,
    {
        if !self.is_final() {
            return Err(PolyError::invalid_state("basic map must be finalized before enumeration"));
        }
        let eqs = (0..self.n_eq()).map(|i| (ConstraintKind::Equality, i));
        let ineqs = (0..self.n_ineq()).map(|i| (ConstraintKind::Inequality, i));
        for (kind, index) in eqs.chain(ineqs) {
            let c = Constraint { bmap: self.clone(), kind, index };
            if f(c).is_break() {
                return Ok(Enumeration::Stopped);
            }
        }
        Ok(Enumeration::Exhausted)
    }

    /// Turn a single constraint into a basic map.
    ///
    /// If the constraint is the only row of its basic map, that basic map is
    /// returned as is.
    pub fn from_constraint(constraint: Constraint) -> PolyResult<Self> {
        let Constraint { bmap, kind, index } = constraint;
        if bmap.n_eq() + bmap.n_ineq() == 1 {
            return Ok(bmap);
        }
        let mut result = bmap.universe_like();
        result.extend_constraints(1, 1)?;
        let k = match kind {
            ConstraintKind::Equality => result.alloc_equality()?,
            ConstraintKind::Inequality => result.alloc_inequality()?,
        };
        let src = match kind {
            ConstraintKind::Equality => bmap.eq(index),
            ConstraintKind::Inequality => bmap.ineq(index),
        };
        let dst = match kind {
            ConstraintKind::Equality => result.eq_mut(k),
            ConstraintKind::Inequality => result.ineq_mut(k),
        };
        seq::cpy(dst, src);
        Ok(result.finalize())
    }

    /// Like [`BasicMap::from_constraint`], for a constraint over a set space.
    pub fn set_from_constraint(constraint: Constraint) -> PolyResult<BasicSet> {
        if !constraint.basic_map().is_set() {
            return Err(PolyError::invalid_argument("constraint has input dimensions"));
        }
        Self::from_constraint(constraint)
    }

    /// Intersect with the basic map formed by a single constraint.
    pub fn add_constraint(self, constraint: Constraint) -> PolyResult<Self> {
        if self.space() != constraint.basic_map().space() {
            return Err(PolyError::invalid_argument(format!(
                "constraint over {} does not fit basic map over {}",
                constraint.basic_map().space(),
                self.space()
            )));
        }
        let single = Self::from_constraint(constraint)?;
        self.intersect(&single)
    }
}
