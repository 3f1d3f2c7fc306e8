//! # polybound - Constraint cursors and bound-pair elimination
//!
//! The constraint-manipulation core of an exact-arithmetic polyhedral library:
//! - Basic maps/sets: conjunctions of integer equalities and inequalities
//! - Constraint cursors: live, copy-on-write views of a single row
//! - Defining equality/inequality detection for a dimension
//! - Bound-pair enumeration: every (lower, upper) pair of bounds on a
//!   dimension together with the region where that pair is active
//!
//! ## Architecture
//!
//! ```text
//! seq (rows of BigInt) → BasicMap (container) → Constraint (cursor) → bounds (engine)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use polybound::prelude::*;
//! use std::ops::ControlFlow;
//!
//! // { [d] : d >= 0 and d >= 5 and d <= 10 }
//! let mut bset = BasicSet::universe(Space::set(0, 1));
//! bset.add_inequality(from_i64(&[0, 1])).unwrap();
//! bset.add_inequality(from_i64(&[-5, 1])).unwrap();
//! bset.add_inequality(from_i64(&[10, -1])).unwrap();
//! let bset = bset.finalize();
//!
//! let mut pairs = Vec::new();
//! bset.foreach_bound_pair(DimType::SET, 0, |pair| {
//!     pairs.push(pair);
//!     ControlFlow::Continue(())
//! }).unwrap();
//! assert_eq!(pairs.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod polyhedral;
pub mod utils;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::polyhedral::{
        BasicMap, BasicSet, BoundPair, Constraint, ConstraintKind, DimType, Div, Enumeration,
        NormState, Space,
    };
    pub use crate::utils::errors::*;
    pub use crate::utils::seq::{from_i64, Int};
    pub use crate::Options;
}

/// Tunables carried by every constraint system and inherited by the
/// systems derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Upper bound on the number of inequalities any intermediate system of
    /// the emptiness test may hold. Past it the test gives up and reports
    /// the system as not provably empty.
    pub fm_row_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { fm_row_limit: 4096 }
    }
}

impl Options {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emptiness-test row limit.
    pub fn fm_row_limit(mut self, limit: usize) -> Self {
        self.fm_row_limit = limit;
        self
    }
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
