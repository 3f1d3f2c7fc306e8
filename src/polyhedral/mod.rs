//! Polyhedral data structures and operations.
//!
//! This module provides the constraint-level foundation:
//! - Spaces (dimension signatures)
//! - Basic maps/sets (shared, copy-on-write constraint systems)
//! - Operations on basic maps (elimination, intersection, emptiness)
//! - Constraint cursors over single rows
//! - Bound-pair enumeration for variable elimination

pub mod space;
pub mod basic_map;
pub mod operations;
pub mod div;
pub mod constraint;
pub mod bounds;

pub use space::{DimType, Space};
pub use basic_map::{BasicMap, BasicSet, NormState};
pub use div::Div;
pub use constraint::{Constraint, ConstraintKind, Enumeration};
pub use bounds::BoundPair;
