//! Dimension signatures.
//!
//! A space records how many dimensions of each kind a constraint system has.
//! Rows lay out their coefficients in a fixed order: parameters, then input
//! dimensions, then output (set) dimensions, then existentially quantified
//! "div" dimensions, all after the constant term at position 0.

use crate::utils::errors::{PolyError, PolyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimType {
    /// Symbolic constant
    Param,
    /// Input dimension of a relation
    In,
    /// Output dimension of a relation, or the dimension of a set
    Out,
    /// Existentially quantified integer division
    Div,
}

impl DimType {
    /// Set dimensions share their layout with output dimensions.
    pub const SET: DimType = DimType::Out;

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DimType::Param => "param",
            DimType::In => "in",
            DimType::Out => "out",
            DimType::Div => "div",
        }
    }
}

impl fmt::Display for DimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dimension counts of a constraint system, excluding divs.
///
/// The number of divs lives with the constraint system itself since it
/// changes as existentials are added and removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Space {
    /// Number of parameter dimensions
    pub n_param: usize,
    /// Number of input dimensions (zero for sets)
    pub n_in: usize,
    /// Number of output/set dimensions
    pub n_out: usize,
}

impl Space {
    /// Create a set space.
    pub fn set(n_param: usize, n_dim: usize) -> Self {
        Self { n_param, n_in: 0, n_out: n_dim }
    }

    /// Create a relation space.
    pub fn map(n_param: usize, n_in: usize, n_out: usize) -> Self {
        Self { n_param, n_in, n_out }
    }

    /// Check if this is a set space (no input dimensions).
    pub fn is_set(&self) -> bool {
        self.n_in == 0
    }

    /// Number of non-div dimensions.
    pub fn total(&self) -> usize {
        self.n_param + self.n_in + self.n_out
    }

    /// Number of dimensions of `dim_type`, given the current number of divs.
    pub fn dim(&self, dim_type: DimType, n_div: usize) -> usize {
        match dim_type {
            DimType::Param => self.n_param,
            DimType::In => self.n_in,
            DimType::Out => self.n_out,
            DimType::Div => n_div,
        }
    }

    /// Row position of the first dimension of `dim_type`.
    pub fn offset(&self, dim_type: DimType) -> usize {
        match dim_type {
            DimType::Param => 1,
            DimType::In => 1 + self.n_param,
            DimType::Out => 1 + self.n_param + self.n_in,
            DimType::Div => 1 + self.n_param + self.n_in + self.n_out,
        }
    }

    /// Remove `n` dimensions of `dim_type`. Divs are not tracked here.
    pub(crate) fn drop_dims(&mut self, dim_type: DimType, n: usize) -> PolyResult<()> {
        let count = match dim_type {
            DimType::Param => &mut self.n_param,
            DimType::In => &mut self.n_in,
            DimType::Out => &mut self.n_out,
            DimType::Div => return Ok(()),
        };
        *count = count.checked_sub(n).ok_or_else(|| {
            PolyError::invalid_argument(format!("cannot drop {} {} dimensions", n, dim_type))
        })?;
        Ok(())
    }

    /// Name of a non-div dimension for display: `p0`, `i0`, `d0`.
    pub fn dim_name(&self, dim_type: DimType, pos: usize) -> String {
        match dim_type {
            DimType::Param => format!("p{}", pos),
            DimType::In => format!("i{}", pos),
            DimType::Out => format!("d{}", pos),
            DimType::Div => format!("e{}", pos),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "[{}]", self.n_out)?;
        } else {
            write!(f, "[{}] -> [{}]", self.n_in, self.n_out)?;
        }
        if self.n_param > 0 {
            write!(f, " : {} params", self.n_param)?;
        }
        Ok(())
    }
}
