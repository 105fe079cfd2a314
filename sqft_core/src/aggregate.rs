//! # Grand Total
//!
//! Sums the unrounded square footage of every row. The total is rebuilt from
//! the rows after each mutation rather than adjusted incrementally, so it
//! cannot drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::square_footage::ROUNDED_DIGITS;
use crate::row::Row;
use crate::units::{to_fixed, SqFt};

/// Sum of all rows' square footage
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrandTotal(pub SqFt);

impl GrandTotal {
    /// Recompute the total from the rows, in display order
    pub fn recompute<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        GrandTotal(rows.into_iter().map(|row| row.derived().square_feet).sum())
    }

    /// Precise value in square feet
    pub fn value(&self) -> f64 {
        self.0 .0
    }

    /// Display text, 2 decimals
    pub fn text(&self) -> String {
        to_fixed(self.value(), ROUNDED_DIGITS)
    }
}

impl fmt::Display for GrandTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
