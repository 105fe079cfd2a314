//! # Row Model
//!
//! One measurement entry: a stable id, the raw height/width text and the
//! values derived from it. Derived values are recomputed whenever an input
//! changes and are never set directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{calculate, DerivedValues, SquareFootageInput};
use crate::errors::{SheetError, SheetResult};

/// Row identifier.
///
/// Assigned from the table's sequence counter, starting at 1. Ids are never
/// reused, even after the row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = SheetError;

    /// Accepts `3`, `#3` or `row-3`.
    fn from_str(s: &str) -> SheetResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("row-")
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(RowId)
            .map_err(|_| SheetError::invalid_row_id(s))
    }
}

/// Editable input field of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Height in inches
    Height,
    /// Width in inches
    Width,
}

impl Field {
    /// Column heading for this field
    pub const fn label(self) -> &'static str {
        match self {
            Field::Height => "Height (in)",
            Field::Width => "Width (in)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Height => write!(f, "height"),
            Field::Width => write!(f, "width"),
        }
    }
}

impl FromStr for Field {
    type Err = SheetError;

    fn from_str(s: &str) -> SheetResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "height" | "heightinches" | "height_in" => Ok(Field::Height),
            "w" | "width" | "widthinches" | "width_in" => Ok(Field::Width),
            _ => Err(SheetError::invalid_field(s)),
        }
    }
}

/// A worksheet row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    input: SquareFootageInput,
    derived: DerivedValues,
}

impl Row {
    /// Create a blank row and run its initial calculation
    pub(crate) fn new(id: RowId) -> Self {
        let input = SquareFootageInput::default();
        let derived = calculate(&input);
        Row { id, input, derived }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn input(&self) -> &SquareFootageInput {
        &self.input
    }

    pub fn derived(&self) -> &DerivedValues {
        &self.derived
    }

    /// Raw text of one input field
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.input.height_in,
            Field::Width => &self.input.width_in,
        }
    }

    /// Replace one input field and recompute the derived values
    pub(crate) fn set(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::Height => self.input.height_in = raw,
            Field::Width => self.input.width_in = raw,
        }
        self.derived = calculate(&self.input);
    }

    /// Display-ready copy of this row
    pub fn snapshot(&self) -> RowSnapshot {
        RowSnapshot {
            id: self.id,
            height_in: self.input.height_in.clone(),
            width_in: self.input.width_in.clone(),
            height_feet: self.derived.height_feet_text(),
            width_feet: self.derived.width_feet_text(),
            height_rounded: self.derived.height_rounded.clone(),
            width_rounded: self.derived.width_rounded.clone(),
            square_feet: self.derived.square_feet_text(),
            square_feet_value: self.derived.square_feet.0,
        }
    }
}

/// Everything a front end needs to render one row.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "height_in": "36",
///   "width_in": "24",
///   "height_feet": "3.000000",
///   "width_feet": "2.000000",
///   "height_rounded": "3.00",
///   "width_rounded": "2.00",
///   "square_feet": "6.00",
///   "square_feet_value": 6.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub id: RowId,
    pub height_in: String,
    pub width_in: String,
    pub height_feet: String,
    pub width_feet: String,
    pub height_rounded: String,
    pub width_rounded: String,
    pub square_feet: String,
    /// Unrounded square feet, as summed into the grand total
    pub square_feet_value: f64,
}
