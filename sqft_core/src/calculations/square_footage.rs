//! # Square Footage Calculation
//!
//! Converts one row's height/width measurements (inches) into feet, rounded
//! feet and square feet.
//!
//! ## Rounding Order
//!
//! Each dimension is rounded to 2 decimals *before* the multiplication:
//!
//! ```text
//! height_rounded = round(height_in / 12, 2)
//! width_rounded  = round(width_in / 12, 2)
//! square_feet    = height_rounded * width_rounded
//! ```
//!
//! For a 5" x 5" entry that gives 0.42 * 0.42 = 0.1764, shown as "0.18".
//! Multiplying the unrounded feet would give "0.17". Totals built from
//! worksheets depend on the first form, so it must not change.
//!
//! ## Example
//!
//! ```rust
//! use sqft_core::calculations::square_footage::{calculate, SquareFootageInput};
//!
//! let input = SquareFootageInput::new("36", "24");
//! let result = calculate(&input);
//! assert_eq!(result.height_rounded, "3.00");
//! assert_eq!(result.square_feet_text(), "6.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{parse_number, to_fixed, Feet, Inches, SqFt};

/// Decimals shown for the unrounded feet columns
pub const FEET_DIGITS: usize = 6;

/// Decimals used for rounded feet and square feet
pub const ROUNDED_DIGITS: usize = 2;

/// Rounded-feet display for a row without a complete measurement
pub const EMPTY_ROUNDED: &str = "0.00";

/// Raw measurement text for one row.
///
/// The text is kept exactly as entered so a blank field stays blank; it is
/// coerced to a number only when calculating.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height_in": "36",
///   "width_in": ""
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareFootageInput {
    /// Height in inches, as typed
    pub height_in: String,

    /// Width in inches, as typed
    pub width_in: String,
}

impl SquareFootageInput {
    pub fn new(height_in: impl Into<String>, width_in: impl Into<String>) -> Self {
        SquareFootageInput {
            height_in: height_in.into(),
            width_in: width_in.into(),
        }
    }

    /// Height coerced to a number (blank or invalid text is zero)
    pub fn height(&self) -> Inches {
        Inches(parse_number(&self.height_in))
    }

    /// Width coerced to a number (blank or invalid text is zero)
    pub fn width(&self) -> Inches {
        Inches(parse_number(&self.width_in))
    }

    /// True when either dimension has a value greater than zero
    pub fn has_positive_value(&self) -> bool {
        self.height().0 > 0.0 || self.width().0 > 0.0
    }
}

/// Values derived from a [`SquareFootageInput`].
///
/// `height_feet`/`width_feet` are `None` unless both dimensions are positive.
/// `square_feet` keeps the full product of the rounded values; only its
/// display text is cut to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedValues {
    /// Height in feet, full precision
    pub height_feet: Option<Feet>,

    /// Width in feet, full precision
    pub width_feet: Option<Feet>,

    /// Height in feet rounded to 2 decimals
    pub height_rounded: String,

    /// Width in feet rounded to 2 decimals
    pub width_rounded: String,

    /// Product of the rounded dimensions
    pub square_feet: SqFt,
}

impl DerivedValues {
    /// Derived state of a row without a complete measurement
    pub fn empty() -> Self {
        DerivedValues {
            height_feet: None,
            width_feet: None,
            height_rounded: EMPTY_ROUNDED.to_string(),
            width_rounded: EMPTY_ROUNDED.to_string(),
            square_feet: SqFt(0.0),
        }
    }

    /// True when the row contributes nothing
    pub fn is_empty(&self) -> bool {
        self.height_feet.is_none() || self.width_feet.is_none()
    }

    /// Height (ft) column text: 6 decimals, or blank
    pub fn height_feet_text(&self) -> String {
        feet_text(self.height_feet)
    }

    /// Width (ft) column text: 6 decimals, or blank
    pub fn width_feet_text(&self) -> String {
        feet_text(self.width_feet)
    }

    /// Square feet column text, 2 decimals
    pub fn square_feet_text(&self) -> String {
        to_fixed(self.square_feet.0, ROUNDED_DIGITS)
    }
}

impl Default for DerivedValues {
    fn default() -> Self {
        DerivedValues::empty()
    }
}

fn feet_text(feet: Option<Feet>) -> String {
    match feet {
        Some(ft) if ft.0 > 0.0 => to_fixed(ft.0, FEET_DIGITS),
        _ => String::new(),
    }
}

/// Calculate the derived values for one row.
///
/// Never fails: any dimension that is not a positive number resets the row
/// to [`DerivedValues::empty`].
pub fn calculate(input: &SquareFootageInput) -> DerivedValues {
    let height = input.height();
    let width = input.width();

    if height.0 <= 0.0 || width.0 <= 0.0 {
        return DerivedValues::empty();
    }

    let height_feet: Feet = height.into();
    let width_feet: Feet = width.into();

    let height_rounded = to_fixed(height_feet.0, ROUNDED_DIGITS);
    let width_rounded = to_fixed(width_feet.0, ROUNDED_DIGITS);

    // Multiply the rounded values as displayed, not the raw feet
    let square_feet = Feet(parse_number(&height_rounded)) * Feet(parse_number(&width_rounded));

    DerivedValues {
        height_feet: Some(height_feet),
        width_feet: Some(width_feet),
        height_rounded,
        width_rounded,
        square_feet,
    }
}
