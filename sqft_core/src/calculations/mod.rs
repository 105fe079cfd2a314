//! # Worksheet Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - Derived/result type (JSON-serializable)
//! - `calculate(input)` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`square_footage`] - Height x width (inches) to square feet

pub mod square_footage;

// Re-export commonly used types
pub use square_footage::{calculate, DerivedValues, SquareFootageInput};
