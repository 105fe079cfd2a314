//! # sqft_core - Square Footage Worksheet Engine
//!
//! `sqft_core` is the computational heart of the square footage worksheet: a
//! table of height/width measurements (inches) that converts each row to feet
//! and square feet and keeps a running grand total. Front ends (GUI, terminal)
//! render it and forward edits; the core never touches presentation state.
//!
//! ## Design Philosophy
//!
//! - **Never fails**: bad numbers coerce to zero, stale row ids are ignored
//! - **Synchronous**: every edit finishes its recalculation before returning
//! - **Observable**: front ends subscribe to row and total events
//! - **JSON-friendly**: snapshots and events implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use sqft_core::{Field, Worksheet, WorksheetSettings};
//!
//! let mut sheet = Worksheet::new("Living Room", WorksheetSettings::default());
//! let row = sheet.table().rows()[0].id();
//!
//! sheet.edit_row(row, Field::Height, "5");
//! sheet.edit_row(row, Field::Width, "5");
//!
//! // Each side rounds to 0.42 ft before multiplying
//! assert_eq!(sheet.table().row(row).unwrap().derived().square_feet_text(), "0.18");
//! ```
//!
//! ## Modules
//!
//! - [`worksheet`] - Root container, metadata and settings
//! - [`table`] - Row collection, auto-append policy
//! - [`row`] - Row model and ids
//! - [`calculations`] - Pure per-row calculation
//! - [`aggregate`] - Grand total
//! - [`events`] - Change notifications for front ends
//! - [`units`] - Unit wrappers, fixed-point formatting, numeric coercion
//! - [`errors`] - Structured error types

pub mod aggregate;
pub mod calculations;
pub mod errors;
pub mod events;
pub mod row;
pub mod table;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use aggregate::GrandTotal;
pub use errors::{SheetError, SheetResult};
pub use events::{SubscriptionId, TableEvent, TableObserver};
pub use row::{Field, Row, RowId, RowSnapshot};
pub use table::{Table, TableSnapshot, COLUMN_HEADINGS};
pub use worksheet::{Worksheet, WorksheetMeta, WorksheetSettings, WorksheetSnapshot};
