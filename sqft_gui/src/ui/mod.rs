//! UI module for the worksheet GUI
//!
//! # Layout
//! - `header` - Title row
//! - `worksheet_table` - Column headings, one row per entry, grand total
//! - `status_bar` - Row count and last worksheet event

pub mod header;
pub mod status_bar;
pub mod worksheet_table;
