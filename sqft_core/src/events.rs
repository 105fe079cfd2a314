//! # Table Events
//!
//! Front ends subscribe to a [`Table`](crate::table::Table) to hear about row
//! lifecycle changes and total updates instead of reaching into its state.
//! Events are delivered synchronously, in the order the mutation produced them:
//! a row's update always precedes the total change it caused.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::mpsc;
//! use sqft_core::events::TableEvent;
//! use sqft_core::row::Field;
//! use sqft_core::table::Table;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut table = Table::default();
//! table.subscribe(move |event: &TableEvent| {
//!     let _ = tx.send(event.clone());
//! });
//!
//! let id = table.append_row();
//! table.edit_row(id, Field::Height, "36");
//! assert!(rx.try_iter().count() >= 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::GrandTotal;
use crate::row::{RowId, RowSnapshot};

/// Change notification emitted by a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum TableEvent {
    /// A row was appended (carries its initial, empty state)
    RowCreated { row: RowSnapshot },
    /// A row's inputs changed and its derived values were recomputed
    RowUpdated { row: RowSnapshot },
    /// A row was removed
    RowDeleted { id: RowId },
    /// The grand total was recomputed
    TotalChanged { total: GrandTotal },
}

impl TableEvent {
    /// One-line description for status bars and logs
    pub fn describe(&self) -> String {
        match self {
            TableEvent::RowCreated { row } => format!("Row {} added", row.id),
            TableEvent::RowUpdated { row } => {
                format!("Row {}: {} sq ft", row.id, row.square_feet)
            }
            TableEvent::RowDeleted { id } => format!("Row {} deleted", id),
            TableEvent::TotalChanged { total } => format!("Grand total: {} sq ft", total),
        }
    }
}

/// Receiver of table events.
///
/// Implemented for any `FnMut(&TableEvent)` closure.
pub trait TableObserver: Send {
    fn notify(&mut self, event: &TableEvent);
}

impl<F> TableObserver for F
where
    F: FnMut(&TableEvent) + Send,
{
    fn notify(&mut self, event: &TableEvent) {
        self(event)
    }
}

/// Handle returned by `Table::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::SqFt;

    fn snapshot(id: u64) -> RowSnapshot {
        RowSnapshot {
            id: RowId(id),
            height_in: "36".to_string(),
            width_in: "24".to_string(),
            height_feet: "3.000000".to_string(),
            width_feet: "2.000000".to_string(),
            height_rounded: "3.00".to_string(),
            width_rounded: "2.00".to_string(),
            square_feet: "6.00".to_string(),
            square_feet_value: 6.0,
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            TableEvent::RowUpdated { row: snapshot(3) }.describe(),
            "Row 3: 6.00 sq ft"
        );
        assert_eq!(
            TableEvent::TotalChanged {
                total: GrandTotal(SqFt(0.1764)),
            }
            .describe(),
            "Grand total: 0.18 sq ft"
        );
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &TableEvent| seen.push(event.describe());
            observer.notify(&TableEvent::RowDeleted { id: RowId(9) });
            observer.notify(&TableEvent::RowCreated { row: snapshot(10) });
        }
        assert_eq!(seen, vec!["Row 9 deleted", "Row 10 added"]);
    }

    #[test]
    fn test_serialization() {
        let event = TableEvent::RowDeleted { id: RowId(4) };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"RowDeleted","id":4}"#);
    }
}
