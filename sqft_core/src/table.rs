//! # Table Controller
//!
//! Owns the ordered rows of a worksheet, the row id sequence, the grand total
//! and the auto-append watch.
//!
//! ## Auto-Append
//!
//! The worksheet has no "add row" action. It grows by typing: exactly one row
//! at a time is *armed*, and the first edit that leaves either of its inputs
//! greater than zero disarms it and appends a fresh row, which becomes the
//! new armed row.
//!
//! ```text
//! append_row ──► Armed(id) ──edit(id), any input > 0──► fired: armed = None
//!                   ▲                                        │
//!                   └────────────── append_row ◄─────────────┘
//! ```
//!
//! Only [`Table::append_row`] arms a row. Deleting the armed row leaves the
//! table unarmed unless `rearm_after_delete` is set, in which case the new
//! last row is armed.
//!
//! ## Example
//!
//! ```rust
//! use sqft_core::row::Field;
//! use sqft_core::table::Table;
//!
//! let mut table = Table::default();
//! let first = table.append_row();
//!
//! table.edit_row(first, Field::Height, "36");
//! assert_eq!(table.len(), 2); // typing into the last row added a row
//!
//! table.edit_row(first, Field::Width, "24");
//! assert_eq!(table.grand_total().text(), "6.00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::aggregate::GrandTotal;
use crate::events::{SubscriptionId, TableEvent, TableObserver};
use crate::row::{Field, Row, RowId, RowSnapshot};

/// Column headings, in display order
pub const COLUMN_HEADINGS: [&str; 8] = [
    Field::Height.label(),
    Field::Width.label(),
    "H (ft)",
    "W (ft)",
    "H (Rnd)",
    "W (Rnd)",
    "Square ft",
    "Delete",
];

/// Ordered collection of worksheet rows
pub struct Table {
    /// Rows in display order (always ascending by id)
    rows: Vec<Row>,

    /// Id given to the next appended row
    next_id: u64,

    /// Row whose edits can trigger an auto-append
    armed: Option<RowId>,

    /// Re-arm the new last row when the armed row is deleted
    rearm_after_delete: bool,

    grand_total: GrandTotal,

    observers: Vec<(SubscriptionId, Box<dyn TableObserver>)>,
    next_subscription: u64,
}

impl Table {
    /// Create an empty, unarmed table
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            next_id: 1,
            armed: None,
            rearm_after_delete: false,
            grand_total: GrandTotal::default(),
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn with_rearm_after_delete(mut self, rearm: bool) -> Self {
        self.rearm_after_delete = rearm;
        self
    }

    /// Change the delete policy; the current watch is left as it is
    pub fn set_rearm_after_delete(&mut self, rearm: bool) {
        self.rearm_after_delete = rearm;
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Register an observer for all subsequent events
    pub fn subscribe(&mut self, observer: impl TableObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Append a blank row, arm the auto-append watch on it and return its id.
    pub fn append_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;

        let row = Row::new(id);
        let snapshot = row.snapshot();
        self.rows.push(row);
        self.armed = Some(id);
        debug!(row = %id, "appended row");

        self.emit(TableEvent::RowCreated { row: snapshot });
        self.recompute_total();
        id
    }

    /// Set one input of a row and recompute it, the total and the auto-append
    /// watch.
    ///
    /// Unknown ids are ignored; returns whether a row was edited.
    pub fn edit_row(&mut self, id: RowId, field: Field, raw: impl Into<String>) -> bool {
        let Some(index) = self.position(id) else {
            debug!(row = %id, %field, "edit ignored: no such row");
            return false;
        };

        let row = &mut self.rows[index];
        row.set(field, raw);
        let snapshot = row.snapshot();
        debug!(row = %id, %field, value = %row.raw(field), sqft = %snapshot.square_feet, "edited row");

        self.emit(TableEvent::RowUpdated { row: snapshot });
        self.recompute_total();
        self.check_auto_append(index);
        true
    }

    /// Remove a row and recompute the total.
    ///
    /// Unknown ids are ignored; returns whether a row was removed.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(row = %id, "delete ignored: no such row");
            return false;
        };

        self.rows.remove(index);
        if self.armed == Some(id) {
            self.armed = if self.rearm_after_delete {
                self.last_row_id()
            } else {
                None
            };
            debug!(row = %id, armed = ?self.armed, "deleted armed row");
        } else {
            debug!(row = %id, "deleted row");
        }

        self.emit(TableEvent::RowDeleted { id });
        self.recompute_total();
        true
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Rows in display order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.position(id).map(|index| &self.rows[index])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_row_id(&self) -> Option<RowId> {
        self.rows.last().map(Row::id)
    }

    /// Row currently able to trigger an auto-append
    pub fn armed_row(&self) -> Option<RowId> {
        self.armed
    }

    pub fn grand_total(&self) -> GrandTotal {
        self.grand_total
    }

    /// Display-ready copy of the whole table
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            rows: self.rows.iter().map(Row::snapshot).collect(),
            grand_total: self.grand_total,
            grand_total_text: self.grand_total.text(),
            armed_row: self.armed,
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn position(&self, id: RowId) -> Option<usize> {
        self.rows.binary_search_by_key(&id, Row::id).ok()
    }

    fn recompute_total(&mut self) {
        self.grand_total = GrandTotal::recompute(&self.rows);
        trace!(total = %self.grand_total, rows = self.rows.len(), "recomputed grand total");
        self.emit(TableEvent::TotalChanged {
            total: self.grand_total,
        });
    }

    fn check_auto_append(&mut self, index: usize) {
        let row = &self.rows[index];
        if self.armed != Some(row.id()) || self.last_row_id() != Some(row.id()) {
            return;
        }
        if !row.input().has_positive_value() {
            return;
        }

        debug!(row = %row.id(), "auto-append fired");
        self.armed = None;
        self.append_row();
    }

    fn emit(&mut self, event: TableEvent) {
        for (_, observer) in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows)
            .field("next_id", &self.next_id)
            .field("armed", &self.armed)
            .field("rearm_after_delete", &self.rearm_after_delete)
            .field("grand_total", &self.grand_total)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Serializable view of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub rows: Vec<RowSnapshot>,
    pub grand_total: GrandTotal,
    pub grand_total_text: String,
    pub armed_row: Option<RowId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    /// Table seeded with one row, as at startup
    fn seeded() -> (Table, RowId) {
        let mut table = Table::new();
        let id = table.append_row();
        (table, id)
    }

    fn ids(table: &Table) -> Vec<u64> {
        table.rows().iter().map(|r| r.id().0).collect()
    }

    fn fill(table: &mut Table, id: RowId, height: &str, width: &str) {
        table.edit_row(id, Field::Height, height);
        table.edit_row(id, Field::Width, width);
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.armed_row(), None);
        assert_eq!(table.grand_total().text(), "0.00");
    }

    #[test]
    fn test_append_assigns_increasing_ids_and_arms() {
        let mut table = Table::new();
        assert_eq!(table.append_row(), RowId(1));
        assert_eq!(table.armed_row(), Some(RowId(1)));
        assert_eq!(table.append_row(), RowId(2));
        assert_eq!(table.armed_row(), Some(RowId(2)));
        assert!(table.row(RowId(2)).unwrap().derived().is_empty());
    }

    #[test]
    fn test_typing_in_last_row_appends_once() {
        let (mut table, first) = seeded();

        table.edit_row(first, Field::Height, "3");
        assert_eq!(ids(&table), vec![1, 2]);
        assert_eq!(table.armed_row(), Some(RowId(2)));

        // Further edits to the disarmed row never append again
        table.edit_row(first, Field::Height, "");
        table.edit_row(first, Field::Height, "4");
        table.edit_row(first, Field::Width, "9");
        assert_eq!(ids(&table), vec![1, 2]);
    }

    #[test]
    fn test_width_also_triggers_append() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Width, "10");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_zero_or_negative_does_not_append() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Height, "0");
        table.edit_row(first, Field::Width, "-5");
        table.edit_row(first, Field::Height, "abc");
        assert_eq!(table.len(), 1);
        assert_eq!(table.armed_row(), Some(first));

        table.edit_row(first, Field::Height, "0.01");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_editing_non_last_row_does_not_append() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Height, "12");
        table.edit_row(first, Field::Width, "12");
        assert_eq!(table.len(), 2);

        table.edit_row(first, Field::Height, "24");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_grand_total_tracks_edits() {
        let (mut table, first) = seeded();
        fill(&mut table, first, "36", "24");
        let second = table.last_row_id().unwrap();
        fill(&mut table, second, "5", "5");

        assert!((table.grand_total().value() - 6.1764).abs() < 1e-12);
        assert_eq!(table.grand_total().text(), "6.18");

        table.edit_row(first, Field::Width, "");
        assert!((table.grand_total().value() - 0.1764).abs() < 1e-12);
    }

    #[test]
    fn test_delete_subtracts_row_contribution() {
        let (mut table, first) = seeded();
        fill(&mut table, first, "36", "24");
        let second = table.last_row_id().unwrap();
        fill(&mut table, second, "7", "7");

        let before = table.grand_total().value();
        let contribution = table.row(second).unwrap().derived().square_feet.0;
        assert!(table.delete_row(second));
        assert!((before - table.grand_total().value() - contribution).abs() < 1e-12);
        assert_eq!(table.grand_total().text(), "6.00");
    }

    #[test]
    fn test_delete_does_not_renumber() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Height, "1");
        let second = table.last_row_id().unwrap();
        table.edit_row(second, Field::Height, "1");
        assert_eq!(ids(&table), vec![1, 2, 3]);

        table.delete_row(RowId(2));
        assert_eq!(ids(&table), vec![1, 3]);
        assert_eq!(table.row(RowId(3)).unwrap().id(), RowId(3));
    }

    #[test]
    fn test_delete_only_row() {
        let (mut table, first) = seeded();
        fill(&mut table, first, "36", "24");
        let second = table.last_row_id().unwrap();
        table.delete_row(second);
        table.delete_row(first);

        assert!(table.is_empty());
        assert_eq!(table.grand_total().text(), "0.00");

        // Stale ids are silent no-ops
        assert!(!table.edit_row(first, Field::Height, "10"));
        assert!(!table.delete_row(first));
        assert!(table.is_empty());
        assert_eq!(table.grand_total().text(), "0.00");
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (mut table, first) = seeded();
        table.delete_row(first);
        assert_eq!(table.append_row(), RowId(2));

        table.edit_row(RowId(2), Field::Width, "4");
        assert_eq!(ids(&table), vec![2, 3]);
    }

    #[test]
    fn test_deleting_armed_row_leaves_table_unarmed() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Height, "10");
        let second = table.last_row_id().unwrap();
        assert_eq!(table.armed_row(), Some(second));

        table.delete_row(second);
        assert_eq!(table.armed_row(), None);
        assert_eq!(table.last_row_id(), Some(first));

        // The new last row was armed once already and is not re-armed
        table.edit_row(first, Field::Width, "10");
        table.edit_row(first, Field::Height, "20");
        assert_eq!(ids(&table), vec![1]);
    }

    #[test]
    fn test_deleting_other_rows_keeps_watch() {
        let (mut table, first) = seeded();
        table.edit_row(first, Field::Height, "10");
        table.edit_row(first, Field::Width, "10");
        let second = table.last_row_id().unwrap();

        // Deleting a non-armed row leaves the watch alone
        table.delete_row(first);
        assert_eq!(table.armed_row(), Some(second));
        table.edit_row(second, Field::Height, "1");
        assert_eq!(ids(&table), vec![2, 3]);
    }

    #[test]
    fn test_rearm_after_delete() {
        let mut table = Table::new().with_rearm_after_delete(true);
        let first = table.append_row();
        table.edit_row(first, Field::Height, "10");
        let second = table.last_row_id().unwrap();

        table.delete_row(second);
        assert_eq!(table.armed_row(), Some(first));

        table.edit_row(first, Field::Width, "10");
        assert_eq!(ids(&table), vec![1, 3]);
    }

    #[test]
    fn test_set_rearm_after_delete_on_live_table() {
        let mut table = Table::new();
        let first = table.append_row();
        table.set_rearm_after_delete(true);
        table.edit_row(first, Field::Height, "10");
        let second = table.last_row_id().unwrap();

        table.delete_row(second);
        assert_eq!(table.armed_row(), Some(first));
    }

    #[test]
    fn test_rearm_after_deleting_only_row() {
        let mut table = Table::new().with_rearm_after_delete(true);
        let first = table.append_row();
        table.delete_row(first);
        assert!(table.is_empty());
        assert_eq!(table.armed_row(), None);
    }

    #[test]
    fn test_event_order_for_edit_that_appends() {
        let (tx, rx) = mpsc::channel();
        let (mut table, first) = seeded();
        table.subscribe(move |event: &TableEvent| {
            let _ = tx.send(event.clone());
        });

        table.edit_row(first, Field::Height, "36");
        let events: Vec<TableEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], TableEvent::RowUpdated { row } if row.id == first));
        assert!(matches!(&events[1], TableEvent::TotalChanged { .. }));
        assert!(matches!(&events[2], TableEvent::RowCreated { row } if row.id == RowId(2)));
        assert!(matches!(&events[3], TableEvent::TotalChanged { .. }));
    }

    #[test]
    fn test_event_order_for_delete() {
        let (tx, rx) = mpsc::channel();
        let (mut table, first) = seeded();
        table.subscribe(move |event: &TableEvent| {
            let _ = tx.send(event.clone());
        });

        table.delete_row(first);
        table.delete_row(first);
        let events: Vec<TableEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                TableEvent::RowDeleted { id: first },
                TableEvent::TotalChanged {
                    total: GrandTotal::default(),
                },
            ]
        );
    }

    #[test]
    fn test_stale_edit_emits_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut table = Table::new();
        table.subscribe(move |event: &TableEvent| {
            let _ = tx.send(event.clone());
        });
        table.edit_row(RowId(42), Field::Height, "1");
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let (tx, rx) = mpsc::channel();
        let mut table = Table::new();
        let sub = table.subscribe(move |event: &TableEvent| {
            let _ = tx.send(event.clone());
        });
        table.append_row();
        assert!(table.unsubscribe(sub));
        assert!(!table.unsubscribe(sub));
        table.append_row();
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_snapshot() {
        let (mut table, first) = seeded();
        fill(&mut table, first, "5", "5");
        let snap = table.snapshot();
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.rows[0].square_feet, "0.18");
        assert_eq!(snap.grand_total_text, "0.18");
        assert_eq!(snap.armed_row, Some(RowId(2)));

        let json = serde_json::to_string(&snap).unwrap();
        let roundtrip: TableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.rows.len(), 2);
        assert_eq!(roundtrip.rows[0].width_rounded, "0.42");
        assert_eq!(roundtrip.grand_total_text, "0.18");
    }

    #[test]
    fn test_headings_follow_field_labels() {
        assert_eq!(COLUMN_HEADINGS[0], Field::Height.label());
        assert_eq!(COLUMN_HEADINGS[1], Field::Width.label());
        assert_eq!(COLUMN_HEADINGS[0], "Height (in)");
        assert_eq!(COLUMN_HEADINGS[7], "Delete");
    }
}
