//! # Worksheet
//!
//! The `Worksheet` is the root container front ends hold: metadata, settings
//! and the row table. It exists only in memory; [`Worksheet::snapshot`]
//! produces a JSON-serializable view for display or export, but nothing is
//! ever loaded back.
//!
//! ## Structure
//!
//! ```text
//! Worksheet
//! ├── meta: WorksheetMeta (version, title, timestamps)
//! ├── settings: WorksheetSettings (auto-append behavior, kept in sync with the table)
//! └── table: Table (rows, grand total, auto-append watch)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sqft_core::row::Field;
//! use sqft_core::worksheet::{Worksheet, WorksheetSettings};
//!
//! let mut sheet = Worksheet::new("Kitchen", WorksheetSettings::default());
//! assert_eq!(sheet.table().len(), 1);
//!
//! let first = sheet.table().rows()[0].id();
//! sheet.edit_row(first, Field::Height, "36");
//! sheet.edit_row(first, Field::Width, "24");
//! assert_eq!(sheet.grand_total_text(), "6.00");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::events::{SubscriptionId, TableObserver};
use crate::row::{Field, RowId};
use crate::table::{Table, TableSnapshot};

/// Current version of the snapshot format
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root worksheet container.
#[derive(Debug)]
pub struct Worksheet {
    /// Worksheet metadata (version, title, timestamps)
    pub meta: WorksheetMeta,

    settings: WorksheetSettings,

    table: Table,
}

impl Worksheet {
    /// Create a worksheet seeded with one empty, armed row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sqft_core::worksheet::{Worksheet, WorksheetSettings};
    ///
    /// let sheet = Worksheet::new("Bathroom", WorksheetSettings::default());
    /// assert_eq!(sheet.meta.title, "Bathroom");
    /// assert_eq!(sheet.table().armed_row(), sheet.table().last_row_id());
    /// ```
    pub fn new(title: impl Into<String>, settings: WorksheetSettings) -> Self {
        let now = Utc::now();
        let mut table = Table::new().with_rearm_after_delete(settings.rearm_after_delete);
        table.append_row();

        let sheet = Worksheet {
            meta: WorksheetMeta {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                created: now,
                modified: now,
            },
            settings,
            table,
        };
        info!(title = %sheet.meta.title, rearm_after_delete = sheet.settings.rearm_after_delete, "worksheet created");
        sheet
    }

    /// Read access to the rows and total
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Register an observer on the underlying table.
    ///
    /// Rows that already exist (the seeded row included) are not replayed;
    /// read them from [`Worksheet::table`] for the initial render.
    pub fn subscribe(&mut self, observer: impl TableObserver + 'static) -> SubscriptionId {
        self.table.subscribe(observer)
    }

    /// Behavior settings
    pub fn settings(&self) -> &WorksheetSettings {
        &self.settings
    }

    /// Replace the settings; the table follows them from the next operation on.
    pub fn set_settings(&mut self, settings: WorksheetSettings) {
        self.table.set_rearm_after_delete(settings.rearm_after_delete);
        self.settings = settings;
        debug!(rearm_after_delete = self.settings.rearm_after_delete, "settings changed");
    }

    /// Edit one input of a row. Unknown ids are ignored.
    pub fn edit_row(&mut self, id: RowId, field: Field, raw: impl Into<String>) -> bool {
        let edited = self.table.edit_row(id, field, raw);
        if edited {
            self.touch();
        }
        edited
    }

    /// Delete a row. Unknown ids are ignored.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        let deleted = self.table.delete_row(id);
        if deleted {
            self.touch();
        }
        deleted
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn grand_total_text(&self) -> String {
        self.table.grand_total().text()
    }

    /// Serializable view of the whole worksheet
    pub fn snapshot(&self) -> WorksheetSnapshot {
        WorksheetSnapshot {
            meta: self.meta.clone(),
            settings: self.settings.clone(),
            table: self.table.snapshot(),
        }
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::new("Untitled", WorksheetSettings::default())
    }
}

/// Worksheet metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetMeta {
    /// Snapshot format version
    pub version: String,

    /// Worksheet title shown in the header
    pub title: String,

    /// When the worksheet was created
    pub created: DateTime<Utc>,

    /// When a row was last edited or deleted
    pub modified: DateTime<Utc>,
}

/// Worksheet behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorksheetSettings {
    /// Arm the new last row when the armed row is deleted.
    ///
    /// Off by default: deleting the armed row stops the worksheet from
    /// growing until a row is appended some other way.
    #[serde(default)]
    pub rearm_after_delete: bool,
}

/// JSON view of a worksheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetSnapshot {
    pub meta: WorksheetMeta,
    pub settings: WorksheetSettings,
    pub table: TableSnapshot,
}
