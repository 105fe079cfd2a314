//! Status Bar (Bottom)
//!
//! Displays:
//! - Row count
//! - Last worksheet event

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use sqft_core::Table;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(table: &Table, status: &'a str) -> Element<'a, Message> {
    let rows = match table.len() {
        1 => "1 row".to_string(),
        n => format!("{} rows", n),
    };

    row![
        text(rows).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
