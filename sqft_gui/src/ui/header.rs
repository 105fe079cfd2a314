//! Header component

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the application header with the worksheet title
pub fn view_header(title: &str) -> Element<'_, Message> {
    row![
        text(title).size(24),
        Space::new().width(Length::Fill),
        text("Measurements in inches").size(12).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
