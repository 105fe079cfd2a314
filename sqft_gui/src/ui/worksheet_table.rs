//! Worksheet Table (Center)
//!
//! One line per row: height and width inputs, four feet columns, square feet
//! and a delete button. The grand total sits under the last row. There is no
//! add button; the table grows when the last row is typed into.

use iced::widget::{button, column, container, row, rule, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use sqft_core::{Field, RowSnapshot, Table, COLUMN_HEADINGS};

use crate::Message;

const INPUT_WIDTH: f32 = 90.0;
const OUTPUT_WIDTH: f32 = 90.0;
const DELETE_WIDTH: f32 = 70.0;

/// Render the worksheet table
pub fn view_worksheet_table(table: &Table) -> Element<'_, Message> {
    let mut rows: Column<'_, Message> = column![].spacing(4);

    for row in table.rows() {
        rows = rows.push(view_row(row.snapshot()));
    }

    if table.is_empty() {
        rows = rows.push(text("(no rows)").size(11).color([0.5, 0.5, 0.5]));
    }

    let total = row![
        Space::new().width(Length::Fill),
        text("Grand Total (sq ft):").size(13),
        text(table.grand_total().text())
            .size(13)
            .width(Length::Fixed(OUTPUT_WIDTH)),
        Space::new().width(Length::Fixed(DELETE_WIDTH)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content = column![
        view_headings(),
        rule::horizontal(1),
        scrollable(rows).height(Length::Fill),
        rule::horizontal(1),
        total,
    ]
    .spacing(6);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(8)
        .into()
}

/// Column headings row
fn view_headings() -> Element<'static, Message> {
    let mut headings: Row<'static, Message> = row![].spacing(4).align_y(Alignment::Center);

    for (index, heading) in COLUMN_HEADINGS.iter().enumerate() {
        let width = match index {
            0 | 1 => INPUT_WIDTH,
            7 => DELETE_WIDTH,
            _ => OUTPUT_WIDTH,
        };
        headings = headings.push(text(*heading).size(11).width(Length::Fixed(width)));
    }

    headings.into()
}

/// One worksheet row
fn view_row(snap: RowSnapshot) -> Element<'static, Message> {
    let id = snap.id;

    let height_input = text_input("", &snap.height_in)
        .on_input(move |s| Message::InputChanged(id, Field::Height, s))
        .width(Length::Fixed(INPUT_WIDTH))
        .padding(4)
        .size(11);

    let width_input = text_input("", &snap.width_in)
        .on_input(move |s| Message::InputChanged(id, Field::Width, s))
        .width(Length::Fixed(INPUT_WIDTH))
        .padding(4)
        .size(11);

    let delete_btn = button(text("Delete").size(10))
        .on_press(Message::DeleteRow(id))
        .padding(Padding::from([3, 8]))
        .style(button::danger)
        .width(Length::Fixed(DELETE_WIDTH));

    row![
        height_input,
        width_input,
        output(snap.height_feet),
        output(snap.width_feet),
        output(snap.height_rounded),
        output(snap.width_rounded),
        output(snap.square_feet),
        delete_btn,
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

fn output(value: String) -> Element<'static, Message> {
    text(value)
        .size(11)
        .width(Length::Fixed(OUTPUT_WIDTH))
        .into()
}
