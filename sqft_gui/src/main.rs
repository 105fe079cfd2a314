//! # Square Footage Worksheet GUI
//!
//! Graphical front end for the worksheet, built with Iced for native and
//! WASM targets. The window shows one table: type a height and width in
//! inches and the row fills in feet, rounded feet and square feet. Typing
//! into the last row adds the next one; there is no add button.

mod ui;

use std::sync::mpsc::{self, Receiver};

use iced::widget::{column, container};
use iced::{Element, Length, Size};
use tracing::debug;

use sqft_core::{Field, RowId, TableEvent, Worksheet, WorksheetSettings};

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size(Size::new(1000.0, 640.0))
        .run()
}

/// Application state
pub struct App {
    sheet: Worksheet,
    /// Events reported by the worksheet since the last update
    events: Receiver<TableEvent>,
    /// Last lifecycle event, shown in the status bar
    status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A height or width input was edited
    InputChanged(RowId, Field, String),
    /// A row's delete button was pressed
    DeleteRow(RowId),
}

impl App {
    fn new() -> Self {
        let mut sheet = Worksheet::new("Square Footage Worksheet", WorksheetSettings::default());

        let (tx, events) = mpsc::channel();
        sheet.subscribe(move |event: &TableEvent| {
            let _ = tx.send(event.clone());
        });

        App {
            sheet,
            events,
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        format!("{} - {} sq ft", self.sheet.meta.title, self.sheet.grand_total_text())
    }

    fn update(&mut self, message: Message) {
        debug!(?message, "update");
        match message {
            Message::InputChanged(id, field, value) => {
                self.sheet.edit_row(id, field, value);
            }
            Message::DeleteRow(id) => {
                self.sheet.delete_row(id);
            }
        }
        self.drain_events();
    }

    /// Keep the most interesting event for the status bar: row lifecycle
    /// changes win over updates and totals.
    fn drain_events(&mut self) {
        let mut latest: Option<TableEvent> = None;
        for event in self.events.try_iter() {
            let replace = match (&latest, &event) {
                (None, _) => true,
                (Some(TableEvent::RowCreated { .. } | TableEvent::RowDeleted { .. }), _) => false,
                (_, TableEvent::TotalChanged { .. }) => false,
                _ => true,
            };
            if replace {
                latest = Some(event);
            }
        }
        if let Some(event) = latest {
            self.status = event.describe();
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::header::view_header(&self.sheet.meta.title),
            ui::worksheet_table::view_worksheet_table(self.sheet.table()),
            ui::status_bar::view_status_bar(self.sheet.table(), &self.status),
        ]
        .spacing(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .into()
    }
}
