//! Library screen

use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill};

use albumkit::ui::components::AlbumRow;
use albumkit::ui::render::Renderer;
use albumkit::ui::theme;
use albumkit::ui::widgets::{DotsIndicator, DownloadHeader};
use albumkit::{Style, StyleKey};

use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let renderer = Renderer::new(&self.images);

        let header = renderer.element(
            DownloadHeader::<Message>::new()
                .style(
                    Style::new()
                        .with(StyleKey::Padding, 16.0)
                        .with(StyleKey::MarginLeft, 4.0),
                )
                .view(),
        );

        let body: Element<'_, Message> = if let Some(error) = &self.load_error {
            container(text(error.clone()).size(14).color(theme::TEXT_MUTED))
                .padding(24)
                .into()
        } else if self.records.is_empty() {
            container(text("Loading…").size(14).color(theme::TEXT_MUTED))
                .padding(24)
                .into()
        } else {
            let rows = self.records.iter().map(|record| {
                let album = renderer.element(AlbumRow::new(record, Message::OpenAlbum).view());
                // Context-menu affordance owned by the screen, not the row
                let dots = renderer.element(
                    DotsIndicator::new()
                        .style(Style::new().with(StyleKey::MarginRight, 16.0))
                        .view::<Message>(),
                );
                row![album, dots]
                    .align_y(Alignment::Center)
                    .into()
            });

            scrollable(column(rows))
                .style(theme::list_scrollable)
                .height(Fill)
                .into()
        };

        let footer = text(match &self.last_opened {
            Some(id) => format!("Opened album {id}"),
            None => format!("{} albums", self.records.len()),
        })
        .size(12)
        .color(theme::TEXT_SECONDARY);

        container(column![header, body, container(footer).padding(12)])
            .width(Fill)
            .height(Fill)
            .style(theme::screen)
            .into()
    }
}
