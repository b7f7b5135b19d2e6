use super::messages::Message;
use super::state::{
    App, CONTENT_SCROLL_ID, MAX_FONT_SIZE, MIN_FONT_SIZE, PAGE_PADDING_PX, PAGE_SPACING_PX,
    PROGRESS_BAR_HEIGHT_PX, PageSession, SIDEBAR_GAP_PX, TITLE_CONTAINER_ID, section_container_id,
};
use crate::config::ThemeMode;
use crate::guide_loader::{ContentBlock, GuideSection};
use crate::layout::{
    BLOCK_SPACING_PX, CONTENT_PADDING_PX, FAQ_ANSWER_INDENT_PX, FAQ_BUTTON_PADDING_PX,
    FAQ_CLOSED_MARKER, FAQ_OPEN_MARKER, HEADING_LINE_HEIGHT, LIST_BULLET, LIST_ITEM_SPACING_PX,
    SECTION_SPACING_PX,
};
use iced::alignment::Vertical;
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{
    Column, button, column, container, horizontal_space, progress_bar, row, scrollable, slider,
    text,
};
use iced::{Element, Length, Padding};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match &self.page {
            Some(page) => self.page_view(page),
            None => self.index_view(),
        }
    }

    fn index_view(&self) -> Element<'_, Message> {
        let font_size = self.config.font_size as f32;
        let entries = self.library.iter().enumerate().map(|(idx, guide)| {
            button(
                column![
                    text(guide.title.as_str()).size(font_size * 1.2),
                    text(guide.summary.as_str()).size(font_size * 0.9),
                ]
                .spacing(4),
            )
            .on_press(Message::OpenGuide(idx))
            .style(button::secondary)
            .padding(12)
            .width(Length::Fill)
            .into()
        });

        let header = row![
            text("Guides").size(font_size * 1.8),
            horizontal_space(),
            self.theme_toggle(),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        column![
            header,
            scrollable(Column::with_children(entries).spacing(10)).height(Length::Fill),
        ]
        .padding(PAGE_PADDING_PX)
        .spacing(PAGE_SPACING_PX)
        .into()
    }

    fn page_view<'a>(&'a self, page: &'a PageSession) -> Element<'a, Message> {
        let font_size = self.config.font_size as f32;

        let top_bar = row![
            button("Back to guides").on_press(Message::CloseGuide),
            text(page.guide.title.as_str()).size(font_size * 1.2),
            horizontal_space(),
            text(format!("Font: {}", self.config.font_size)),
            slider(
                MIN_FONT_SIZE as f32..=MAX_FONT_SIZE as f32,
                font_size,
                |value| Message::FontSizeChanged(value.round() as u32),
            )
            .width(Length::Fixed(140.0)),
            self.theme_toggle(),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        let progress = progress_bar(0.0..=1.0, page.sync.progress())
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT_PX));

        let toc = Column::with_children(page.sync.entries().into_iter().map(|entry| {
            let active = entry.active;
            button(text(entry.label).size(font_size * 0.95))
                .on_press(Message::SectionSelected(entry.id))
                .style(move |theme, status| {
                    if active {
                        button::primary(theme, status)
                    } else {
                        button::text(theme, status)
                    }
                })
                .width(Length::Fill)
                .into()
        }))
        .spacing(4);
        let sidebar = container(scrollable(toc))
            .width(Length::Fixed(self.config.sidebar_width))
            .height(Length::Fill);

        // Child order and spacing mirror `layout::layout_page`; the ids let the
        // runtime read the real section bounds back.
        let mut children: Vec<Element<'a, Message>> =
            Vec::with_capacity(page.guide.sections.len() + 1);
        children.push(
            container(
                column![
                    text(page.guide.title.as_str()).size(font_size * 1.8),
                    text(page.guide.summary.as_str()).size(font_size),
                ]
                .spacing(8),
            )
            .id(TITLE_CONTAINER_ID.clone())
            .width(Length::Fill)
            .into(),
        );
        for (idx, section) in page.guide.sections.iter().enumerate() {
            children.push(self.section_view(page, idx, section));
        }

        let content = scrollable(
            Column::with_children(children)
                .spacing(SECTION_SPACING_PX)
                .padding(CONTENT_PADDING_PX)
                .width(Length::Fill),
        )
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_width: viewport.bounds().width,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .id(CONTENT_SCROLL_ID.clone())
        .width(Length::Fill)
        .height(Length::Fill);

        column![
            top_bar,
            progress,
            row![sidebar, content]
                .spacing(SIDEBAR_GAP_PX)
                .height(Length::Fill),
        ]
        .padding(PAGE_PADDING_PX)
        .spacing(PAGE_SPACING_PX)
        .height(Length::Fill)
        .into()
    }

    /// One section at its natural height.
    fn section_view<'a>(
        &'a self,
        page: &'a PageSession,
        idx: usize,
        section: &'a GuideSection,
    ) -> Element<'a, Message> {
        let metrics = self.layout_metrics();
        let mut blocks: Vec<Element<'a, Message>> = vec![
            text(section.label.as_str())
                .size(metrics.heading_size())
                .line_height(LineHeight::Relative(HEADING_LINE_HEIGHT))
                .wrapping(Wrapping::WordOrGlyph)
                .into(),
        ];

        let mut faq_idx = 0usize;
        for block in &section.blocks {
            let element = match block {
                ContentBlock::Paragraph { text: body } => self.body_text(body.clone()),
                ContentBlock::List { items } => Column::with_children(
                    items
                        .iter()
                        .map(|item| self.body_text(format!("{LIST_BULLET}{item}"))),
                )
                .spacing(LIST_ITEM_SPACING_PX)
                .into(),
                ContentBlock::Faq { question, answer } => {
                    let item = faq_idx;
                    faq_idx += 1;
                    let open = page.is_faq_open(idx, item);
                    let marker = if open {
                        FAQ_OPEN_MARKER
                    } else {
                        FAQ_CLOSED_MARKER
                    };
                    let toggle = button(self.body_text(format!("{marker}{question}")))
                        .on_press(Message::FaqToggled { section: idx, item })
                        .padding(FAQ_BUTTON_PADDING_PX)
                        .style(button::text)
                        .width(Length::Fill);
                    let mut faq = column![toggle].spacing(LIST_ITEM_SPACING_PX);
                    if open {
                        faq = faq.push(container(self.body_text(answer.clone())).padding(
                            Padding {
                                left: FAQ_ANSWER_INDENT_PX,
                                ..Padding::ZERO
                            },
                        ));
                    }
                    faq.into()
                }
            };
            blocks.push(element);
        }

        container(
            Column::with_children(blocks)
                .spacing(BLOCK_SPACING_PX)
                .width(Length::Fill),
        )
        .id(section_container_id(idx))
        .width(Length::Fill)
        .into()
    }

    fn body_text<'a>(&self, content: String) -> Element<'a, Message> {
        text(content)
            .size(self.config.font_size as f32)
            .line_height(LineHeight::Relative(self.config.line_spacing))
            .wrapping(Wrapping::WordOrGlyph)
            .width(Length::Fill)
            .into()
    }

    fn theme_toggle<'a>(&self) -> Element<'a, Message> {
        let label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        button(label).on_press(Message::ToggleTheme).into()
    }
}
