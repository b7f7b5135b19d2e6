//! Geometry for a guide page.
//!
//! Section offsets are first estimated from the text so the tracker has
//! something to work with on the very first frame. Once the page has been laid
//! out the app reads the real container bounds back and replaces the estimate
//! with `PageLayout::rendered`. Keep the constants in sync with `app/view.rs`.

use crate::guide_loader::{ContentBlock, GuidePage, GuideSection};

pub const CONTENT_PADDING_PX: f32 = 24.0;
pub const TITLE_BLOCK_HEIGHT_PX: f32 = 96.0;
pub const SECTION_SPACING_PX: f32 = 32.0;
pub const BLOCK_SPACING_PX: f32 = 12.0;
pub const LIST_ITEM_SPACING_PX: f32 = 4.0;
pub const FAQ_BUTTON_PADDING_PX: f32 = 6.0;
pub const FAQ_ANSWER_INDENT_PX: f32 = 16.0;
pub const HEADING_SCALE: f32 = 1.4;
pub const HEADING_LINE_HEIGHT: f32 = 1.3;
pub const SCROLLBAR_ALLOWANCE_PX: f32 = 16.0;
pub const LIST_BULLET: &str = "• ";
pub const FAQ_CLOSED_MARKER: &str = "▸ ";
pub const FAQ_OPEN_MARKER: &str = "▾ ";

/// Rough average glyph advance relative to the font size.
const AVG_GLYPH_WIDTH_EM: f32 = 0.55;
const MIN_TEXT_WIDTH_PX: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub viewport_width: f32,
    pub font_size: f32,
    pub line_spacing: f32,
}

impl LayoutMetrics {
    pub fn text_width(&self) -> f32 {
        let width = if self.viewport_width.is_finite() {
            self.viewport_width
        } else {
            0.0
        };
        (width - 2.0 * CONTENT_PADDING_PX - SCROLLBAR_ALLOWANCE_PX).max(MIN_TEXT_WIDTH_PX)
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    pub fn heading_size(&self) -> f32 {
        self.font_size * HEADING_SCALE
    }

    fn chars_per_line(&self, width: f32, font_size: f32) -> usize {
        let glyph = (font_size * AVG_GLYPH_WIDTH_EM).max(1.0);
        ((width.max(MIN_TEXT_WIDTH_PX) / glyph).floor() as usize).max(1)
    }

    fn text_height(&self, text: &str, width: f32) -> f32 {
        let lines = wrapped_line_count(text, self.chars_per_line(width, self.font_size));
        lines as f32 * self.line_height()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    /// Top of each section measured from the top of the scrollable content.
    pub section_offsets: Vec<f32>,
    pub content_height: f32,
    /// `true` once the numbers come from the laid-out widgets.
    pub rendered: bool,
}

impl PageLayout {
    pub fn rendered(section_offsets: Vec<f32>, content_height: f32) -> Self {
        PageLayout {
            section_offsets,
            content_height,
            rendered: true,
        }
    }
}

/// Lines a greedy word wrap needs for `text` at `chars_per_line`.
pub fn wrapped_line_count(text: &str, chars_per_line: usize) -> usize {
    let width = chars_per_line.max(1);
    let mut lines = 1usize;
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if current == 0 { len } else { current + 1 + len };
        if needed <= width {
            current = needed;
            continue;
        }
        if current > 0 {
            lines += 1;
        }
        // Words longer than a line break across several.
        lines += len.saturating_sub(1) / width;
        current = match len % width {
            0 => width,
            rest => rest,
        };
    }
    lines
}

/// Height of one section given which of its FAQ items are open.
pub fn measure_section(section: &GuideSection, expanded: &[bool], metrics: &LayoutMetrics) -> f32 {
    let width = metrics.text_width();
    let heading_size = metrics.heading_size();
    let heading_lines = wrapped_line_count(
        &section.label,
        metrics.chars_per_line(width, heading_size),
    );
    let mut height = heading_lines as f32 * heading_size * HEADING_LINE_HEIGHT;

    let mut faq_idx = 0usize;
    for block in &section.blocks {
        height += BLOCK_SPACING_PX;
        height += match block {
            ContentBlock::Paragraph { text } => metrics.text_height(text, width),
            ContentBlock::List { items } => {
                let text_height: f32 = items
                    .iter()
                    .map(|item| metrics.text_height(&format!("{LIST_BULLET}{item}"), width))
                    .sum();
                text_height + LIST_ITEM_SPACING_PX * items.len().saturating_sub(1) as f32
            }
            ContentBlock::Faq { question, answer } => {
                let open = expanded.get(faq_idx).copied().unwrap_or(false);
                faq_idx += 1;
                let button_width = width - 2.0 * FAQ_BUTTON_PADDING_PX;
                let question_height =
                    metrics.text_height(&format!("{FAQ_CLOSED_MARKER}{question}"), button_width)
                        + 2.0 * FAQ_BUTTON_PADDING_PX;
                if open {
                    question_height
                        + LIST_ITEM_SPACING_PX
                        + metrics.text_height(answer, width - FAQ_ANSWER_INDENT_PX)
                } else {
                    question_height
                }
            }
        };
    }

    height
}

/// Estimated offsets for every section of `page`.
pub fn layout_page(page: &GuidePage, expanded: &[Vec<bool>], metrics: &LayoutMetrics) -> PageLayout {
    let mut section_offsets = Vec::with_capacity(page.sections.len());
    let mut offset = CONTENT_PADDING_PX + TITLE_BLOCK_HEIGHT_PX;

    for (idx, section) in page.sections.iter().enumerate() {
        offset += SECTION_SPACING_PX;
        let open = expanded.get(idx).map(Vec::as_slice).unwrap_or(&[]);
        let height = measure_section(section, open, metrics);
        section_offsets.push(offset);
        offset += height;
    }

    PageLayout {
        section_offsets,
        content_height: offset + CONTENT_PADDING_PX,
        rendered: false,
    }
}
