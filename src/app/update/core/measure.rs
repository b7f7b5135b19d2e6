use super::super::super::state::{TITLE_CONTAINER_ID, section_container_id};
use crate::layout::{CONTENT_PADDING_PX, PageLayout};
use iced::Rectangle;
use iced::advanced::widget::operation::Outcome;
use iced::advanced::widget::{self, Operation};

/// Widget operation that records where the title and every section container
/// of the mounted page were laid out.
///
/// Bounds are untranslated layout bounds, so the scroll position does not
/// matter; offsets are taken relative to the top of the scrollable content.
pub(super) struct SectionBounds {
    title: widget::Id,
    sections: Vec<widget::Id>,
    title_top: Option<f32>,
    section_bounds: Vec<Option<Rectangle>>,
}

impl SectionBounds {
    pub(super) fn new(section_count: usize) -> Self {
        SectionBounds {
            title: widget::Id::from(TITLE_CONTAINER_ID.clone()),
            sections: (0..section_count)
                .map(|idx| widget::Id::from(section_container_id(idx)))
                .collect(),
            title_top: None,
            section_bounds: vec![None; section_count],
        }
    }

    fn layout(&self) -> Option<PageLayout> {
        let content_top = self.title_top? - CONTENT_PADDING_PX;
        let bounds = self
            .section_bounds
            .iter()
            .copied()
            .collect::<Option<Vec<Rectangle>>>()?;
        let content_bottom = bounds
            .last()
            .map(|last| last.y + last.height)
            .unwrap_or(content_top + CONTENT_PADDING_PX);
        Some(PageLayout::rendered(
            bounds.iter().map(|rect| rect.y - content_top).collect(),
            content_bottom + CONTENT_PADDING_PX - content_top,
        ))
    }
}

impl Operation<Option<PageLayout>> for SectionBounds {
    fn container(
        &mut self,
        id: Option<&widget::Id>,
        bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<Option<PageLayout>>),
    ) {
        if let Some(id) = id {
            if *id == self.title {
                self.title_top = Some(bounds.y);
                return;
            }
            if let Some(idx) = self.sections.iter().position(|section| section == id) {
                self.section_bounds[idx] = Some(bounds);
                return;
            }
        }
        operate_on_children(self);
    }

    fn finish(&self) -> Outcome<Option<PageLayout>> {
        Outcome::Some(self.layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 272.0,
            y,
            width: 860.0,
            height,
        }
    }

    fn finished(operation: &SectionBounds) -> Option<PageLayout> {
        match operation.finish() {
            Outcome::Some(layout) => layout,
            _ => None,
        }
    }

    #[test]
    fn offsets_are_relative_to_the_content_top() {
        let mut operation = SectionBounds::new(2);
        let title = widget::Id::from(TITLE_CONTAINER_ID.clone());
        let first = widget::Id::from(section_container_id(0));
        let second = widget::Id::from(section_container_id(1));

        // Sections sit inside an anonymous column, like the real page.
        operation.container(None, rect(76.0, 900.0), &mut |column| {
            column.container(Some(&title), rect(100.0, 90.0), &mut |_| {});
            column.container(Some(&first), rect(222.0, 400.0), &mut |_| {});
            column.container(Some(&second), rect(654.0, 300.0), &mut |_| {});
        });

        let layout = finished(&operation).expect("all containers found");
        assert!(layout.rendered);
        assert_eq!(layout.section_offsets, vec![146.0, 578.0]);
        assert_eq!(layout.content_height, 902.0);
    }

    #[test]
    fn missing_section_yields_no_layout() {
        let mut operation = SectionBounds::new(2);
        let title = widget::Id::from(TITLE_CONTAINER_ID.clone());
        let first = widget::Id::from(section_container_id(0));
        operation.container(Some(&title), rect(100.0, 90.0), &mut |_| {});
        operation.container(Some(&first), rect(222.0, 400.0), &mut |_| {});
        assert!(finished(&operation).is_none());
    }
}
