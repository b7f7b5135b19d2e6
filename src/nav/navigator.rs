use super::section::SectionRegistry;
use tracing::debug;

/// Render model for one table-of-contents row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// Section id the reader just clicked, stamped with the tracker generation
/// at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NavigationIntent {
    section_id: String,
    issued_after_sample: u64,
}

/// Table of contents state.
///
/// Two sources feed the highlighted entry: the id computed from scroll
/// position and an optimistic id set on click. The optimistic id only lives
/// until a scroll sample recorded after the click has been processed; from
/// then on the computed id wins.
#[derive(Debug, Default)]
pub struct SectionNavigator {
    intent: Option<NavigationIntent>,
}

impl SectionNavigator {
    /// Record a click on `section_id` and return the scroll target for it,
    /// `offset_top - header_clearance`. Unknown ids are ignored.
    pub fn select(
        &mut self,
        section_id: &str,
        sections: &SectionRegistry,
        header_clearance: f32,
        generation: u64,
    ) -> Option<f32> {
        let Some(top) = sections.offset_of(section_id) else {
            debug!(section = section_id, "Ignoring selection of unknown section");
            return None;
        };
        let clearance = if header_clearance.is_finite() {
            header_clearance
        } else {
            0.0
        };
        self.intent = Some(NavigationIntent {
            section_id: section_id.to_string(),
            issued_after_sample: generation,
        });
        Some(top - clearance)
    }

    /// Drop the optimistic id once a newer sample has been processed.
    /// Returns `true` when an intent was dropped.
    pub fn reconcile(&mut self, processed_generation: u64) -> bool {
        match &self.intent {
            Some(intent) if processed_generation > intent.issued_after_sample => {
                debug!(
                    section = %intent.section_id,
                    "Optimistic section superseded by scroll sample"
                );
                self.intent = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending_intent(&self) -> Option<&str> {
        self.intent.as_ref().map(|intent| intent.section_id.as_str())
    }

    pub fn active_id<'a>(&'a self, computed: Option<&'a str>) -> Option<&'a str> {
        self.pending_intent().or(computed)
    }

    pub fn entries(&self, sections: &SectionRegistry, computed: Option<&str>) -> Vec<NavEntry> {
        let active = self.active_id(computed);
        sections
            .iter()
            .map(|(section, _)| NavEntry {
                id: section.id.clone(),
                label: section.label.clone(),
                active: active == Some(section.id.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::section::SectionDescriptor;

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new(vec![
            SectionDescriptor::new("stadium", "Stadium"),
            SectionDescriptor::new("hotels", "Hotels"),
            SectionDescriptor::new("faq", "FAQ"),
        ]);
        registry.replace_offsets(vec![0.0, 400.0, 900.0]);
        registry
    }

    #[test]
    fn select_targets_offset_minus_clearance() {
        let registry = registry();
        let mut navigator = SectionNavigator::default();
        assert_eq!(navigator.select("hotels", &registry, 120.0, 0), Some(280.0));
        assert_eq!(navigator.pending_intent(), Some("hotels"));
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let registry = registry();
        let mut navigator = SectionNavigator::default();
        assert_eq!(navigator.select("parking", &registry, 120.0, 0), None);
        assert_eq!(navigator.pending_intent(), None);
        assert_eq!(navigator.active_id(Some("stadium")), Some("stadium"));
    }

    #[test]
    fn optimistic_id_wins_until_a_newer_sample_lands() {
        let registry = registry();
        let mut navigator = SectionNavigator::default();
        navigator.select("faq", &registry, 120.0, 4);
        assert_eq!(navigator.active_id(Some("stadium")), Some("faq"));

        assert!(!navigator.reconcile(4));
        assert_eq!(navigator.active_id(Some("stadium")), Some("faq"));

        assert!(navigator.reconcile(5));
        assert_eq!(navigator.active_id(Some("hotels")), Some("hotels"));
    }

    #[test]
    fn entries_mark_exactly_one_active_row() {
        let registry = registry();
        let mut navigator = SectionNavigator::default();
        navigator.select("hotels", &registry, 120.0, 0);
        let entries = navigator.entries(&registry, Some("stadium"));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.iter().filter(|entry| entry.active).count(), 1);
        assert!(entries[1].active);
        assert_eq!(entries[1].label, "Hotels");
    }
}
