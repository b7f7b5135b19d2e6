use tracing::warn;

/// One entry of a page's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: String,
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        SectionDescriptor {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered sections plus their last measured top offsets.
///
/// Offsets start as NaN until the first measurement lands; a NaN offset never
/// crosses the activation line, so an unmeasured page reports its first
/// section as active.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
    offsets: Vec<f32>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        let offsets = vec![f32::NAN; sections.len()];
        SectionRegistry { sections, offsets }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn first(&self) -> Option<&SectionDescriptor> {
        self.sections.first()
    }

    pub fn get(&self, idx: usize) -> Option<&SectionDescriptor> {
        self.sections.get(idx)
    }

    /// Sections in document order together with their measured offsets.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionDescriptor, f32)> {
        self.sections.iter().zip(self.offsets.iter().copied())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Current top offset for `id`. Unmeasured sections resolve to the top of
    /// the page.
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        let idx = self.index_of(id)?;
        let offset = self.offsets.get(idx).copied().unwrap_or(f32::NAN);
        Some(if offset.is_finite() { offset } else { 0.0 })
    }

    pub fn is_measured(&self) -> bool {
        !self.offsets.is_empty() && self.offsets.iter().all(|offset| offset.is_finite())
    }

    /// Replace every offset at once. Returns `true` when anything moved.
    pub fn replace_offsets(&mut self, mut offsets: Vec<f32>) -> bool {
        if offsets.len() != self.sections.len() {
            warn!(
                measured = offsets.len(),
                sections = self.sections.len(),
                "Section measurement count mismatch; padding with unmeasured offsets"
            );
            offsets.resize(self.sections.len(), f32::NAN);
        }
        let changed = offsets.len() != self.offsets.len()
            || offsets
                .iter()
                .zip(self.offsets.iter())
                .any(|(new, old)| !same_offset(*new, *old));
        self.offsets = offsets;
        changed
    }
}

fn same_offset(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}
