//! View-model store
//!
//! Holds the normalized outline entities keyed by entity kind and id, the
//! way the view layer consumes them. Snapshots replace each other
//! wholesale; there is no incremental mutation, matching the normalizer's
//! lifecycle contract.

use crate::outline::{CourseModel, OutlineBlocks, SectionModel, SequenceModel};

/// In-memory cache of normalized outline entities
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    blocks: OutlineBlocks,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot. A later snapshot for the same course
    /// simply supersedes the earlier one.
    pub fn replace_outline(&mut self, blocks: OutlineBlocks) {
        self.blocks = blocks;
    }

    pub fn course(&self, id: &str) -> Option<&CourseModel> {
        self.blocks.courses.get(id)
    }

    pub fn section(&self, id: &str) -> Option<&SectionModel> {
        self.blocks.sections.get(id)
    }

    pub fn sequence(&self, id: &str) -> Option<&SequenceModel> {
        self.blocks.sequences.get(id)
    }

    /// Resolve a sequence's full ancestry through the back-references, for
    /// breadcrumb rendering. None if any link in the chain is unset.
    pub fn ancestry(
        &self,
        sequence_id: &str,
    ) -> Option<(&CourseModel, &SectionModel, &SequenceModel)> {
        let sequence = self.sequence(sequence_id)?;
        let section = self.section(sequence.section_id.as_deref()?)?;
        let course = self.course(section.course_id.as_deref()?)?;
        Some((course, section, sequence))
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.courses.is_empty()
            && self.blocks.sections.is_empty()
            && self.blocks.sequences.is_empty()
    }
}
