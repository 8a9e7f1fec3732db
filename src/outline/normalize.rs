//! Outline block normalization
//!
//! Converts the outline API's flat block-id → raw block mapping into three
//! keyed entity collections (courses, sections, sequences), then decorates
//! each child entity with a reference back to its parent. Structural
//! inconsistencies are reported through the injected diagnostic sink and
//! never abort the pipeline; outline data can be large and partially stale,
//! and one bad block must not blank the whole page.

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::blocks::{
    BlockKind, CourseModel, OutlineBlocks, RawBlock, SectionModel, SequenceModel,
};
use crate::error::{ApiError, Result};

/// Injected logging capability for structural diagnostics.
///
/// Keeps the normalizer a pure function for testing. Sinks are
/// fire-and-forget: they must not block and must not panic.
pub trait DiagnosticSink {
    fn diagnostic(&self, message: &str);
}

/// Production sink, emits diagnostics through `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn diagnostic(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Normalize a flat block snapshot into keyed entity collections.
///
/// `course_id` is the externally supplied course identifier; the course
/// entity is keyed by it, not by the course block's own id. At most one
/// course per invocation is assumed. Unknown block types and dangling child
/// references degrade to diagnostics; the only error is an empty
/// `course_id`, which is a caller bug rather than incomplete outline data.
pub fn normalize(
    course_id: &str,
    blocks: &HashMap<String, RawBlock>,
    sink: &dyn DiagnosticSink,
) -> Result<OutlineBlocks> {
    if course_id.is_empty() {
        return Err(ApiError::Precondition(
            "course_id must be a non-empty identifier".to_string(),
        ));
    }

    let mut models = OutlineBlocks::default();

    for block in blocks.values() {
        match BlockKind::classify(&block.block_type) {
            BlockKind::Course => {
                models.courses.insert(
                    course_id.to_string(),
                    CourseModel {
                        id: course_id.to_string(),
                        title: block.display_name.clone(),
                        effort_time: block.effort_time,
                        effort_activities: block.effort_activities,
                        section_ids: block.children.clone().unwrap_or_default(),
                    },
                );
            }
            BlockKind::Section => {
                models.sections.insert(
                    block.id.clone(),
                    SectionModel {
                        id: block.id.clone(),
                        complete: block.complete.unwrap_or_default(),
                        title: block.display_name.clone(),
                        effort_time: block.effort_time,
                        effort_activities: block.effort_activities,
                        resume_block: block.resume_block.unwrap_or_default(),
                        sequence_ids: block.children.clone().unwrap_or_default(),
                        course_id: None,
                    },
                );
            }
            BlockKind::Sequence => {
                let show_link = block
                    .legacy_web_url
                    .as_deref()
                    .is_some_and(|url| !url.is_empty());
                models.sequences.insert(
                    block.id.clone(),
                    SequenceModel {
                        id: block.id.clone(),
                        complete: block.complete.unwrap_or_default(),
                        description: block.description.clone(),
                        due: block.due.clone(),
                        effort_time: block.effort_time,
                        effort_activities: block.effort_activities,
                        icon: block.icon.clone(),
                        title: block.display_name.clone(),
                        legacy_web_url: block.legacy_web_url.clone(),
                        show_link,
                        section_id: None,
                    },
                );
            }
            BlockKind::Unknown => {
                sink.diagnostic(&format!(
                    "Unexpected course block type: {} with ID {}. Expected block types are course, chapter, and sequential.",
                    block.block_type, block.id
                ));
            }
        }
    }

    // Walk each parent's child list and decorate the children with a
    // reference back to their parent, now that every entity exists.
    for course in models.courses.values() {
        for section_id in &course.section_ids {
            if let Some(section) = models.sections.get_mut(section_id) {
                section.course_id = Some(course.id.clone());
            }
        }
    }

    for section in models.sections.values() {
        for sequence_id in &section.sequence_ids {
            match models.sequences.get_mut(sequence_id) {
                Some(sequence) => sequence.section_id = Some(section.id.clone()),
                None => sink.diagnostic(&format!(
                    "Section {} has child block {}, but that block is not in the list of sequences.",
                    section.id, sequence_id
                )),
            }
        }
    }

    Ok(models)
}

/// Normalize outline blocks straight from the API response value.
///
/// `blocks` must be a JSON object keyed by block id; anything else is a
/// contract violation by the caller, distinct from incomplete outline data.
/// Individual blocks that fail to parse are dropped with a diagnostic.
pub fn normalize_value(
    course_id: &str,
    blocks: &JsonValue,
    sink: &dyn DiagnosticSink,
) -> Result<OutlineBlocks> {
    let map = blocks.as_object().ok_or_else(|| {
        ApiError::Precondition("outline blocks must be a JSON object keyed by block id".to_string())
    })?;

    let mut raw = HashMap::with_capacity(map.len());
    for (id, value) in map {
        match serde_json::from_value::<RawBlock>(value.clone()) {
            Ok(block) => {
                raw.insert(id.clone(), block);
            }
            Err(err) => sink.diagnostic(&format!("Dropping malformed course block {id}: {err}")),
        }
    }

    normalize(course_id, &raw, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Test sink that records every diagnostic
    #[derive(Default)]
    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn diagnostic(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn block(id: &str, block_type: &str, children: Option<Vec<&str>>) -> RawBlock {
        serde_json::from_value(json!({
            "id": id,
            "type": block_type,
            "display_name": format!("{id} name"),
            "children": children,
        }))
        .unwrap()
    }

    fn three_level_blocks() -> HashMap<String, RawBlock> {
        let mut blocks = HashMap::new();
        blocks.insert("C".to_string(), block("C", "course", Some(vec!["S1"])));
        blocks.insert("S1".to_string(), block("S1", "chapter", Some(vec!["Q1"])));
        blocks.insert("Q1".to_string(), block("Q1", "sequential", None));
        blocks
    }

    #[test]
    fn links_course_sections_and_sequences() {
        let sink = RecordingSink::default();
        let models = normalize("course-v1:edX+Demo+run", &three_level_blocks(), &sink).unwrap();

        let course = &models.courses["course-v1:edX+Demo+run"];
        assert_eq!(course.id, "course-v1:edX+Demo+run");
        assert_eq!(course.title, "C name");
        assert_eq!(course.section_ids, vec!["S1"]);

        let section = &models.sections["S1"];
        assert_eq!(section.course_id.as_deref(), Some("course-v1:edX+Demo+run"));
        assert_eq!(section.sequence_ids, vec!["Q1"]);

        let sequence = &models.sequences["Q1"];
        assert_eq!(sequence.section_id.as_deref(), Some("S1"));
        assert!(!sequence.show_link);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn unknown_block_type_is_skipped_with_diagnostic() {
        let sink = RecordingSink::default();
        let mut blocks = three_level_blocks();
        blocks.insert("V1".to_string(), block("V1", "vertical", None));

        let models = normalize("C", &blocks, &sink).unwrap();

        assert_eq!(models.courses.len(), 1);
        assert_eq!(models.sections.len(), 1);
        assert_eq!(models.sequences.len(), 1);
        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("vertical"));
        assert!(messages[0].contains("V1"));
    }

    #[test]
    fn dangling_sequence_reference_is_tolerated() {
        let sink = RecordingSink::default();
        let mut blocks = three_level_blocks();
        blocks.insert(
            "S1".to_string(),
            block("S1", "chapter", Some(vec!["Q1", "Q2"])),
        );

        let models = normalize("C", &blocks, &sink).unwrap();

        // The child list is preserved verbatim even though Q2 never existed.
        assert_eq!(models.sections["S1"].sequence_ids, vec!["Q1", "Q2"]);
        assert!(!models.sequences.contains_key("Q2"));
        assert_eq!(models.sequences["Q1"].section_id.as_deref(), Some("S1"));
        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("S1"));
        assert!(messages[0].contains("Q2"));
    }

    #[test]
    fn section_missing_from_course_children_is_silent() {
        let sink = RecordingSink::default();
        let mut blocks = HashMap::new();
        blocks.insert("C".to_string(), block("C", "course", Some(vec!["S1", "S2"])));
        blocks.insert("S1".to_string(), block("S1", "chapter", None));

        let models = normalize("C", &blocks, &sink).unwrap();

        assert_eq!(models.courses["C"].section_ids, vec!["S1", "S2"]);
        assert_eq!(models.sections["S1"].course_id.as_deref(), Some("C"));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty_collections() {
        let sink = RecordingSink::default();
        let models = normalize("C", &HashMap::new(), &sink).unwrap();

        assert!(models.courses.is_empty());
        assert!(models.sections.is_empty());
        assert!(models.sequences.is_empty());
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn legacy_url_drives_show_link() {
        let sink = RecordingSink::default();
        let mut blocks = HashMap::new();
        blocks.insert(
            "Q1".to_string(),
            serde_json::from_value(json!({
                "id": "Q1",
                "type": "sequential",
                "display_name": "Quiz",
                "legacy_web_url": "/some/path",
            }))
            .unwrap(),
        );
        blocks.insert(
            "Q2".to_string(),
            serde_json::from_value(json!({
                "id": "Q2",
                "type": "sequential",
                "display_name": "Quiz 2",
                "legacy_web_url": "",
            }))
            .unwrap(),
        );

        let models = normalize("C", &blocks, &sink).unwrap();

        let linked = &models.sequences["Q1"];
        assert!(linked.show_link);
        assert_eq!(linked.legacy_web_url.as_deref(), Some("/some/path"));
        assert!(!models.sequences["Q2"].show_link);
    }

    #[test]
    fn child_order_is_preserved() {
        let sink = RecordingSink::default();
        let mut blocks = HashMap::new();
        blocks.insert(
            "C".to_string(),
            block("C", "course", Some(vec!["S3", "S1", "S2"])),
        );
        for id in ["S1", "S2", "S3"] {
            blocks.insert(id.to_string(), block(id, "chapter", Some(vec!["Qz", "Qa"])));
        }

        let models = normalize("C", &blocks, &sink).unwrap();

        assert_eq!(models.courses["C"].section_ids, vec!["S3", "S1", "S2"]);
        assert_eq!(models.sections["S2"].sequence_ids, vec!["Qz", "Qa"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let sink = RecordingSink::default();
        let blocks = three_level_blocks();

        let first = normalize("C", &blocks, &sink).unwrap();
        let second = normalize("C", &blocks, &sink).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_course_id_is_a_precondition_error() {
        let sink = RecordingSink::default();
        let result = normalize("", &HashMap::new(), &sink);

        assert!(matches!(result, Err(ApiError::Precondition(_))));
    }

    #[test]
    fn non_object_blocks_value_is_a_precondition_error() {
        let sink = RecordingSink::default();
        let result = normalize_value("C", &json!(["not", "a", "mapping"]), &sink);

        assert!(matches!(result, Err(ApiError::Precondition(_))));
    }

    #[test]
    fn malformed_block_is_dropped_with_diagnostic() {
        let sink = RecordingSink::default();
        let blocks = json!({
            "C": { "id": "C", "type": "course", "display_name": "Course" },
            "bad": { "display_name": "no id or type" },
        });

        let models = normalize_value("C", &blocks, &sink).unwrap();

        assert_eq!(models.courses.len(), 1);
        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("bad"));
    }
}
