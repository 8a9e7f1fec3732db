//! Course outline: block models, normalization, and the outline tab payload

mod blocks;
mod normalize;
mod tab;

pub use blocks::{BlockKind, CourseModel, OutlineBlocks, RawBlock, SectionModel, SequenceModel};
pub use normalize::{normalize, normalize_value, DiagnosticSink, TracingSink};
pub use tab::{
    AccessExpiration, CourseTool, EnrollAlert, Offer, OutlineTabData, ResumeCourse,
};
