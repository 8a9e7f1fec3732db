//! Client SDK for the course home APIs of the learning platform LMS
//!
//! The course home surface is a view-and-data-fetching layer: this crate
//! fetches the tab payloads (outline, dates, progress, proctoring,
//! metadata), converts them from the wire format into camelCase view
//! models, and normalizes the outline's flat block snapshot into three
//! cross-referenced entity collections the view layer renders from.
//!
//! # Example
//!
//! ```rust,no_run
//! use course_home_client::{ClientConfig, CourseHomeClient, ModelStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CourseHomeClient::new(ClientConfig {
//!     lms_base_url: "https://lms.example.com".into(),
//!     ..Default::default()
//! });
//!
//! let outline = client.outline_tab("course-v1:edX+Demo+run").await?;
//!
//! let mut store = ModelStore::new();
//! store.replace_outline(outline.course_blocks);
//! if let Some((course, section, sequence)) = store.ancestry("block-v1:some-sequence") {
//!     println!("{} / {} / {}", course.title, section.title, sequence.title);
//! }
//! # Ok(())
//! # }
//! ```

// HTTP client
pub mod client;

// Configuration
pub mod config;

// Error types
pub mod error;

// Outline block models and normalization
pub mod outline;

// View-model store
pub mod store;

// Tab payload models
pub mod tabs;

// Server-time offset estimation
pub mod time;

// Re-export the main types
pub use client::CourseHomeClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use outline::{
    normalize, normalize_value, DiagnosticSink, OutlineBlocks, OutlineTabData, TracingSink,
};
pub use store::ModelStore;
pub use tabs::{
    CourseHomeMetadata, DatesTabData, ProctoringInfo, ProgressTabData, VerifiedMode,
};
pub use time::time_offset_millis;
