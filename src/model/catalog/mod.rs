//! The vitrine catalog tree: Vitrine → Course → Module → Lesson.
//!
//! Each level is fetched with one flat, tenant-scoped query and stitched
//! together in memory by [`assemble`].

pub mod assemble;

mod tree;
pub use tree::{CourseNode, LessonNode, ModuleNode, VitrineNode};

mod query;
