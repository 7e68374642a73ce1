use uuid::Uuid;

use crate::model::ResourceTyped;
use crate::model::entity::{Course, Lesson, Module, Vitrine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitrineNode {
    pub id: Uuid,
    pub name: String,
    pub order: Option<i32>,
    pub courses: Vec<CourseNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNode {
    pub id: Uuid,
    pub name: String,
    pub order: Option<i32>,
    pub modules: Vec<ModuleNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub id: Uuid,
    pub name: String,
    pub order: Option<i32>,
    pub lessons: Vec<LessonNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNode {
    pub id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub lesson_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail: Option<String>,
    pub order: Option<i32>,
}

/// A flat row carrying the ID of its parent one level up.
pub trait TreeRow: ResourceTyped {
    type Node: Ordered;

    fn id(&self) -> Uuid;
    fn parent_id(&self) -> Uuid;
    fn into_node(self) -> Self::Node;
}

pub trait Ordered {
    fn order(&self) -> Option<i32>;

    /// Unset order sorts as 0.
    fn sort_key(&self) -> i32 {
        self.order().unwrap_or(0)
    }
}

pub trait TreeNode {
    type Child: Ordered;

    fn children_mut(&mut self) -> &mut Vec<Self::Child>;
}

impl From<Vitrine> for VitrineNode {
    fn from(row: Vitrine) -> Self {
        Self {
            id: row.id,
            name: row.name,
            order: row.order_index,
            courses: Vec::new(),
        }
    }
}

impl From<Course> for CourseNode {
    fn from(row: Course) -> Self {
        Self {
            id: row.id,
            name: row.name,
            order: row.order_index,
            modules: Vec::new(),
        }
    }
}

impl From<Module> for ModuleNode {
    fn from(row: Module) -> Self {
        Self {
            id: row.id,
            name: row.name,
            order: row.order_index,
            lessons: Vec::new(),
        }
    }
}

impl From<Lesson> for LessonNode {
    fn from(row: Lesson) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            lesson_type: row.lesson_type,
            media_url: row.media_url,
            thumbnail: row.thumbnail,
            order: row.order_index,
        }
    }
}

// A vitrine's parent is its tenant.
impl TreeRow for Vitrine {
    type Node = VitrineNode;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Uuid {
        self.tenant_id
    }

    fn into_node(self) -> VitrineNode {
        self.into()
    }
}

impl TreeRow for Course {
    type Node = CourseNode;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Uuid {
        self.vitrine_id
    }

    fn into_node(self) -> CourseNode {
        self.into()
    }
}

impl TreeRow for Module {
    type Node = ModuleNode;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Uuid {
        self.course_id
    }

    fn into_node(self) -> ModuleNode {
        self.into()
    }
}

impl TreeRow for Lesson {
    type Node = LessonNode;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Uuid {
        self.module_id
    }

    fn into_node(self) -> LessonNode {
        self.into()
    }
}

impl Ordered for VitrineNode {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

impl Ordered for CourseNode {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

impl Ordered for ModuleNode {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

impl Ordered for LessonNode {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

impl TreeNode for VitrineNode {
    type Child = CourseNode;

    fn children_mut(&mut self) -> &mut Vec<CourseNode> {
        &mut self.courses
    }
}

impl TreeNode for CourseNode {
    type Child = ModuleNode;

    fn children_mut(&mut self) -> &mut Vec<ModuleNode> {
        &mut self.modules
    }
}

impl TreeNode for ModuleNode {
    type Child = LessonNode;

    fn children_mut(&mut self) -> &mut Vec<LessonNode> {
        &mut self.lessons
    }
}
