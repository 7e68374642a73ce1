use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::catalog::{CourseNode, LessonNode, ModuleNode, VitrineNode};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// `lessons` is left out of detail responses fetched without children.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<LessonResponse>>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleResponse>>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitrineResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseResponse>>,
}

impl From<LessonNode> for LessonResponse {
    fn from(node: LessonNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            slug: node.slug,
            lesson_type: node.lesson_type,
            media_url: node.media_url,
            thumbnail: node.thumbnail,
            order: node.order,
        }
    }
}

impl ModuleResponse {
    pub fn from_node(node: ModuleNode, include_children: bool) -> Self {
        Self {
            id: node.id,
            name: node.name,
            order: node.order,
            lessons: include_children
                .then(|| node.lessons.into_iter().map(LessonResponse::from).collect()),
        }
    }
}

impl CourseResponse {
    pub fn from_node(node: CourseNode, include_children: bool) -> Self {
        Self {
            id: node.id,
            name: node.name,
            order: node.order,
            modules: include_children.then(|| {
                node.modules
                    .into_iter()
                    .map(|m| ModuleResponse::from_node(m, true))
                    .collect()
            }),
        }
    }
}

impl VitrineResponse {
    pub fn from_node(node: VitrineNode, include_children: bool) -> Self {
        Self {
            id: node.id,
            name: node.name,
            order: node.order,
            courses: include_children.then(|| {
                node.courses
                    .into_iter()
                    .map(|c| CourseResponse::from_node(c, true))
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct VitrineListResponse {
    pub vitrines: Vec<VitrineResponse>,
    pub total: usize,
}

impl VitrineListResponse {
    pub fn from_nodes(nodes: Vec<VitrineNode>) -> Self {
        let vitrines: Vec<_> = nodes
            .into_iter()
            .map(|v| VitrineResponse::from_node(v, true))
            .collect();

        Self {
            total: vitrines.len(),
            vitrines,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct VitrineDetailResponse {
    pub vitrine: VitrineResponse,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseResponse,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ModuleDetailResponse {
    pub module: ModuleResponse,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LessonDetailResponse {
    pub lesson: LessonResponse,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DetailQuery {
    /// Attach the subtree below the requested entity
    #[serde(default)]
    pub include_children: bool,
}
