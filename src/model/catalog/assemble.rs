//! In-memory stitching of flat per-level row-sets into catalog trees.
//!
//! Levels are linked top-down: every level keeps its nodes in an arena
//! (`Vec`) plus an ID → slot index, and each child row records the arena slot
//! of its parent. A row whose parent is not in the index is dropped, together
//! with everything below it, since it never enters its own level's index.
//! Once all levels are linked the tree is folded bottom-up by moving every
//! node into its parent's child list.

use std::collections::HashMap;

use uuid::Uuid;

use super::tree::{Ordered, TreeNode, TreeRow};
use super::{CourseNode, ModuleNode, VitrineNode};
use crate::model::entity::{Course, Lesson, Module, Vitrine};

struct Level<N> {
    nodes: Vec<N>,
    parent_slots: Vec<usize>,
    index: HashMap<Uuid, usize>,
}

impl<N: Ordered> Level<N> {
    fn roots<R: TreeRow<Node = N>>(rows: Vec<R>) -> Self {
        let mut level = Self::with_capacity(rows.len());
        for row in rows {
            level.index.insert(row.id(), level.nodes.len());
            level.nodes.push(row.into_node());
        }
        level
    }

    fn link<R: TreeRow<Node = N>>(rows: Vec<R>, parents: &HashMap<Uuid, usize>) -> Self {
        let mut level = Self::with_capacity(rows.len());
        for row in rows {
            let Some(&slot) = parents.get(&row.parent_id()) else {
                tracing::warn!(
                    resource = %R::get_resource_type(),
                    id = %row.id(),
                    parent_id = %row.parent_id(),
                    "dropping catalog row without parent"
                );
                continue;
            };

            level.index.insert(row.id(), level.nodes.len());
            level.parent_slots.push(slot);
            level.nodes.push(row.into_node());
        }
        level
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            parent_slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Moves every node into its parent's child list, then orders each list.
    fn attach_to<P: TreeNode<Child = N>>(self, parents: &mut [P]) {
        for (node, slot) in self.nodes.into_iter().zip(self.parent_slots) {
            if let Some(parent) = parents.get_mut(slot) {
                parent.children_mut().push(node);
            }
        }

        for parent in parents.iter_mut() {
            sort_level(parent.children_mut());
        }
    }

    fn into_sorted(mut self) -> Vec<N> {
        sort_level(&mut self.nodes);
        self.nodes
    }
}

/// Stable, so equal orders keep their input order.
fn sort_level<N: Ordered>(nodes: &mut [N]) {
    nodes.sort_by_key(Ordered::sort_key);
}

pub fn assemble_vitrines(
    vitrines: Vec<Vitrine>,
    courses: Vec<Course>,
    modules: Vec<Module>,
    lessons: Vec<Lesson>,
) -> Vec<VitrineNode> {
    let mut vitrines = Level::roots(vitrines);
    let mut courses = Level::link(courses, &vitrines.index);
    let mut modules = Level::link(modules, &courses.index);
    let lessons = Level::link(lessons, &modules.index);

    lessons.attach_to(&mut modules.nodes);
    modules.attach_to(&mut courses.nodes);
    courses.attach_to(&mut vitrines.nodes);
    vitrines.into_sorted()
}

pub fn assemble_courses(
    courses: Vec<Course>,
    modules: Vec<Module>,
    lessons: Vec<Lesson>,
) -> Vec<CourseNode> {
    let mut courses = Level::roots(courses);
    let mut modules = Level::link(modules, &courses.index);
    let lessons = Level::link(lessons, &modules.index);

    lessons.attach_to(&mut modules.nodes);
    modules.attach_to(&mut courses.nodes);
    courses.into_sorted()
}

pub fn assemble_modules(modules: Vec<Module>, lessons: Vec<Lesson>) -> Vec<ModuleNode> {
    let mut modules = Level::roots(modules);
    let lessons = Level::link(lessons, &modules.index);

    lessons.attach_to(&mut modules.nodes);
    modules.into_sorted()
}
