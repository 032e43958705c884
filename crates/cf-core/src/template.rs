//! Estimate templates: reusable, parameterized checklists of norm-bound
//! formulas representing a whole building type (e.g. "new build",
//! "renovate bathroom"). A project instantiates a template by evaluating
//! every task's formula against that project's parameters.

use serde::{Deserialize, Serialize};

/// A named template grouping an ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Storage id (0 for not-yet-persisted)
    #[serde(default)]
    pub id: i64,

    /// Template name, unique among templates
    pub name: String,

    /// Foundation system this template assumes, e.g. "mong_bang"
    #[serde(default)]
    pub foundation_type: String,

    /// Roof system this template assumes, e.g. "mai_ton"
    #[serde(default)]
    pub roof_type: String,

    /// Inactive templates are kept for history but not offered for new estimates
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// One formula-bound task inside a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateTask {
    /// Storage id (0 for not-yet-persisted)
    #[serde(default)]
    pub id: i64,

    /// Section the emitted item is grouped under, e.g. "Phần móng"
    pub section_name: String,

    /// Work item name
    pub item_name: String,

    /// Norm code used to roll up the unit price; empty means "price later"
    #[serde(default)]
    pub norm_code: String,

    /// Unit of the emitted item
    pub unit: String,

    /// Arithmetic formula over project parameters, e.g. "san_nha * so_tang * 1.05"
    pub formula: String,

    /// Free-form category tag used by category-driven recomputes
    #[serde(default)]
    pub category: String,

    /// Position within the section
    #[serde(default)]
    pub sort_order: i32,
}

/// The ordered task list one recompute evaluates.
///
/// Tasks keep the order they were loaded in: section blocks in first-seen
/// order, `sort_order` within a section. The pipeline relies on this for
/// deterministic output.
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    tasks: Vec<TemplateTask>,
}

impl TaskSnapshot {
    /// Snapshot over an already-ordered task list.
    pub fn new(tasks: Vec<TemplateTask>) -> Self {
        Self { tasks }
    }

    /// Tasks in evaluation order.
    pub fn tasks(&self) -> &[TemplateTask] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if the snapshot holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
