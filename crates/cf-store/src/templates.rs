//! Template and task persistence.
//!
//! Templates are master data shared by all projects. A recompute loads a
//! [`TaskSnapshot`] (either one template's tasks, or every task tagged
//! with one of a set of categories) and evaluates it against a single
//! project's parameters.

use crate::error::{StoreError, StoreResult, StoreResultExt};
use cf_core::{TaskSnapshot, Template, TemplateTask};
use duckdb::Connection;

/// Insert a template. Returns the generated `template_id`.
pub fn insert_template(conn: &Connection, template: &Template) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO cf.templates (name, foundation_type, roof_type, is_active) VALUES (?, ?, ?, ?)",
        duckdb::params![
            template.name,
            template.foundation_type,
            template.roof_type,
            template.is_active
        ],
    )
    .query_context(&format!("insert template ({})", template.name))?;

    let template_id: i64 = conn
        .query_row(
            "SELECT template_id FROM cf.templates WHERE name = ?",
            duckdb::params![template.name],
            |row| row.get(0),
        )
        .query_context("select template_id")?;
    Ok(template_id)
}

/// Append tasks to a template.
pub fn insert_tasks(
    conn: &Connection,
    template_id: i64,
    tasks: &[TemplateTask],
) -> StoreResult<()> {
    let mut stmt = conn
        .prepare(
            "INSERT INTO cf.template_tasks \
             (template_id, section_name, item_name, norm_code, unit, formula, category, sort_order) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .query_context("prepare insert template_tasks")?;

    for task in tasks {
        stmt.execute(duckdb::params![
            template_id,
            task.section_name,
            task.item_name,
            task.norm_code,
            task.unit,
            task.formula,
            task.category,
            task.sort_order
        ])
        .query_context(&format!("insert template_task ({})", task.item_name))?;
    }
    Ok(())
}

/// Find a template by its unique name.
pub fn find_template(conn: &Connection, name: &str) -> StoreResult<Option<Template>> {
    match conn.query_row(
        "SELECT template_id, name, foundation_type, roof_type, is_active \
         FROM cf.templates WHERE name = ?",
        duckdb::params![name],
        |row| {
            Ok(Template {
                id: row.get(0)?,
                name: row.get(1)?,
                foundation_type: row.get(2)?,
                roof_type: row.get(3)?,
                is_active: row.get(4)?,
            })
        },
    ) {
        Ok(template) => Ok(Some(template)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::QueryError(format!("find_template: {e}"))),
    }
}

/// Fetch a template by id.
pub fn get_template(conn: &Connection, template_id: i64) -> StoreResult<Option<Template>> {
    match conn.query_row(
        "SELECT template_id, name, foundation_type, roof_type, is_active \
         FROM cf.templates WHERE template_id = ?",
        duckdb::params![template_id],
        |row| {
            Ok(Template {
                id: row.get(0)?,
                name: row.get(1)?,
                foundation_type: row.get(2)?,
                roof_type: row.get(3)?,
                is_active: row.get(4)?,
            })
        },
    ) {
        Ok(template) => Ok(Some(template)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::QueryError(format!("get_template: {e}"))),
    }
}

/// List all templates, active first, then by name.
pub fn list_templates(conn: &Connection) -> StoreResult<Vec<Template>> {
    let mut stmt = conn
        .prepare(
            "SELECT template_id, name, foundation_type, roof_type, is_active \
             FROM cf.templates ORDER BY is_active DESC, name",
        )
        .query_context("prepare list templates")?;

    let templates = stmt
        .query_map([], |row| {
            Ok(Template {
                id: row.get(0)?,
                name: row.get(1)?,
                foundation_type: row.get(2)?,
                roof_type: row.get(3)?,
                is_active: row.get(4)?,
            })
        })
        .query_context("query templates")?
        .collect::<Result<_, _>>()
        .query_context("read template rows")?;
    Ok(templates)
}

/// Load one template's tasks in evaluation order: section blocks in
/// authoring order, `sort_order` within each section.
pub fn load_template_tasks(conn: &Connection, template_id: i64) -> StoreResult<TaskSnapshot> {
    let mut stmt = conn
        .prepare(
            "SELECT task_id, section_name, item_name, norm_code, unit, formula, category, sort_order \
             FROM ( \
                 SELECT *, MIN(task_id) OVER (PARTITION BY section_name) AS section_rank \
                 FROM cf.template_tasks WHERE template_id = ? \
             ) ORDER BY section_rank, sort_order, task_id",
        )
        .query_context("prepare load template_tasks")?;

    let tasks = collect_tasks(&mut stmt, duckdb::params![template_id])?;
    Ok(TaskSnapshot::new(tasks))
}

/// Load every task tagged with any of `categories`, across all templates.
///
/// Ordering is `(section_name, sort_order, task_id)` so a category
/// recompute is deterministic regardless of which templates contributed.
pub fn load_tasks_by_categories(
    conn: &Connection,
    categories: &[String],
) -> StoreResult<TaskSnapshot> {
    if categories.is_empty() {
        return Ok(TaskSnapshot::default());
    }

    let placeholders = vec!["?"; categories.len()].join(", ");
    let sql = format!(
        "SELECT task_id, section_name, item_name, norm_code, unit, formula, category, sort_order \
         FROM cf.template_tasks WHERE category IN ({placeholders}) \
         ORDER BY section_name, sort_order, task_id"
    );

    let mut stmt = conn.prepare(&sql).query_context("prepare load by categories")?;
    let params: Vec<&dyn duckdb::ToSql> =
        categories.iter().map(|c| c as &dyn duckdb::ToSql).collect();
    let tasks = collect_tasks(&mut stmt, params.as_slice())?;
    Ok(TaskSnapshot::new(tasks))
}

fn collect_tasks<P: duckdb::Params>(
    stmt: &mut duckdb::Statement,
    params: P,
) -> StoreResult<Vec<TemplateTask>> {
    let tasks = stmt
        .query_map(params, |row| {
            Ok(TemplateTask {
                id: row.get(0)?,
                section_name: row.get(1)?,
                item_name: row.get(2)?,
                norm_code: row.get(3)?,
                unit: row.get(4)?,
                formula: row.get(5)?,
                category: row.get(6)?,
                sort_order: row.get(7)?,
            })
        })
        .query_context("query template_tasks")?
        .collect::<Result<_, _>>()
        .query_context("read template_task rows")?;
    Ok(tasks)
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
