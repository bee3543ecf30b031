//! Teacher roster commands - add, list, remove

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::roster::{TeacherInput, TeacherStore};

/// Add a teacher profile (or update one when `id` names a stored record)
pub fn add(store: &TeacherStore, input: TeacherInput, id: Option<&str>) -> Result<()> {
    if input.name.trim().is_empty() {
        bail!("Name is required");
    }

    let record = store.save(input, id)?;
    println!(
        "{} {} {}",
        "Saved:".green(),
        record.name,
        format!("({})", record.id).dimmed()
    );
    Ok(())
}

/// List the stored roster as a table
pub fn list(store: &TeacherStore) -> Result<String> {
    let teachers = store.list();

    if teachers.is_empty() {
        return Ok("No teachers yet.".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID"),
            Cell::new("Name"),
            Cell::new("Employee ID"),
            Cell::new("Designation"),
            Cell::new("Basic Pay"),
        ]);

    for teacher in &teachers {
        let pay = teacher
            .basic_pay
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&teacher.id),
            Cell::new(&teacher.name),
            Cell::new(teacher.employee_id.as_deref().unwrap_or("-")),
            Cell::new(teacher.designation.as_deref().unwrap_or("-")),
            Cell::new(pay),
        ]);
    }

    Ok(table.to_string())
}

/// Remove a teacher by id; removing an unknown id is not an error
pub fn remove(store: &TeacherStore, id: &str) -> Result<()> {
    let existing = store.get(id);
    store.delete(id)?;

    match existing {
        Some(teacher) => println!("{} {}", "Deleted:".green(), teacher.name),
        None => println!("No teacher with id {} (nothing to do)", id),
    }
    Ok(())
}
