//! Receipt command - render a salary receipt

use anyhow::{bail, Result};
use std::path::Path;

use super::utils::{self, RenderFormat};
use crate::documents::{words, SalaryReceiptData};
use crate::roster::TeacherStore;

/// Fill the receipt, optionally merging a stored teacher, and render it
///
/// The amount-in-words line is derived here from the clamped net pay so the
/// renderer only ever sees a consistent record.
pub fn execute(
    store: &TeacherStore,
    mut data: SalaryReceiptData,
    teacher_id: Option<&str>,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(id) = teacher_id {
        match store.get(id) {
            Some(teacher) => data.apply_teacher(&teacher),
            None => bail!("No teacher with id {}. Run `formal-forge teacher list`.", id),
        }
    }

    data.amount_in_words = words::amount_in_words(data.net());

    let rendered = match format {
        RenderFormat::Html => data.to_html(),
        RenderFormat::Text => data.to_text(),
    };
    utils::write_document(&rendered, output)
}
