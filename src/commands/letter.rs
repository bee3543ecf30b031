//! Letter command - render an appointment letter

use anyhow::Result;
use std::path::Path;

use super::utils::{self, RenderFormat};
use crate::documents::AppointmentLetterData;

/// Render the letter and write it to `output` (stdout when omitted)
pub fn execute(
    data: &AppointmentLetterData,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = match format {
        RenderFormat::Html => data.to_html(),
        RenderFormat::Text => data.to_text(),
    };
    utils::write_document(&rendered, output)
}
