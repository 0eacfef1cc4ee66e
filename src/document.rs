use std::io::Write;

use crate::cup_types::CupDocument;
use crate::error::{CupError, Result};
use crate::writer::Writer;

/// Write a whole document to `sink` and hand the sink back.
pub fn write_document<W: Write>(doc: &CupDocument, sink: W) -> Result<W> {
    let mut writer = Writer::new(sink)?;

    for wpt in &doc.waypoints {
        writer.write_waypoint(wpt)?;
    }

    for task in &doc.tasks {
        writer.write_task(&task.description, &task.waypoints)?;
        if let Some(options) = &task.options {
            writer.write_task_options(options)?;
        }
    }

    log::debug!(
        "wrote {} waypoints and {} tasks",
        doc.waypoints.len(),
        doc.tasks.len()
    );
    Ok(writer.into_inner())
}

/// Render a document as CUP text.
pub fn to_cup_string(doc: &CupDocument) -> Result<String> {
    let buf = write_document(doc, Vec::new())?;
    String::from_utf8(buf).map_err(|_| CupError::NonUtf8Output)
}

/// Parse a JSON document and render it as CUP text.
pub fn json_to_cup_string(json: &str) -> Result<String> {
    let doc: CupDocument = serde_json::from_str(json)?;
    to_cup_string(&doc)
}
