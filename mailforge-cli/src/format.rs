//! Output formatting helpers.

use std::fmt::Write as _;

use mailforge_core::{TemplateMeta, TemplateRecord};

use crate::error::CliError;

/// Formats template summaries as an aligned table
#[must_use]
pub fn format_meta_table(templates: &[TemplateMeta]) -> String {
    if templates.is_empty() {
        return "No templates found.".to_string();
    }

    let mut output = String::new();

    // Calculate column widths
    let name_width = templates
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let subject_width = templates
        .iter()
        .map(|t| t.subject.len())
        .max()
        .unwrap_or(7)
        .max(7);
    let tags_width = templates
        .iter()
        .map(|t| t.tags.join(",").len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Print header
    let _ = writeln!(
        output,
        "{:<name_width$}  {:<subject_width$}  {:<tags_width$}  {}",
        "NAME", "SUBJECT", "TAGS", "ID"
    );
    let _ = writeln!(
        output,
        "{:-<name_width$}  {:-<subject_width$}  {:-<tags_width$}  {:-<36}",
        "", "", "", ""
    );

    // Print rows
    for template in templates {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<subject_width$}  {:<tags_width$}  {}",
            template.name,
            template.subject,
            template.tags.join(","),
            template.id
        );
    }

    output.trim_end().to_string()
}

/// Formats template summaries as pretty-printed JSON
///
/// # Errors
///
/// Returns `CliError::Config` if JSON serialization fails.
pub fn format_meta_json(templates: &[TemplateMeta]) -> Result<String, CliError> {
    serde_json::to_string_pretty(templates)
        .map_err(|e| CliError::Config(format!("Failed to serialize to JSON: {e}")))
}

/// Formats a full record for the show command
///
/// # Errors
///
/// Returns `CliError::Config` if the design payload fails to serialize.
pub fn format_record(record: &TemplateRecord) -> Result<String, CliError> {
    let design = serde_json::to_string_pretty(record.design.as_value())
        .map_err(|e| CliError::Config(format!("Failed to serialize design: {e}")))?;

    let mut output = String::new();
    let _ = writeln!(output, "Id:       {}", record.id);
    let _ = writeln!(output, "Name:     {}", record.name);
    let _ = writeln!(output, "Subject:  {}", record.subject);
    let _ = writeln!(output, "Tags:     {}", record.tags.join(", "));
    let _ = writeln!(output, "Created:  {}", record.created_at.to_rfc3339());
    let _ = writeln!(output, "Updated:  {}", record.updated_at.to_rfc3339());
    let _ = writeln!(output, "Versions: {}", record.versions.len());
    let _ = writeln!(output, "Design:\n{design}");

    Ok(output.trim_end().to_string())
}
