//! Save template command.

use std::path::Path;

use mailforge_core::{DesignDocument, SaveTemplate};

use crate::error::CliError;
use crate::util::{block_on, create_manager, parse_id};

/// Parameters for the save command
pub struct SaveParams<'a> {
    /// Display name
    pub name: &'a str,
    /// Subject line
    pub subject: &'a str,
    /// Optional path to a JSON design payload
    pub design: Option<&'a Path>,
    /// Tags to assign
    pub tags: Vec<String>,
    /// Existing id to update, if any
    pub id: Option<&'a str>,
}

/// Save template command handler
pub fn cmd_save(api_url: &str, token: Option<&str>, params: SaveParams<'_>) -> Result<(), CliError> {
    let design = match params.design {
        Some(path) => read_design(path)?,
        None => DesignDocument::empty(),
    };

    let mut input = SaveTemplate::new(params.name, params.subject, design);
    if !params.tags.is_empty() {
        input = input.with_tags(params.tags);
    }
    if let Some(id) = params.id {
        input = input.with_id(parse_id(id)?);
    }

    let manager = create_manager(api_url, token)?;
    let record = block_on(manager.save(input))??;

    println!("Saved template '{}' ({})", record.name, record.id);
    if !record.versions.is_empty() {
        println!("Version history: {} snapshot(s)", record.versions.len());
    }

    Ok(())
}

/// Reads and parses a design payload from a JSON file
fn read_design(path: &Path) -> Result<DesignDocument, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        CliError::Validation(format!("design file {} is not valid JSON: {e}", path.display()))
    })?;
    Ok(DesignDocument::new(value))
}
