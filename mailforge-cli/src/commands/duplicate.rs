//! Duplicate template command.

use crate::error::CliError;
use crate::util::{block_on, create_manager, parse_id};

/// Duplicate template command handler
pub fn cmd_duplicate(api_url: &str, token: Option<&str>, id: &str) -> Result<(), CliError> {
    let source = parse_id(id)?;
    let manager = create_manager(api_url, token)?;

    let copy = block_on(manager.duplicate(source))??;
    println!("Duplicated {} into '{}' ({})", source, copy.name, copy.id);

    Ok(())
}
