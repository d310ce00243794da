//! Delete template command.

use crate::error::CliError;
use crate::util::{block_on, create_manager, parse_id};

/// Delete template command handler
pub fn cmd_delete(api_url: &str, token: Option<&str>, id: &str) -> Result<(), CliError> {
    let id = parse_id(id)?;
    let manager = create_manager(api_url, token)?;

    block_on(manager.remove(id))??;
    println!("Deleted template {id}");

    Ok(())
}
