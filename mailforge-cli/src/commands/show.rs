//! Show template command.

use crate::error::CliError;
use crate::format::format_record;
use crate::util::{block_on, create_manager, parse_id};

/// Show template command handler
pub fn cmd_show(api_url: &str, token: Option<&str>, id: &str) -> Result<(), CliError> {
    let id = parse_id(id)?;
    let manager = create_manager(api_url, token)?;

    let record = block_on(manager.load(id))??;
    println!("{}", format_record(&record)?);

    Ok(())
}
