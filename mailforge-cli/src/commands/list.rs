//! List templates command.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_meta_json, format_meta_table};
use crate::util::{block_on, create_manager};

/// List templates command handler
pub fn cmd_list(
    api_url: &str,
    token: Option<&str>,
    format: OutputFormat,
    filter: Option<&str>,
    tags: Vec<String>,
) -> Result<(), CliError> {
    let manager = create_manager(api_url, token)?;

    let visible = block_on(async {
        manager.refresh().await?;
        if let Some(text) = filter {
            manager.set_filter(text).await;
        }
        if !tags.is_empty() {
            manager.set_tag_filter(tags).await;
        }
        Ok::<_, mailforge_core::TemplateError>(manager.visible_templates().await)
    })??;

    match format {
        OutputFormat::Table => println!("{}", format_meta_table(&visible)),
        OutputFormat::Json => println!("{}", format_meta_json(&visible)?),
    }

    Ok(())
}
