//! Update template meta command.

use mailforge_core::MetaPatch;

use crate::error::CliError;
use crate::util::{block_on, create_manager, parse_id};

/// Parameters for the update command
pub struct UpdateParams<'a> {
    /// Template id
    pub id: &'a str,
    /// New display name, if given
    pub name: Option<&'a str>,
    /// New subject line, if given
    pub subject: Option<&'a str>,
    /// Replacement tags
    pub tags: Vec<String>,
    /// Remove all tags
    pub clear_tags: bool,
}

/// Update template meta command handler
pub fn cmd_update(
    api_url: &str,
    token: Option<&str>,
    params: UpdateParams<'_>,
) -> Result<(), CliError> {
    let id = parse_id(params.id)?;

    let mut patch = MetaPatch::new(id);
    if let Some(name) = params.name {
        patch = patch.with_name(name);
    }
    if let Some(subject) = params.subject {
        patch = patch.with_subject(subject);
    }
    if params.clear_tags {
        patch = patch.with_tags(Vec::new());
    } else if !params.tags.is_empty() {
        patch = patch.with_tags(params.tags);
    }

    if patch.is_empty() {
        return Err(CliError::Validation(
            "nothing to update: pass --name, --subject, --tag, or --clear-tags".to_string(),
        ));
    }

    let manager = create_manager(api_url, token)?;
    let patched = block_on(manager.update_meta(patch))??;

    // A missing match is a no-op, not a failure
    match patched {
        Some(patched) => println!("Updated template {}", patched.id),
        None => println!("No template matched {id}; nothing updated"),
    }

    Ok(())
}
