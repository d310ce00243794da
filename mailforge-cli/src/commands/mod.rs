//! Command handler modules for the CLI.

mod delete;
mod duplicate;
mod list;
mod save;
mod show;
mod update;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(api_url: &str, token: Option<&str>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List {
            format,
            filter,
            tag,
        } => list::cmd_list(api_url, token, format, filter.as_deref(), tag),
        Commands::Show { id } => show::cmd_show(api_url, token, &id),
        Commands::Save {
            name,
            subject,
            design,
            tag,
            id,
        } => save::cmd_save(
            api_url,
            token,
            save::SaveParams {
                name: &name,
                subject: &subject,
                design: design.as_deref(),
                tags: tag,
                id: id.as_deref(),
            },
        ),
        Commands::Update {
            id,
            name,
            subject,
            tag,
            clear_tags,
        } => update::cmd_update(
            api_url,
            token,
            update::UpdateParams {
                id: &id,
                name: name.as_deref(),
                subject: subject.as_deref(),
                tags: tag,
                clear_tags,
            },
        ),
        Commands::Delete { id } => delete::cmd_delete(api_url, token, &id),
        Commands::Duplicate { id } => duplicate::cmd_duplicate(api_url, token, &id),
        Commands::SendTest { id, email } => send_test::cmd_send_test(api_url, token, &id, &email),
    }
}
