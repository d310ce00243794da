//! Shared helpers for command handlers.

use std::future::Future;
use std::sync::Arc;

use mailforge_core::{HttpBackend, TemplateManager};
use uuid::Uuid;

use crate::error::CliError;

/// Builds a template manager over the configured HTTP backend
///
/// The manager is detached: commands drive exactly the refreshes they need.
pub fn create_manager(api_url: &str, token: Option<&str>) -> Result<TemplateManager, CliError> {
    let mut backend = HttpBackend::new(api_url)
        .map_err(|e| CliError::Config(format!("Failed to build API client: {e}")))?;
    if let Some(token) = token {
        backend = backend.with_token(token);
    }
    tracing::debug!(api_url, "Using template store endpoint");
    Ok(TemplateManager::detached(Arc::new(backend)))
}

/// Runs a future to completion on a fresh runtime
///
/// # Errors
///
/// Returns `CliError::Runtime` if the runtime cannot be created.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("Failed to create runtime: {e}")))?;
    Ok(rt.block_on(future))
}

/// Parses a template id argument
///
/// # Errors
///
/// Returns `CliError::Validation` if the argument is not a UUID.
pub fn parse_id(arg: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(arg).map_err(|_| CliError::Validation(format!("not a template id: '{arg}'")))
}
