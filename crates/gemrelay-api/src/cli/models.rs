//! `gemrelay models`: print the upstream model catalog.

use crate::state::AppState;

/// Fetch the raw catalog and print it as pretty JSON on stdout.
pub async fn print_models(state: &AppState) -> anyhow::Result<()> {
    let catalog = state.prompt_service.catalog_raw().await?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
