use anyhow::{Context, Result};
use outline_client::AccessKeyClient;

pub fn execute(client: &AccessKeyClient) -> Result<()> {
    tracing::debug!("Listing keys on: {}", client.base_url());

    let keys = client.list_keys()
        .context("Failed to list access keys")?;

    tracing::info!("Server has {} access keys", keys.len());

    let json = serde_json::to_string_pretty(&keys)
        .context("Failed to serialize access keys")?;
    println!("{}", json);

    Ok(())
}
