use anyhow::{Context, Result};
use outline_client::AccessKeyClient;

/// Set a limit on one key, or the server-wide default when no key is given
pub fn set(client: &AccessKeyClient, key_id: Option<&str>, bytes: u64) -> Result<()> {
    match key_id {
        Some(id) => client.set_key_data_limit(id, bytes)
            .with_context(|| format!("Failed to set data limit for access key {}", id))?,
        None => client.set_server_data_limit(bytes)
            .context("Failed to set server data limit")?,
    }

    Ok(())
}

pub fn remove(client: &AccessKeyClient, key_id: Option<&str>) -> Result<()> {
    match key_id {
        Some(id) => client.remove_key_data_limit(id)
            .with_context(|| format!("Failed to remove data limit for access key {}", id))?,
        None => client.remove_server_data_limit()
            .context("Failed to remove server data limit")?,
    }

    Ok(())
}
