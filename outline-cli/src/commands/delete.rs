use anyhow::{Context, Result};
use outline_client::AccessKeyClient;

pub fn execute(client: &AccessKeyClient, key_id: &str) -> Result<()> {
    client.delete_key(key_id)
        .with_context(|| format!("Failed to delete access key {}", key_id))?;

    Ok(())
}
