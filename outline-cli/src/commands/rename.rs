use anyhow::{Context, Result};
use outline_client::AccessKeyClient;

pub fn execute(client: &AccessKeyClient, key_id: &str, name: &str) -> Result<()> {
    client.rename_key(key_id, name)
        .with_context(|| format!("Failed to rename access key {}", key_id))?;

    tracing::info!("Access key {} is now {:?}", key_id, name);
    Ok(())
}
