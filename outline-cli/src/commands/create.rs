use anyhow::{Context, Result};
use outline_client::AccessKeyClient;

pub fn execute(client: &AccessKeyClient, name: Option<&str>) -> Result<()> {
    let mut key = client.create_key()
        .context("Failed to create access key")?;

    if key.id.is_empty() {
        anyhow::bail!("Server did not return an access key");
    }

    // The create endpoint takes no body, so naming is a second request
    if let Some(name) = name {
        client.rename_key(&key.id, name)
            .context("Created access key but failed to name it")?;
        key.name = name.to_string();
    }

    let json = serde_json::to_string_pretty(&key)
        .context("Failed to serialize access key")?;
    println!("{}", json);

    Ok(())
}
