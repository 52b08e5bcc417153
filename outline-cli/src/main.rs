use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outline_client::{AccessKeyClient, ClientConfig, StatusPolicy};
use std::time::Duration;

mod commands;

#[derive(Parser)]
#[command(name = "outline-manager")]
#[command(about = "Manage access keys and data limits on an Outline VPN server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Management API URL, including the secret path prefix
    #[arg(long, env = "OUTLINE_API_URL")]
    api_url: String,

    /// Verify the server's TLS certificate
    #[arg(long, env = "OUTLINE_STRICT_TLS")]
    strict_tls: bool,

    /// Request timeout in seconds
    #[arg(long, env = "OUTLINE_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Ignore error statuses on mutating calls, as older tools did
    #[arg(long, env = "OUTLINE_LENIENT")]
    lenient: bool,

    /// Logging level
    #[arg(long, env = "OUTLINE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List all access keys as JSON
    List,

    /// Create a new access key and print it as JSON
    Create {
        /// Name to give the new key
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Rename an access key
    Rename {
        /// Access key ID
        id: String,

        /// New name
        name: String,
    },

    /// Delete an access key
    Delete {
        /// Access key ID
        id: String,
    },

    /// Manage data transfer limits
    Limit {
        #[command(subcommand)]
        action: LimitAction,
    },
}

#[derive(Subcommand)]
enum LimitAction {
    /// Set a limit for one key, or for all keys when --key is omitted
    Set {
        /// Limit in bytes
        bytes: u64,

        /// Access key ID
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Remove a limit from one key, or the server-wide limit when --key is omitted
    Remove {
        /// Access key ID
        #[arg(short, long)]
        key: Option<String>,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let policy = if self.lenient {
            StatusPolicy::Lenient
        } else {
            StatusPolicy::Strict
        };

        ClientConfig::default()
            .with_accept_invalid_certs(!self.strict_tls)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_status_policy(policy)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Outline manager starting");

    let client = AccessKeyClient::with_config(&cli.api_url, cli.client_config())
        .context("Failed to create management API client")?;

    match cli.command {
        Commands::List => commands::list::execute(&client)?,
        Commands::Create { name } => commands::create::execute(&client, name.as_deref())?,
        Commands::Rename { id, name } => commands::rename::execute(&client, &id, &name)?,
        Commands::Delete { id } => commands::delete::execute(&client, &id)?,
        Commands::Limit { action } => match action {
            LimitAction::Set { bytes, key } => {
                commands::limit::set(&client, key.as_deref(), bytes)?;
            }
            LimitAction::Remove { key } => commands::limit::remove(&client, key.as_deref())?,
        },
    }

    Ok(())
}
