use std::path::Path;

use tracing::{debug, info};

use certreg_config::load_config;
use certreg_config::registry::RegistryConfig;
use certreg_crypto::identity::{derive_certificate_id, derive_content_hash};
use certreg_crypto::types::CertificateId;

use self::commands::{RegistryCommand, RegistryCommands};

pub(crate) mod commands;
pub(crate) mod services;

pub(crate) async fn handle_command(
    RegistryCommand { subcommands }: RegistryCommand,
    home: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match subcommands {
        Some(RegistryCommands::Compute(cmd)) => {
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let default_issuer = services::configured_signer(&config)
                .ok()
                .map(|signer| signer.address);
            let fields = cmd.fields.resolve(default_issuer)?;

            let id = derive_certificate_id(&fields);
            let content_hash = derive_content_hash(&fields)?;
            println!("id: {id}");
            println!("contentHash: {content_hash}");

            Ok(())
        }

        Some(RegistryCommands::Create(cmd)) => {
            debug!("Start executing the Create command");
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::authenticated_client(&config).await?;
            let fields = cmd.fields.resolve(client.signer_address())?;
            let (id, content_hash) =
                services::resolve_id_and_hash(&fields, &cmd.id, &cmd.content_hash)?;

            info!("Creating certificate {id}");
            let receipt = client
                .create(
                    id,
                    &fields.holder_name,
                    &fields.course,
                    fields.year,
                    content_hash,
                )
                .await?;
            println!("Created: 0x{}", hex::encode(receipt.transaction_hash));

            Ok(())
        }

        Some(RegistryCommands::Update(cmd)) => {
            debug!("Start executing the Update command");
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::authenticated_client(&config).await?;
            let fields = cmd.fields.resolve(client.signer_address())?;
            let (id, content_hash) =
                services::resolve_id_and_hash(&fields, &cmd.id, &cmd.content_hash)?;

            info!("Updating certificate {id}");
            let receipt = client
                .update(
                    id,
                    &fields.holder_name,
                    &fields.course,
                    fields.year,
                    content_hash,
                )
                .await?;
            println!("Updated: 0x{}", hex::encode(receipt.transaction_hash));

            Ok(())
        }

        Some(RegistryCommands::Revoke(cmd)) => {
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::authenticated_client(&config).await?;
            let id: CertificateId = cmd.id.parse()?;

            info!("Revoking certificate {id}");
            let receipt = client.set_revoked(id, true).await?;
            println!("Revoked: 0x{}", hex::encode(receipt.transaction_hash));

            Ok(())
        }

        Some(RegistryCommands::Unrevoke(cmd)) => {
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::authenticated_client(&config).await?;
            let id: CertificateId = cmd.id.parse()?;

            info!("Unrevoking certificate {id}");
            let receipt = client.set_revoked(id, false).await?;
            println!("Unrevoked: 0x{}", hex::encode(receipt.transaction_hash));

            Ok(())
        }

        Some(RegistryCommands::Delete(cmd)) => {
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::authenticated_client(&config).await?;
            let id: CertificateId = cmd.id.parse()?;

            info!("Deleting certificate {id}");
            let receipt = client.delete(id).await?;
            println!("Deleted: 0x{}", hex::encode(receipt.transaction_hash));

            Ok(())
        }

        None => Ok(()),
    }
}
