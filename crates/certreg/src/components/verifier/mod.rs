use std::path::Path;

use tracing::debug;

use certreg_config::load_config;
use certreg_config::registry::RegistryConfig;
use certreg_crypto::identity::{derive_certificate_id, derive_content_hash};
use certreg_crypto::types::{CertificateId, ContentHash};

use self::commands::{VerifierCommand, VerifierCommands};

pub(crate) mod commands;
pub(crate) mod services;

pub(crate) async fn handle_command(
    VerifierCommand { subcommands }: VerifierCommand,
    home: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match subcommands {
        Some(VerifierCommands::Compute(cmd)) => {
            let fields = cmd.fields.resolve(None)?;

            let id = derive_certificate_id(&fields);
            let content_hash = derive_content_hash(&fields)?;
            println!("id: {id}");
            println!("contentHash: {content_hash}");

            Ok(())
        }

        Some(VerifierCommands::Verify(cmd)) => {
            debug!("Start executing the Verify command");
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::read_only_client(&config)?;
            let id: CertificateId = cmd.id.parse()?;
            let content_hash: ContentHash = cmd.content_hash.parse()?;

            let valid = client.verify(id, content_hash).await?;
            println!("Result: {}", if valid { "VALID" } else { "INVALID" });

            let core = client.fetch_core(id).await?;
            let text = client.fetch_text(id).await?;
            println!("present: {}", core.present);
            println!("revoked: {}", core.revoked);
            println!("issuer: 0x{}", hex::encode(core.issuer));
            println!("holderName: {}", text.holder_name);
            println!("course: {}", text.course);

            Ok(())
        }

        Some(VerifierCommands::Fetch(cmd)) => {
            let config =
                load_config::<RegistryConfig, _>(home, Some(cmd.connection.clone()));
            let client = services::read_only_client(&config)?;
            let id: CertificateId = cmd.id.parse()?;

            let core = client.fetch_core(id).await?;
            let text = client.fetch_text(id).await?;
            println!("present: {}", core.present);
            println!("revoked: {}", core.revoked);
            println!("issuer: 0x{}", hex::encode(core.issuer));
            println!("year: {}", core.year);
            println!("contentHash: {}", core.content_hash);
            println!("holderName: {}", text.holder_name);
            println!("course: {}", text.course);

            Ok(())
        }

        None => Ok(()),
    }
}
