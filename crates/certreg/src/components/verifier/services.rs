use certreg_config::registry::RegistryConfig;
use certreg_ledger_client::{Error, RegistryClient};

/// Verification never needs key material; the client is built over the
/// anonymous read handle only.
pub(crate) fn read_only_client(config: &RegistryConfig) -> Result<RegistryClient, Error> {
    let contract_address =
        config
            .contract_address
            .as_deref()
            .ok_or_else(|| Error::MalformedInput {
                message: "no contract address configured".to_string(),
            })?;

    RegistryClient::connect(&config.endpoint, contract_address)
}
